//! Order creation and the recent-order read path.
//!
//! # Responsibility
//! - Enforce referential checks (customer exists, product set resolves) and
//!   capture the order total at creation time.
//!
//! # Invariants
//! - `total_amount` is the sum of resolved product prices at call time; later
//!   price changes never alter a stored order.
//! - Any validation failure leaves no partial write behind.

use crate::model::order::{NewOrder, Order, RecentOrderRecord};
use crate::model::ValidationError;
use crate::repo::customer_repo::CustomerRepository;
use crate::repo::order_repo::OrderRepository;
use crate::repo::product_repo::ProductRepository;
use crate::service::MutationResult;
use chrono::{DateTime, Utc};
use log::info;
use rust_decimal::Decimal;

/// Use-case service for order writes and the reminder read model.
pub struct OrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Creates one order.
    ///
    /// # Contract
    /// - Checks run in order: customer existence, non-empty product list,
    ///   full resolvability of every product id (no silent drops).
    /// - `order_date` defaults to "now" when not supplied.
    pub fn create_order(&self, input: &NewOrder) -> MutationResult<Order> {
        if self.customers.get_customer(input.customer_id)?.is_none() {
            return Err(ValidationError::UnknownCustomer.into());
        }

        if input.product_ids.is_empty() {
            return Err(ValidationError::EmptyProductList.into());
        }

        let products = self.products.get_products_by_ids(&input.product_ids)?;
        if products.len() != input.product_ids.len() {
            return Err(ValidationError::UnresolvedProducts.into());
        }

        let total_amount: Decimal = products.iter().map(|product| product.price).sum();
        let order = self.orders.create_order(
            input.customer_id,
            &input.product_ids,
            input.order_date_or_now(),
            total_amount,
        )?;

        info!(
            "event=order_created module=service status=ok order_id={} total={}",
            order.id, order.total_amount
        );

        Ok(order)
    }

    /// Lists orders placed at or after `since`, with the owning customer's
    /// email (the reminder sweep's query).
    pub fn recent_orders(&self, since: DateTime<Utc>) -> MutationResult<Vec<RecentOrderRecord>> {
        Ok(self.orders.recent_orders(since)?)
    }
}
