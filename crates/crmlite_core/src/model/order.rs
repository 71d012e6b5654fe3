//! Order record, creation input and reminder read model.

use crate::model::customer::CustomerId;
use crate::model::product::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned stable order identifier.
pub type OrderId = i64;

/// Canonical order record.
///
/// # Invariants
/// - References exactly one existing customer and at least one existing
///   product.
/// - `total_amount` is the sum of the referenced products' prices captured at
///   creation time; it is never recomputed.
/// - Orders are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub product_ids: Vec<ProductId>,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
}

/// Creation input for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub product_ids: Vec<ProductId>,
    /// Defaults to the creation time when not supplied.
    pub order_date: Option<DateTime<Utc>>,
}

impl NewOrder {
    /// Resolved order date: the supplied value or "now".
    pub fn order_date_or_now(&self) -> DateTime<Utc> {
        self.order_date.unwrap_or_else(Utc::now)
    }
}

/// Read model for the reminder sweep: one recent order joined with the
/// owning customer's email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentOrderRecord {
    pub order_id: OrderId,
    pub order_date: DateTime<Utc>,
    pub customer_email: String,
}
