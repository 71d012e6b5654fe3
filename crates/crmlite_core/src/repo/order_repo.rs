//! Order store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the order row and its product associations as one atomic write.
//! - Serve the recent-order read model for the reminder sweep.
//!
//! # Invariants
//! - An order row is never visible without its `order_products` rows.
//! - `recent_orders` ordering is deterministic by date then id.

use crate::model::customer::CustomerId;
use crate::model::order::{Order, RecentOrderRecord};
use crate::model::product::ProductId;
use crate::repo::{ensure_store_ready, RepoResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rusqlite::{params, Connection};
use std::str::FromStr;

/// Store interface for order operations.
pub trait OrderRepository {
    /// Persists an order with its product associations atomically. The caller
    /// supplies the captured `total_amount` and the resolved `order_date`.
    fn create_order(
        &self,
        customer_id: CustomerId,
        product_ids: &[ProductId],
        order_date: DateTime<Utc>,
        total_amount: Decimal,
    ) -> RepoResult<Order>;

    /// Lists orders with `order_date >= since`, joined with the owning
    /// customer's email.
    fn recent_orders(&self, since: DateTime<Utc>) -> RepoResult<Vec<RecentOrderRecord>>;
}

/// SQLite-backed order store.
pub struct SqliteOrderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOrderRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_store_ready(
            conn,
            "orders",
            &["order_id", "customer_id", "order_date", "total_amount"],
        )?;
        ensure_store_ready(conn, "order_products", &["order_id", "product_id"])?;
        Ok(Self { conn })
    }
}

impl OrderRepository for SqliteOrderRepository<'_> {
    fn create_order(
        &self,
        customer_id: CustomerId,
        product_ids: &[ProductId],
        order_date: DateTime<Utc>,
        total_amount: Decimal,
    ) -> RepoResult<Order> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO orders (customer_id, order_date, total_amount)
             VALUES (?1, ?2, ?3);",
            params![customer_id, order_date, total_amount.to_string()],
        )?;
        let order_id = tx.last_insert_rowid();

        for product_id in product_ids {
            tx.execute(
                "INSERT INTO order_products (order_id, product_id) VALUES (?1, ?2);",
                params![order_id, product_id],
            )?;
        }

        tx.commit()?;

        Ok(Order {
            id: order_id,
            customer_id,
            product_ids: product_ids.to_vec(),
            order_date,
            total_amount,
        })
    }

    fn recent_orders(&self, since: DateTime<Utc>) -> RepoResult<Vec<RecentOrderRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT o.order_id, o.order_date, c.email
             FROM orders o
             JOIN customers c ON c.customer_id = o.customer_id
             WHERE o.order_date >= ?1
             ORDER BY o.order_date ASC, o.order_id ASC;",
        )?;

        let mut rows = stmt.query([since])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let order_date: DateTime<Utc> = row.get("order_date")?;
            records.push(RecentOrderRecord {
                order_id: row.get("order_id")?,
                order_date,
                customer_email: row.get("email")?,
            });
        }

        Ok(records)
    }
}

/// Reads back the full order record, including associations.
///
/// Exposed for tests and operator tooling; the write path never re-reads.
pub fn load_order(conn: &Connection, order_id: i64) -> RepoResult<Option<Order>> {
    let mut stmt = conn.prepare(
        "SELECT order_id, customer_id, order_date, total_amount
         FROM orders WHERE order_id = ?1;",
    )?;

    let mut rows = stmt.query([order_id])?;
    let Some(row) = rows.next()? else {
        return Ok(None);
    };

    let total_text: String = row.get("total_amount")?;
    let total_amount = Decimal::from_str(&total_text).map_err(|_| {
        crate::repo::RepoError::InvalidData(format!(
            "invalid total value `{total_text}` in orders.total_amount"
        ))
    })?;
    let order_date: DateTime<Utc> = row.get("order_date")?;
    let customer_id: CustomerId = row.get("customer_id")?;

    let mut assoc_stmt = conn.prepare(
        "SELECT product_id FROM order_products WHERE order_id = ?1 ORDER BY product_id ASC;",
    )?;
    let mut assoc_rows = assoc_stmt.query([order_id])?;
    let mut product_ids = Vec::new();
    while let Some(assoc) = assoc_rows.next()? {
        product_ids.push(assoc.get::<_, ProductId>(0)?);
    }

    Ok(Some(Order {
        id: order_id,
        customer_id,
        product_ids,
        order_date,
        total_amount,
    }))
}
