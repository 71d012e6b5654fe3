//! Product store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide product creation, resolution and the low-stock scan/update.
//! - Keep product SQL (including decimal price encoding) inside the
//!   persistence boundary.
//!
//! # Invariants
//! - Prices are persisted as exact decimal text, never floats.
//! - `list_below_quantity` returns rows ordered by id, so replenishment
//!   reports products in their pre-run relative order.

use crate::model::product::{NewProduct, Product, ProductId};
use crate::repo::{ensure_store_ready, RepoError, RepoResult, TransactionScope};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

const PRODUCT_SELECT_SQL: &str = "SELECT product_id, name, price, quantity FROM products";

/// Store interface for product operations.
pub trait ProductRepository {
    /// Persists a new product and returns the stored record.
    fn create_product(&self, input: &NewProduct) -> RepoResult<Product>;
    /// Gets one product by id.
    fn get_product(&self, id: ProductId) -> RepoResult<Option<Product>>;
    /// Resolves the given ids to products. Missing ids are simply absent from
    /// the result; callers compare counts to detect them.
    fn get_products_by_ids(&self, ids: &[ProductId]) -> RepoResult<Vec<Product>>;
    /// Lists products with `quantity` strictly below `threshold`, ordered by
    /// id.
    fn list_below_quantity(&self, threshold: i64) -> RepoResult<Vec<Product>>;
    /// Overwrites one product's quantity.
    fn set_quantity(&self, id: ProductId, quantity: i64) -> RepoResult<()>;
}

/// SQLite-backed product store.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_store_ready(
            conn,
            "products",
            &["product_id", "name", "price", "quantity"],
        )?;
        Ok(Self { conn })
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn create_product(&self, input: &NewProduct) -> RepoResult<Product> {
        self.conn.execute(
            "INSERT INTO products (name, price, quantity) VALUES (?1, ?2, ?3);",
            params![input.name, input.price.to_string(), input.quantity],
        )?;

        Ok(Product {
            id: self.conn.last_insert_rowid(),
            name: input.name.clone(),
            price: input.price,
            quantity: input.quantity,
        })
    }

    fn get_product(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} WHERE product_id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }

        Ok(None)
    }

    fn get_products_by_ids(&self, ids: &[ProductId]) -> RepoResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let mut stmt = self.conn.prepare(&format!(
            "{PRODUCT_SELECT_SQL} WHERE product_id IN ({placeholders}) ORDER BY product_id ASC;"
        ))?;

        let bind_values: Vec<Value> = ids.iter().map(|id| Value::Integer(*id)).collect();
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }

    fn list_below_quantity(&self, threshold: i64) -> RepoResult<Vec<Product>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PRODUCT_SELECT_SQL} WHERE quantity < ?1 ORDER BY product_id ASC;"
        ))?;

        let mut rows = stmt.query([threshold])?;
        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }

    fn set_quantity(&self, id: ProductId, quantity: i64) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE products SET quantity = ?1 WHERE product_id = ?2;",
            params![quantity, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "product",
                id,
            });
        }

        Ok(())
    }
}

impl TransactionScope for SqliteProductRepository<'_> {
    fn in_transaction<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        E: From<RepoError>,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        let conn = self.conn;
        let tx = conn
            .unchecked_transaction()
            .map_err(|err| E::from(RepoError::from(err)))?;
        let value = f(self)?;
        tx.commit().map_err(|err| E::from(RepoError::from(err)))?;
        Ok(value)
    }
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    let price_text: String = row.get("price")?;
    let price = Decimal::from_str(&price_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid price value `{price_text}` in products.price"))
    })?;

    Ok(Product {
        id: row.get("product_id")?,
        name: row.get("name")?,
        price,
        quantity: row.get("quantity")?,
    })
}
