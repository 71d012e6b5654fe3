//! Customer store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the customer lookups and writes the mutation engine needs.
//! - Keep customer SQL inside the persistence boundary.
//!
//! # Invariants
//! - `created_at` is assigned here, once, at insert time.
//! - `customers.email` carries a unique index; the engine-level uniqueness
//!   check runs first, the index is the storage backstop.

use crate::model::customer::{Customer, CustomerId, NewCustomer};
use crate::repo::{ensure_store_ready, RepoError, RepoResult, TransactionScope};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

const CUSTOMER_SELECT_SQL: &str = "SELECT
    customer_id,
    first_name,
    last_name,
    email,
    phone,
    created_at
FROM customers";

/// Store interface for customer operations.
pub trait CustomerRepository {
    /// Persists a new customer and returns the stored record with its
    /// server-assigned id and creation timestamp.
    fn create_customer(&self, input: &NewCustomer) -> RepoResult<Customer>;
    /// Returns whether any customer already owns `email`.
    fn email_exists(&self, email: &str) -> RepoResult<bool>;
    /// Gets one customer by id.
    fn get_customer(&self, id: CustomerId) -> RepoResult<Option<Customer>>;
}

/// SQLite-backed customer store.
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_store_ready(
            conn,
            "customers",
            &[
                "customer_id",
                "first_name",
                "last_name",
                "email",
                "phone",
                "created_at",
            ],
        )?;
        Ok(Self { conn })
    }
}

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn create_customer(&self, input: &NewCustomer) -> RepoResult<Customer> {
        let created_at = Utc::now();

        self.conn.execute(
            "INSERT INTO customers (first_name, last_name, email, phone, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                input.first_name,
                input.last_name,
                input.email,
                input.phone_or_default(),
                created_at,
            ],
        )?;

        Ok(Customer {
            id: self.conn.last_insert_rowid(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone: input.phone_or_default().to_string(),
            created_at,
        })
    }

    fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM customers WHERE email = ?1);",
            [email],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    fn get_customer(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE customer_id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_customer_row(row)?));
        }

        Ok(None)
    }
}

impl TransactionScope for SqliteCustomerRepository<'_> {
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

fn parse_customer_row(row: &Row<'_>) -> RepoResult<Customer> {
    let created_at: DateTime<Utc> = row.get("created_at")?;
    Ok(Customer {
        id: row.get("customer_id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        created_at,
    })
}
