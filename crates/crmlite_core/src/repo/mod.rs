//! Entity store abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define the capability interfaces the mutation engine depends on
//!   (lookups, existence checks, creates, the low-stock scan).
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Repository constructors reject connections without applied migrations.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer_repo;
pub mod order_repo;
pub mod product_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic store error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound {
        entity: &'static str,
        id: i64,
    },
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{column}` on table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Explicit scoped-transaction capability of the entity store.
///
/// `in_transaction` begins one storage transaction, runs `f`, commits when it
/// returns `Ok` and rolls back when it returns `Err`. Writes performed inside
/// `f` become visible to other readers all at once or not at all.
///
/// # Invariants
/// - Scopes do not nest; callers must not re-enter `in_transaction` from `f`.
pub trait TransactionScope {
    fn in_transaction<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        E: From<RepoError>,
        F: FnOnce(&mut Self) -> Result<T, E>;
}

/// Verifies that `conn` carries the fully migrated schema and the table and
/// columns a repository needs.
pub(crate) fn ensure_store_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
        [table],
        |row| row.get(0),
    )?;
    if table_count == 0 {
        return Err(RepoError::MissingRequiredTable(table));
    }

    let mut stmt = conn.prepare(&format!("SELECT name FROM pragma_table_info('{table}');"))?;
    let mut present = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(0)?);
    }
    for column in columns {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}
