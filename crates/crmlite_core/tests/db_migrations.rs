use crmlite_core::db::migrations::latest_version;
use crmlite_core::db::{open_db, open_db_in_memory};
use crmlite_core::{RepoError, SqliteCustomerRepository, SqliteOrderRepository};
use rusqlite::Connection;

#[test]
fn fresh_database_reaches_latest_schema_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(latest_version() > 0);
}

#[test]
fn reopening_a_migrated_file_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("crm.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        conn.execute(
            "INSERT INTO products (name, price, quantity) VALUES ('Probe', '1.00', 2);",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM products;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn foreign_keys_are_enabled_on_opened_connections() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteCustomerRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteOrderRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("orders"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE customers (
            customer_id INTEGER PRIMARY KEY,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL,
            email       TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCustomerRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "customers",
            column: "phone"
        })
    ));
}
