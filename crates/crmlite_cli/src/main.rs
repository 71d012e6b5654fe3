//! Operator CLI for the crmlite core.
//!
//! # Responsibility
//! - Provide a minimal executable to exercise the core directly: health
//!   ping, a local replenishment run, and the recent-order read model.
//! - Keep output deterministic for quick local sanity checks.

use chrono::{Days, Utc};
use crmlite_core::db::open_db;
use crmlite_core::{
    default_log_level, init_logging, InventoryService, OrderService, RestockPolicy,
    SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository,
};
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("ping");

    init_diagnostics();

    let result = match command {
        "ping" => {
            println!("crmlite_core ping={}", crmlite_core::ping());
            println!("crmlite_core version={}", crmlite_core::core_version());
            Ok(())
        }
        "restock" => run_restock(),
        "recent-orders" => run_recent_orders(),
        other => {
            eprintln!("unknown command `{other}`; expected ping|restock|recent-orders");
            std::process::exit(2);
        }
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn run_restock() -> Result<(), String> {
    let conn = open_db(db_path()).map_err(|err| err.to_string())?;
    let repo = SqliteProductRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let mut service = InventoryService::new(repo);

    let run = service.update_low_stock(&RestockPolicy::from_env());
    println!("{}", run.message);
    for product in &run.products {
        println!("{}: {}", product.name, product.quantity);
    }

    if run.success {
        Ok(())
    } else {
        Err("restock run failed; see message above".to_string())
    }
}

fn run_recent_orders() -> Result<(), String> {
    let conn = open_db(db_path()).map_err(|err| err.to_string())?;
    let service = OrderService::new(
        SqliteCustomerRepository::try_new(&conn).map_err(|err| err.to_string())?,
        SqliteProductRepository::try_new(&conn).map_err(|err| err.to_string())?,
        SqliteOrderRepository::try_new(&conn).map_err(|err| err.to_string())?,
    );

    let since = Utc::now() - Days::new(7);
    let records = service.recent_orders(since).map_err(|err| err.to_string())?;

    if records.is_empty() {
        println!("No orders found in the last 7 days");
        return Ok(());
    }
    for record in &records {
        println!(
            "Order ID: {} ({}), Customer: {}",
            record.order_id,
            record.order_date.to_rfc3339(),
            record.customer_email
        );
    }
    println!("{} recent orders", records.len());

    Ok(())
}

fn db_path() -> PathBuf {
    std::env::var("CRM_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("crm.sqlite3"))
}

fn init_diagnostics() {
    let log_dir = std::env::var("CRM_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("crmlite-logs"));

    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), dir) {
            eprintln!("logging disabled: {err}");
        }
    }
}
