//! Core write-path logic for the crmlite backend.
//! This crate is the single source of truth for CRM business invariants:
//! validation rules, the mutation engine, and the stock replenishment
//! operation over the SQLite entity store.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::customer::{Customer, CustomerId, NewCustomer};
pub use model::order::{NewOrder, Order, OrderId, RecentOrderRecord};
pub use model::product::{NewProduct, Product, ProductId};
pub use model::ValidationError;
pub use repo::customer_repo::{CustomerRepository, SqliteCustomerRepository};
pub use repo::order_repo::{OrderRepository, SqliteOrderRepository};
pub use repo::product_repo::{ProductRepository, SqliteProductRepository};
pub use repo::{RepoError, RepoResult, TransactionScope};
pub use service::customer_service::{BulkCreated, CreatedCustomer, CustomerService};
pub use service::inventory_service::{InventoryService, RestockPolicy, RestockRun};
pub use service::order_service::OrderService;
pub use service::product_service::{CreatedProduct, ProductService};
pub use service::{MutationError, MutationResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
