//! Low-stock replenishment operation.
//!
//! # Responsibility
//! - Scan for under-stock products and increment each by the restock amount,
//!   all inside one transaction scope.
//! - Report the run as a payload (`success` flag + message), never a panic.
//!
//! # Invariants
//! - Either every matching product is updated or, on storage failure, none
//!   are.
//! - Reported products carry post-increment quantities in pre-run id order.

use crate::model::product::Product;
use crate::repo::product_repo::ProductRepository;
use crate::repo::TransactionScope;
use crate::service::MutationError;
use log::{error, info};
use std::env;

const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;
const DEFAULT_RESTOCK_AMOUNT: i64 = 10;

/// Replenishment knobs.
///
/// A misconfigured pair with `restock_amount < low_stock_threshold` can leave
/// a product below threshold across repeated runs; the values are kept
/// explicit here so operators can see and test both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestockPolicy {
    pub low_stock_threshold: i64,
    pub restock_amount: i64,
}

impl Default for RestockPolicy {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            restock_amount: DEFAULT_RESTOCK_AMOUNT,
        }
    }
}

impl RestockPolicy {
    /// Reads `CRM_LOW_STOCK_THRESHOLD` / `CRM_RESTOCK_AMOUNT`, falling back
    /// to the defaults for missing or unparsable values.
    pub fn from_env() -> Self {
        Self {
            low_stock_threshold: env_i64("CRM_LOW_STOCK_THRESHOLD", DEFAULT_LOW_STOCK_THRESHOLD),
            restock_amount: env_i64("CRM_RESTOCK_AMOUNT", DEFAULT_RESTOCK_AMOUNT),
        }
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Outcome of one replenishment run.
///
/// Storage failures are reported here (`success = false`, empty product
/// list) rather than propagated, matching the operation's endpoint contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockRun {
    pub products: Vec<Product>,
    pub success: bool,
    pub message: String,
}

/// Use-case service for the replenishment operation.
pub struct InventoryService<R: ProductRepository + TransactionScope> {
    repo: R,
}

impl<R: ProductRepository + TransactionScope> InventoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Runs one scan-and-update pass under `policy`.
    pub fn update_low_stock(&mut self, policy: &RestockPolicy) -> RestockRun {
        let result: Result<Vec<Product>, MutationError> = self.repo.in_transaction(|repo| {
            let low_stock = repo.list_below_quantity(policy.low_stock_threshold)?;
            let mut updated = Vec::with_capacity(low_stock.len());

            for product in low_stock {
                let quantity = product.quantity + policy.restock_amount;
                repo.set_quantity(product.id, quantity)?;
                updated.push(Product { quantity, ..product });
            }

            Ok(updated)
        });

        match result {
            Ok(products) => {
                info!(
                    "event=restock_run module=service status=ok count={}",
                    products.len()
                );
                RestockRun {
                    message: format!("Updated {} low-stock products", products.len()),
                    success: true,
                    products,
                }
            }
            Err(err) => {
                error!("event=restock_run module=service status=error error={err}");
                RestockRun {
                    products: Vec::new(),
                    success: false,
                    message: format!("Failed to update low-stock products: {err}"),
                }
            }
        }
    }
}
