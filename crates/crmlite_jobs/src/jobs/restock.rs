//! Low-stock replenishment trigger (runs every 12 hours).

use crate::endpoint::RemoteEndpoint;
use crate::joblog::JobLog;
use crate::jobs::JobOutcome;

/// Invokes the replenishment mutation and logs one line per restocked
/// product plus a summary.
pub fn run(log: &mut JobLog, endpoint: &impl RemoteEndpoint) -> JobOutcome {
    log.info("Starting low-stock product update");

    let response = match endpoint.update_low_stock() {
        Ok(response) => response,
        Err(err) => {
            log.error(&format!("Failed to execute mutation: {err}"));
            return JobOutcome::Failed;
        }
    };

    if !response.success {
        log.error(&format!("Mutation failed: {}", response.message));
        return JobOutcome::Failed;
    }

    if response.products.is_empty() {
        log.warn("No low-stock products found to update");
        return JobOutcome::Empty;
    }

    for product in &response.products {
        log.info(&format!(
            "Updated product: {} (ID: {}), New stock: {}",
            product.name, product.product_id, product.quantity
        ));
    }
    log.info(&format!(
        "Processed {} low-stock product updates",
        response.products.len()
    ));

    JobOutcome::Completed(response.products.len())
}
