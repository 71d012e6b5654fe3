//! Order-reminder sweep (runs daily).

use crate::endpoint::RemoteEndpoint;
use crate::joblog::JobLog;
use crate::jobs::JobOutcome;
use chrono::{Days, Utc};

/// Orders placed within this many days are swept.
pub const REMINDER_WINDOW_DAYS: u64 = 7;

/// Queries orders from the last week and logs one reminder line per order
/// plus a summary.
pub fn run(log: &mut JobLog, endpoint: &impl RemoteEndpoint) -> JobOutcome {
    log.info("Starting order reminders processing");

    let since = Utc::now().date_naive() - Days::new(REMINDER_WINDOW_DAYS);
    let orders = match endpoint.recent_orders(since) {
        Ok(orders) => orders,
        Err(err) => {
            log.error(&format!("GraphQL query failed: {err}"));
            return JobOutcome::Failed;
        }
    };

    if orders.is_empty() {
        log.warn("No orders found in the last 7 days");
        return JobOutcome::Empty;
    }

    for order in &orders {
        log.info(&format!(
            "Order ID: {}, Customer: {}",
            order.id, order.customer.email
        ));
    }
    log.info(&format!("Processed {} order reminders", orders.len()));

    JobOutcome::Completed(orders.len())
}
