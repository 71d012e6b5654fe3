//! Scheduled job runner for the crmlite backend.
//!
//! Two periodic tasks (low-stock replenishment trigger, order-reminder
//! sweep) plus a heartbeat probe, each invoked by an external scheduler,
//! calling the remote GraphQL endpoint and appending outcomes to a dedicated
//! rotating log file. Jobs log failures and return normally; the scheduler
//! never sees a crash.

pub mod config;
pub mod endpoint;
pub mod joblog;
pub mod jobs;

pub use config::JobConfig;
pub use endpoint::{HttpEndpoint, RemoteEndpoint, TransportError};
pub use joblog::JobLog;
pub use jobs::JobOutcome;

/// Starts stderr diagnostics for a job binary (`RUST_LOG` override, `info`
/// default). Returns `None` when logging cannot start; the job proceeds
/// without diagnostics rather than failing the run.
pub fn init_console_logging() -> Option<flexi_logger::LoggerHandle> {
    flexi_logger::Logger::try_with_env_or_str("info")
        .ok()?
        .start()
        .ok()
}
