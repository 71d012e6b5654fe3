//! Cron entry point: low-stock replenishment trigger.
//!
//! Scheduled externally every 12 hours (see `crontab.txt`). Always exits 0;
//! failures are visible only in the job log.

use crmlite_jobs::jobs::restock;
use crmlite_jobs::{init_console_logging, HttpEndpoint, JobConfig, JobLog};

fn main() {
    let _logger = init_console_logging();
    let config = JobConfig::from_env();

    let mut log = match JobLog::open(&config.low_stock_log, config.max_log_bytes) {
        Ok(log) => log,
        Err(err) => {
            eprintln!(
                "cannot open job log {}: {err}",
                config.low_stock_log.display()
            );
            return;
        }
    };

    match HttpEndpoint::new(&config.graphql_url) {
        Ok(endpoint) => {
            restock::run(&mut log, &endpoint);
        }
        Err(err) => log.error(&format!("Failed to execute mutation: {err}")),
    }
}
