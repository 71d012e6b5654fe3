//! Cron entry point: order-reminder sweep.
//!
//! Scheduled externally every day at 08:00 (see `crontab.txt`). Always exits
//! 0; failures are visible only in the job log.

use crmlite_jobs::jobs::{reminders, JobOutcome};
use crmlite_jobs::{init_console_logging, HttpEndpoint, JobConfig, JobLog};

fn main() {
    let _logger = init_console_logging();
    let config = JobConfig::from_env();

    let mut log = match JobLog::open(&config.order_reminders_log, config.max_log_bytes) {
        Ok(log) => log,
        Err(err) => {
            eprintln!(
                "cannot open job log {}: {err}",
                config.order_reminders_log.display()
            );
            return;
        }
    };

    let outcome = match HttpEndpoint::new(&config.graphql_url) {
        Ok(endpoint) => reminders::run(&mut log, &endpoint),
        Err(err) => {
            log.error(&format!("GraphQL query failed: {err}"));
            JobOutcome::Failed
        }
    };

    if outcome != JobOutcome::Failed {
        println!("Order reminders processed!");
    }
}
