//! Cron entry point: liveness heartbeat.
//!
//! Scheduled externally every 5 minutes (see `crontab.txt`); disabled via
//! `CRON_HEARTBEAT_ENABLED=false`. Always exits 0.

use crmlite_jobs::jobs::heartbeat;
use crmlite_jobs::{init_console_logging, HttpEndpoint, JobConfig, JobLog};

fn main() {
    let _logger = init_console_logging();
    let config = JobConfig::from_env();

    if !config.heartbeat_enabled {
        return;
    }

    let mut log = match JobLog::open(&config.heartbeat_log, config.max_log_bytes) {
        Ok(log) => log,
        Err(err) => {
            eprintln!(
                "cannot open job log {}: {err}",
                config.heartbeat_log.display()
            );
            return;
        }
    };

    match HttpEndpoint::new(&config.graphql_url) {
        Ok(endpoint) => {
            heartbeat::run(&mut log, &endpoint);
        }
        Err(err) => log.warn(&format!("GraphQL endpoint is unresponsive: {err}")),
    }
}
