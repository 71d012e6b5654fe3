//! Environment-driven job configuration.
//!
//! # Responsibility
//! - Resolve endpoint URL, per-job log paths, rotation ceiling and the
//!   heartbeat toggle from environment variables with hard defaults.
//!
//! # Invariants
//! - Every parameter is overridable without code changes.
//! - Unparsable overrides fall back to the defaults instead of failing the
//!   job run.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:8000/graphql";
pub const DEFAULT_LOW_STOCK_LOG: &str = "/tmp/low_stock_updates_log.txt";
pub const DEFAULT_ORDER_REMINDERS_LOG: &str = "/tmp/order_reminders_log.txt";
pub const DEFAULT_HEARTBEAT_LOG: &str = "/tmp/crm_heartbeat.log";
pub const DEFAULT_MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

/// Resolved configuration for one job binary invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub graphql_url: String,
    pub low_stock_log: PathBuf,
    pub order_reminders_log: PathBuf,
    pub heartbeat_log: PathBuf,
    pub max_log_bytes: u64,
    pub heartbeat_enabled: bool,
}

impl JobConfig {
    /// Reads the environment, falling back to the defaults above.
    ///
    /// Recognized variables: `GRAPHQL_URL`, `CRM_LOW_STOCK_LOG`,
    /// `CRM_ORDER_REMINDERS_LOG`, `CRM_HEARTBEAT_LOG`, `CRM_LOG_MAX_BYTES`,
    /// `CRON_HEARTBEAT_ENABLED`.
    pub fn from_env() -> Self {
        Self {
            graphql_url: env_or("GRAPHQL_URL", DEFAULT_GRAPHQL_URL),
            low_stock_log: PathBuf::from(env_or("CRM_LOW_STOCK_LOG", DEFAULT_LOW_STOCK_LOG)),
            order_reminders_log: PathBuf::from(env_or(
                "CRM_ORDER_REMINDERS_LOG",
                DEFAULT_ORDER_REMINDERS_LOG,
            )),
            heartbeat_log: PathBuf::from(env_or("CRM_HEARTBEAT_LOG", DEFAULT_HEARTBEAT_LOG)),
            max_log_bytes: env::var("CRM_LOG_MAX_BYTES")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_MAX_LOG_BYTES),
            heartbeat_enabled: env::var("CRON_HEARTBEAT_ENABLED")
                .map(|value| value.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
