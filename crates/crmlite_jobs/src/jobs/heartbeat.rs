//! Liveness heartbeat (runs every 5 minutes when enabled).

use crate::endpoint::RemoteEndpoint;
use crate::joblog::JobLog;
use crate::jobs::JobOutcome;

/// Appends an alive marker and probes the endpoint's `hello` query.
///
/// An unresponsive endpoint is recorded as a warning; the heartbeat itself
/// still counts as completed once the alive line is written.
pub fn run(log: &mut JobLog, endpoint: &impl RemoteEndpoint) -> JobOutcome {
    log.info("CRM is alive");

    match endpoint.hello() {
        Ok(_) => log.info("GraphQL endpoint is responsive"),
        Err(err) => log.warn(&format!("GraphQL endpoint is unresponsive: {err}")),
    }

    JobOutcome::Completed(1)
}
