//! Scheduled job procedures.
//!
//! # Responsibility
//! - Implement each unattended run as a plain function of an opened job log
//!   and an endpoint implementation.
//!
//! # Invariants
//! - Jobs are fire-and-log: every failure is appended to the job log and the
//!   procedure returns normally. Nothing propagates past the job boundary.
//! - There is no retry inside a run; the next scheduled tick is the retry.

pub mod heartbeat;
pub mod reminders;
pub mod restock;

/// Terminal state of one job run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// The endpoint call succeeded and this many entities were logged.
    Completed(usize),
    /// The endpoint call succeeded with an empty result set (not an error).
    Empty,
    /// The call failed; the error was recorded in the job log.
    Failed,
}
