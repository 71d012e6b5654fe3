//! Mutation engine services.
//!
//! # Responsibility
//! - Orchestrate validation rules and store calls into the write-path
//!   operations (single create, bulk create, order create, replenishment).
//! - Own the caller-facing error taxonomy.
//!
//! # Invariants
//! - A failed validation aborts the current operation with no partial write.
//! - Services depend only on the repository capability interfaces, never on
//!   a concrete persistence technology.

use crate::model::ValidationError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer_service;
pub mod inventory_service;
pub mod order_service;
pub mod product_service;

pub type MutationResult<T> = Result<T, MutationError>;

/// Caller-facing error for mutation operations.
#[derive(Debug)]
pub enum MutationError {
    /// A single rule violation, including flattened not-found cases.
    Validation(ValidationError),
    /// Per-item messages collected by a bulk operation; always paired with a
    /// full rollback of that batch.
    Bulk(Vec<String>),
    /// Underlying persistence failure.
    Storage(RepoError),
}

impl Display for MutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Bulk(errors) => {
                write!(f, "bulk create failed: {}", errors.join("; "))
            }
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MutationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Bulk(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ValidationError> for MutationError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for MutationError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}
