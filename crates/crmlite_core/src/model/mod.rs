//! CRM domain model and pure write-path validation rules.
//!
//! # Responsibility
//! - Define the canonical Customer/Product/Order records and their inputs.
//! - Provide the stateless validation predicates applied before any write.
//!
//! # Invariants
//! - Identifiers are server-assigned and never reused.
//! - Validation here performs no I/O; store-dependent checks (uniqueness,
//!   existence) live in the mutation services.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer;
pub mod order;
pub mod product;

/// Rule violation raised by the write path.
///
/// Cross-entity existence failures are deliberately folded into this type:
/// API callers see a validation failure, not a distinct not-found kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Phone input does not match the accepted lenient international pattern.
    InvalidPhoneFormat,
    /// Another customer already owns this email address.
    DuplicateEmail,
    NegativePrice,
    NegativeQuantity,
    /// The referenced customer does not exist.
    UnknownCustomer,
    /// An order must reference at least one product.
    EmptyProductList,
    /// One or more requested product ids did not resolve.
    UnresolvedProducts,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::InvalidPhoneFormat => "Invalid Phone Number Format!",
            Self::DuplicateEmail => "A user with a similar email already exists",
            Self::NegativePrice => "Price cannot be negative",
            Self::NegativeQuantity => "Quantity cannot be negative",
            Self::UnknownCustomer => "Customer does not exist",
            Self::EmptyProductList => "At least one product is required",
            Self::UnresolvedProducts => "One or more product IDs are invalid",
        };
        f.write_str(message)
    }
}

impl Error for ValidationError {}
