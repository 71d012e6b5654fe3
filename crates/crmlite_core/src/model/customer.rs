//! Customer record and phone-format validation.
//!
//! # Responsibility
//! - Define the canonical customer shape and its creation input.
//! - Own the lenient international phone pattern check.
//!
//! # Invariants
//! - `email` is unique across all customers (enforced by the mutation
//!   service together with a unique index in storage).
//! - `created_at` is set once at creation and never mutated.

use crate::model::ValidationError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Server-assigned stable customer identifier.
pub type CustomerId = i64;

/// Optional leading `+` and country code, 3-4 digit groups separated by
/// spaces/dashes/dots/parentheses, optional `x<digits>` extension.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:\+?(\d{1,3}))?[-. (]*(\d{3,4})[-. )]*(\d{3})[-. ]*(\d{3,4})(?: *x(\d+))?\s*$",
    )
    .expect("valid phone regex")
});

/// Canonical customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Empty string when the customer was created without a phone number.
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Creation input for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl NewCustomer {
    /// Pure format validation: checks the phone pattern when a phone is
    /// present. Absent or empty phone passes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.phone.as_deref() {
            Some(phone) if !phone.is_empty() => validate_phone(phone),
            _ => Ok(()),
        }
    }

    /// Phone value to persist: provided number or the empty string.
    pub fn phone_or_default(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }
}

/// Checks a single phone string against the accepted pattern.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_phone, NewCustomer};
    use crate::model::ValidationError;

    fn input(phone: Option<&str>) -> NewCustomer {
        NewCustomer {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: phone.map(str::to_string),
        }
    }

    #[test]
    fn accepts_common_phone_shapes() {
        for phone in [
            "+1 555-123-4567",
            "555.123.4567",
            "5551234567",
            "(555) 123-4567",
            "555-123-4567 x89",
        ] {
            assert!(validate_phone(phone).is_ok(), "rejected `{phone}`");
        }
    }

    #[test]
    fn rejects_malformed_phone_shapes() {
        for phone in ["abc", "12", "555-12", "555-123", "++1 555 123 4567"] {
            assert_eq!(
                validate_phone(phone),
                Err(ValidationError::InvalidPhoneFormat),
                "accepted `{phone}`"
            );
        }
    }

    #[test]
    fn absent_or_empty_phone_is_valid() {
        assert!(input(None).validate().is_ok());
        assert!(input(Some("")).validate().is_ok());
    }

    #[test]
    fn phone_or_default_falls_back_to_empty_string() {
        assert_eq!(input(None).phone_or_default(), "");
        assert_eq!(input(Some("5551234567")).phone_or_default(), "5551234567");
    }
}
