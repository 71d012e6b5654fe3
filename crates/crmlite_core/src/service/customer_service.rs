//! Customer mutation operations.
//!
//! # Responsibility
//! - Single customer creation: phone format, then email uniqueness, then
//!   persist.
//! - Bulk customer creation with all-or-nothing batch semantics.
//!
//! # Invariants
//! - Check order is fixed: phone format before email uniqueness; the first
//!   failure wins and nothing is written.
//! - A bulk batch with any collected error persists zero customers.

use crate::model::customer::{Customer, NewCustomer};
use crate::model::ValidationError;
use crate::repo::customer_repo::CustomerRepository;
use crate::repo::TransactionScope;
use crate::service::{MutationError, MutationResult};
use log::{info, warn};

const CUSTOMER_CREATED: &str = "Customer created successfully";

/// Result payload of a single customer creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedCustomer {
    pub customer: Customer,
    pub message: String,
}

/// Result payload of the zero-error bulk path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkCreated {
    pub customers: Vec<Customer>,
    /// Always empty on the success path; a non-empty list is surfaced as
    /// `MutationError::Bulk` instead, after rollback.
    pub errors: Vec<String>,
}

/// Use-case service for customer writes.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one customer.
    ///
    /// # Contract
    /// - Phone format is checked first, email uniqueness second.
    /// - The stored phone defaults to the empty string when absent.
    pub fn create_customer(&self, input: &NewCustomer) -> MutationResult<CreatedCustomer> {
        input.validate()?;
        if self.repo.email_exists(&input.email)? {
            return Err(ValidationError::DuplicateEmail.into());
        }

        let customer = self.repo.create_customer(input)?;
        info!(
            "event=customer_created module=service status=ok customer_id={}",
            customer.id
        );

        Ok(CreatedCustomer {
            customer,
            message: CUSTOMER_CREATED.to_string(),
        })
    }
}

impl<R: CustomerRepository + TransactionScope> CustomerService<R> {
    /// Creates a batch of customers inside one transaction scope.
    ///
    /// Each failing item is recorded and skipped; the batch keeps going. If
    /// any error was recorded by the end, the whole transaction rolls back
    /// and the collected messages are returned as `MutationError::Bulk` —
    /// customers created earlier in the same batch are discarded. The
    /// uniqueness check observes rows inserted earlier in the batch, so
    /// in-batch duplicate emails are rejected too.
    pub fn bulk_create_customers(&mut self, inputs: &[NewCustomer]) -> MutationResult<BulkCreated> {
        let outcome = self.repo.in_transaction(|repo| {
            let mut customers = Vec::new();
            let mut errors = Vec::new();

            for input in inputs {
                if input.validate().is_err() {
                    errors.push(format!(
                        "Invalid Phone Number Format for {}: {}",
                        input.first_name,
                        input.phone.as_deref().unwrap_or(""),
                    ));
                    continue;
                }

                match repo.email_exists(&input.email) {
                    Ok(true) => {
                        errors.push(format!("Email already exists: {}", input.email));
                        continue;
                    }
                    Ok(false) => {}
                    Err(err) => {
                        errors.push(format!("Error for {}: {err}", input.first_name));
                        continue;
                    }
                }

                match repo.create_customer(input) {
                    Ok(customer) => customers.push(customer),
                    Err(err) => {
                        errors.push(format!("Error for {}: {err}", input.first_name));
                    }
                }
            }

            if !errors.is_empty() {
                return Err(MutationError::Bulk(errors));
            }

            Ok(BulkCreated {
                customers,
                errors: Vec::new(),
            })
        });

        match &outcome {
            Ok(created) => info!(
                "event=customers_bulk_created module=service status=ok count={}",
                created.customers.len()
            ),
            Err(err) => warn!(
                "event=customers_bulk_created module=service status=rolled_back error={err}"
            ),
        }

        outcome
    }
}
