//! Customer lifecycle service
//!
//! Enforces the customer invariants: soft delete, anonymization, and the
//! no-mutation-after-delete guard. Every mutating operation is a
//! read-check-write sequence; the repository's versioned update keeps it
//! atomic per record.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{Customer, CustomerId, CustomerPatch, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::error::{AppError, DomainError};

/// Service for managing customers
pub struct CustomerService<R>
where
    R: CustomerRepository,
{
    customers: Arc<R>,
}

impl<R> CustomerService<R>
where
    R: CustomerRepository,
{
    pub fn new(customers: Arc<R>) -> Self {
        Self { customers }
    }

    /// List all customers, filtering out soft-deleted rows unless asked for.
    pub async fn list(&self, include_deleted: bool) -> Result<Vec<Customer>, AppError> {
        Ok(self.customers.list(include_deleted).await?)
    }

    /// Get a customer by ID
    pub async fn get(&self, id: CustomerId) -> Result<Customer, AppError> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))
    }

    /// Create a new customer. `created_at` is set by the repository.
    pub async fn create(&self, new: NewCustomer) -> Result<Customer, AppError> {
        new.validate()?;
        Ok(self.customers.insert(&new).await?)
    }

    /// Overwrite a customer's mutable fields. Deleted customers are immutable.
    pub async fn update(&self, id: CustomerId, patch: CustomerPatch) -> Result<Customer, AppError> {
        patch.validate()?;

        let mut customer = self.get(id).await?;
        if customer.is_deleted {
            return Err(DomainError::InvalidState(
                "Customer is deleted and cannot be updated.".to_string(),
            )
            .into());
        }

        customer.apply(&patch);
        Ok(self.customers.update(&customer).await?)
    }

    /// Soft delete a customer. Non-reversible.
    pub async fn delete(&self, id: CustomerId) -> Result<Customer, AppError> {
        let mut customer = self.get(id).await?;
        if customer.is_deleted {
            return Err(DomainError::InvalidState(
                "Customer is already marked as deleted.".to_string(),
            )
            .into());
        }

        customer.mark_deleted(Utc::now());
        Ok(self.customers.update(&customer).await?)
    }

    /// Anonymize a customer's personal data and soft delete the record.
    /// Distinct from plain delete only in that it scrubs PII.
    pub async fn anonymize(&self, id: CustomerId) -> Result<Customer, AppError> {
        let mut customer = self.get(id).await?;
        if customer.is_deleted {
            return Err(
                DomainError::InvalidState("Customer is already deleted.".to_string()).into(),
            );
        }

        customer.anonymize(Utc::now());
        Ok(self.customers.update(&customer).await?)
    }
}
