//! Customer domain entity
//!
//! A customer is soft-deleted, never removed: deletion (or anonymization)
//! flags the row and stamps `deleted_at`, and every later mutation is refused.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Unique identifier for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i32);

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer record
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    /// Optimistic concurrency token, bumped by the repository on every update
    pub version: i32,
}

impl Customer {
    /// Apply a partial update, overwriting only the mutable fields.
    /// Identity, `created_at` and the lifecycle flags are untouched.
    pub fn apply(&mut self, patch: &CustomerPatch) {
        self.first_name = patch.first_name.clone();
        self.last_name = patch.last_name.clone();
        self.email = patch.email.clone();
        self.phone_number = patch.phone_number.clone();
    }

    /// Flag the record deleted without touching its data. Non-reversible.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        self.is_deleted = true;
        self.deleted_at = Some(now);
    }

    /// Scrub personally identifying fields and flag the record deleted.
    /// Irreversible; the row is kept for referential history.
    pub fn anonymize(&mut self, now: DateTime<Utc>) {
        self.first_name = "Anonymized".to_string();
        self.last_name = format!("User_{}", self.id);
        self.email = format!("deleted_{}@deleted.com", self.id);
        self.phone_number = None;
        self.mark_deleted(now);
    }
}

/// Data needed to create a new customer
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl NewCustomer {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.phone_number.as_deref(),
        )
    }
}

/// Partial update of a customer's mutable fields
#[derive(Debug, Clone)]
pub struct CustomerPatch {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl CustomerPatch {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.phone_number.as_deref(),
        )
    }
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 \-().]{2,19}$").expect("phone regex"));

fn validate_fields(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone_number: Option<&str>,
) -> Result<(), DomainError> {
    validate_name("First name", first_name)?;
    validate_name("Last name", last_name)?;

    if email.len() > 200 {
        return Err(DomainError::Validation(
            "Email must be at most 200 characters.".to_string(),
        ));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(DomainError::Validation(
            "Email is not a valid email address.".to_string(),
        ));
    }

    if let Some(phone) = phone_number {
        if !PHONE_RE.is_match(phone) {
            return Err(DomainError::Validation(
                "Phone number is not a valid phone number.".to_string(),
            ));
        }
    }

    Ok(())
}

fn validate_name(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} is required.", field)));
    }
    if value.len() > 100 {
        return Err(DomainError::Validation(format!(
            "{} must be at most 100 characters.",
            field
        )));
    }
    Ok(())
}
