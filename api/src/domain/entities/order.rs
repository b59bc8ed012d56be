//! Order domain entity
//!
//! Orders reference a customer and are never removed once created;
//! cancellation is the terminal state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::customer::{Customer, CustomerId};
use crate::error::DomainError;

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i32);

impl From<i32> for OrderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order placed by a customer
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub product_name: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub order_date: DateTime<Utc>,
    pub is_canceled: bool,
    pub canceled_at: Option<DateTime<Utc>>,
    pub customer_id: CustomerId,
    /// Optimistic concurrency token, bumped by the repository on every update
    pub version: i32,
}

impl Order {
    /// Apply a partial update, overwriting only the mutable fields.
    pub fn apply(&mut self, patch: &OrderPatch) {
        self.product_name = patch.product_name.clone();
        self.quantity = patch.quantity;
        self.total_price = patch.total_price;
        self.customer_id = patch.customer_id;
    }

    /// Flag the order canceled. Terminal state.
    pub fn cancel(&mut self, now: DateTime<Utc>) {
        self.is_canceled = true;
        self.canceled_at = Some(now);
    }
}

/// An order together with its eagerly loaded customer
#[derive(Debug, Clone)]
pub struct OrderWithCustomer {
    pub order: Order,
    pub customer: Option<Customer>,
}

/// Data needed to create a new order
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub product_name: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub customer_id: CustomerId,
}

impl NewOrder {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.product_name, self.quantity, self.total_price)
    }
}

/// Partial update of an order's mutable fields
#[derive(Debug, Clone)]
pub struct OrderPatch {
    pub product_name: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub customer_id: CustomerId,
}

impl OrderPatch {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.product_name, self.quantity, self.total_price)
    }
}

fn validate_fields(
    product_name: &str,
    quantity: i32,
    total_price: Decimal,
) -> Result<(), DomainError> {
    if product_name.trim().is_empty() {
        return Err(DomainError::Validation(
            "Product name is required.".to_string(),
        ));
    }
    if product_name.len() > 200 {
        return Err(DomainError::Validation(
            "Product name must be at most 200 characters.".to_string(),
        ));
    }
    if quantity <= 0 {
        return Err(DomainError::Validation(
            "Quantity must be greater than zero.".to_string(),
        ));
    }
    if total_price <= Decimal::ZERO {
        return Err(DomainError::Validation(
            "Total price must be greater than zero.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_new_order() -> NewOrder {
        NewOrder {
            product_name: "Widget".to_string(),
            quantity: 2,
            total_price: Decimal::new(1999, 2),
            customer_id: CustomerId(1),
        }
    }

    #[test]
    fn valid_order_passes_validation() {
        assert!(valid_new_order().validate().is_ok());
    }

    #[test]
    fn empty_product_name_rejected() {
        let mut new = valid_new_order();
        new.product_name = "   ".to_string();
        let err = new.validate().unwrap_err();
        assert_eq!(err.to_string(), "Product name is required.");
    }

    #[test]
    fn zero_quantity_rejected() {
        let mut new = valid_new_order();
        new.quantity = 0;
        let err = new.validate().unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than zero.");
    }

    #[test]
    fn negative_total_price_rejected() {
        let mut new = valid_new_order();
        new.total_price = Decimal::new(-1, 0);
        let err = new.validate().unwrap_err();
        assert_eq!(err.to_string(), "Total price must be greater than zero.");
    }

    #[test]
    fn zero_total_price_rejected() {
        let mut new = valid_new_order();
        new.total_price = Decimal::ZERO;
        assert!(new.validate().is_err());
    }

    #[test]
    fn cancel_sets_flag_and_timestamp_together() {
        let mut order = test_order();
        let now = Utc::now();
        order.cancel(now);

        assert!(order.is_canceled);
        assert_eq!(order.canceled_at, Some(now));
    }

    #[test]
    fn apply_patch_preserves_identity_and_lifecycle() {
        let mut order = test_order();
        let order_date = order.order_date;

        order.apply(&OrderPatch {
            product_name: "Gadget".to_string(),
            quantity: 5,
            total_price: Decimal::new(4995, 2),
            customer_id: CustomerId(2),
        });

        assert_eq!(order.product_name, "Gadget");
        assert_eq!(order.quantity, 5);
        assert_eq!(order.customer_id, CustomerId(2));
        assert_eq!(order.id, OrderId(3));
        assert_eq!(order.order_date, order_date);
        assert!(!order.is_canceled);
    }

    fn test_order() -> Order {
        Order {
            id: OrderId(3),
            product_name: "Widget".to_string(),
            quantity: 2,
            total_price: Decimal::new(1999, 2),
            order_date: Utc::now(),
            is_canceled: false,
            canceled_at: None,
            customer_id: CustomerId(1),
            version: 0,
        }
    }
}
