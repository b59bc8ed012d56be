//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::entities::{Customer, CustomerId, NewCustomer, NewOrder, Order, OrderId};

/// Create an active test customer
pub fn test_customer() -> Customer {
    Customer {
        id: CustomerId(1),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: "text@example.com".to_string(),
        phone_number: Some("+1234567890".to_string()),
        created_at: Utc::now(),
        is_deleted: false,
        deleted_at: None,
        version: 0,
    }
}

/// Create a soft-deleted test customer
pub fn test_deleted_customer() -> Customer {
    Customer {
        id: CustomerId(2),
        first_name: "Deleted".to_string(),
        last_name: "Guy".to_string(),
        email: "gone@example.com".to_string(),
        phone_number: Some("+000000".to_string()),
        created_at: Utc::now(),
        is_deleted: true,
        deleted_at: Some(Utc::now()),
        version: 0,
    }
}

/// Create valid creation data for a customer
pub fn test_new_customer() -> NewCustomer {
    NewCustomer {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: "text@example.com".to_string(),
        phone_number: Some("+1234567890".to_string()),
    }
}

/// Create an active test order for the given customer
pub fn test_order(customer_id: CustomerId) -> Order {
    Order {
        id: OrderId(1),
        product_name: "Widget".to_string(),
        quantity: 2,
        total_price: Decimal::new(1999, 2),
        order_date: Utc::now(),
        is_canceled: false,
        canceled_at: None,
        customer_id,
        version: 0,
    }
}

/// Create a canceled test order for the given customer
pub fn test_canceled_order(customer_id: CustomerId) -> Order {
    Order {
        id: OrderId(2),
        product_name: "Canceled Widget".to_string(),
        quantity: 1,
        total_price: Decimal::new(999, 2),
        order_date: Utc::now(),
        is_canceled: true,
        canceled_at: Some(Utc::now()),
        customer_id,
        version: 0,
    }
}

/// Create valid creation data for an order
pub fn test_new_order(customer_id: CustomerId) -> NewOrder {
    NewOrder {
        product_name: "Widget".to_string(),
        quantity: 2,
        total_price: Decimal::new(1999, 2),
        customer_id,
    }
}
