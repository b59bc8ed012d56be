//! HTTP handlers
//!
//! Axum request handlers for the API endpoints, plus the transport DTOs.

pub mod customers;
pub mod orders;

pub use customers::{
    anonymize_customer, create_customer, delete_customer, get_customer, list_customers,
    update_customer,
};
pub use orders::{cancel_order, create_order, get_order, list_orders, update_order};
