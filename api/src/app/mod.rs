//! Application layer
//!
//! Lifecycle services coordinating between domain entities and repository
//! ports. All lifecycle guards and their exact error wording live here.

pub mod customer_service;
pub mod order_service;

pub use customer_service::CustomerService;
pub use order_service::OrderService;
