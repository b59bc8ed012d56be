//! Domain entities

pub mod customer;
pub mod order;

pub use customer::{Customer, CustomerId, CustomerPatch, NewCustomer};
pub use order::{NewOrder, Order, OrderId, OrderPatch, OrderWithCustomer};
