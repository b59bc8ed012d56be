//! Ports (trait definitions)
//!
//! Seams between the domain and the outside world.

pub mod repositories;

pub use repositories::{CustomerRepository, OrderRepository};
