//! SeaORM table models
//!
//! Persistence-level models for the `customers` and `orders` tables.
//! Domain entities live in `domain::entities`; adapters convert between the two.

pub mod customers;
pub mod orders;
