//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Customer, CustomerId, NewCustomer, NewOrder, Order, OrderId, OrderWithCustomer,
};
use crate::error::DomainError;

/// Repository for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List all customers; when `include_deleted` is false, soft-deleted rows
    /// are filtered out. Store natural order.
    async fn list(&self, include_deleted: bool) -> Result<Vec<Customer>, DomainError>;

    /// Find a customer by ID
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Insert a new customer, assigning its ID and `created_at`
    async fn insert(&self, new: &NewCustomer) -> Result<Customer, DomainError>;

    /// Persist a modified customer. The write matches the entity's
    /// `(id, version)` and bumps the version; a stale version fails with
    /// `DomainError::Conflict` and writes nothing.
    async fn update(&self, customer: &Customer) -> Result<Customer, DomainError>;

    /// Whether a non-deleted customer with this ID exists
    async fn exists_active(&self, id: CustomerId) -> Result<bool, DomainError>;
}

/// Repository for Order entities
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// List all orders with their customer eagerly attached; when
    /// `include_canceled` is false, canceled rows are filtered out.
    async fn list(&self, include_canceled: bool) -> Result<Vec<OrderWithCustomer>, DomainError>;

    /// Find an order by ID, with its customer attached
    async fn find_by_id(&self, id: OrderId) -> Result<Option<OrderWithCustomer>, DomainError>;

    /// Insert a new order, assigning its ID and `order_date`
    async fn insert(&self, new: &NewOrder) -> Result<Order, DomainError>;

    /// Persist a modified order with the same optimistic `(id, version)`
    /// check as `CustomerRepository::update`.
    async fn update(&self, order: &Order) -> Result<Order, DomainError>;
}
