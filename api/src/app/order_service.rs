//! Order lifecycle service
//!
//! Enforces the order invariants: the referential check against an active
//! customer and the cancellation guard. The customer reference is re-validated
//! on every update, even when it is unchanged.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{CustomerId, NewOrder, Order, OrderId, OrderPatch, OrderWithCustomer};
use crate::domain::ports::{CustomerRepository, OrderRepository};
use crate::error::{AppError, DomainError};

/// Service for managing orders
pub struct OrderService<OR, CR>
where
    OR: OrderRepository,
    CR: CustomerRepository,
{
    orders: Arc<OR>,
    customers: Arc<CR>,
}

impl<OR, CR> OrderService<OR, CR>
where
    OR: OrderRepository,
    CR: CustomerRepository,
{
    pub fn new(orders: Arc<OR>, customers: Arc<CR>) -> Self {
        Self { orders, customers }
    }

    /// List all orders with their customer attached, filtering out canceled
    /// rows unless asked for.
    pub async fn list(&self, include_canceled: bool) -> Result<Vec<OrderWithCustomer>, AppError> {
        Ok(self.orders.list(include_canceled).await?)
    }

    /// Get an order by ID, with its customer attached
    pub async fn get(&self, id: OrderId) -> Result<OrderWithCustomer, AppError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))
    }

    /// Create a new order. Fails unless the referenced customer exists and is
    /// not deleted. `order_date` is set by the repository.
    pub async fn create(&self, new: NewOrder) -> Result<Order, AppError> {
        new.validate()?;
        self.ensure_active_customer(new.customer_id).await?;

        Ok(self.orders.insert(&new).await?)
    }

    /// Overwrite an order's mutable fields. The customer reference is always
    /// re-checked against the active-customer rule.
    pub async fn update(&self, id: OrderId, patch: OrderPatch) -> Result<Order, AppError> {
        patch.validate()?;

        let mut order = self.get(id).await?.order;
        self.ensure_active_customer(patch.customer_id).await?;

        order.apply(&patch);
        Ok(self.orders.update(&order).await?)
    }

    /// Cancel an order. Terminal state; a second cancel fails.
    pub async fn cancel(&self, id: OrderId) -> Result<Order, AppError> {
        let mut order = self.get(id).await?.order;
        if order.is_canceled {
            return Err(
                DomainError::InvalidState("Order is already canceled.".to_string()).into(),
            );
        }

        order.cancel(Utc::now());
        Ok(self.orders.update(&order).await?)
    }

    async fn ensure_active_customer(&self, id: CustomerId) -> Result<(), AppError> {
        if !self.customers.exists_active(id).await? {
            return Err(DomainError::Validation(format!(
                "Customer with ID {} does not exist or is deleted.",
                id
            ))
            .into());
        }
        Ok(())
    }
}
