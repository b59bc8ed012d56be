//! Mock implementations of port traits
//!
//! In-memory repositories configurable for testing. They mirror the
//! PostgreSQL adapters' behavior, including the versioned conditional update.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{
    Customer, CustomerId, NewCustomer, NewOrder, Order, OrderId, OrderWithCustomer,
};
use crate::domain::ports::{CustomerRepository, OrderRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<i32, Customer>>>,
    next_id: AtomicI32,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI32::new(1),
        }
    }

    /// Pre-populate with a customer for testing
    pub fn with_customer(self, customer: Customer) -> Self {
        {
            let mut customers = self.customers.write().unwrap();
            if customer.id.0 >= self.next_id.load(Ordering::SeqCst) {
                self.next_id.store(customer.id.0 + 1, Ordering::SeqCst);
            }
            customers.insert(customer.id.0, customer);
        }
        self
    }

    pub(crate) fn get_sync(&self, id: CustomerId) -> Option<Customer> {
        self.customers.read().unwrap().get(&id.0).cloned()
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn list(&self, include_deleted: bool) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().unwrap();
        let mut results: Vec<Customer> = customers
            .values()
            .filter(|c| include_deleted || !c.is_deleted)
            .cloned()
            .collect();
        results.sort_by_key(|c| c.id.0);
        Ok(results)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        Ok(self.get_sync(id))
    }

    async fn insert(&self, new: &NewCustomer) -> Result<Customer, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let customer = Customer {
            id: CustomerId(id),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            email: new.email.clone(),
            phone_number: new.phone_number.clone(),
            created_at: Utc::now(),
            is_deleted: false,
            deleted_at: None,
            version: 0,
        };

        let mut customers = self.customers.write().unwrap();
        customers.insert(id, customer.clone());
        Ok(customer)
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().unwrap();
        match customers.get_mut(&customer.id.0) {
            Some(existing) if existing.version == customer.version => {
                let updated = Customer {
                    version: customer.version + 1,
                    ..customer.clone()
                };
                *existing = updated.clone();
                Ok(updated)
            }
            _ => Err(DomainError::Conflict(format!(
                "Customer {} was modified by another request.",
                customer.id
            ))),
        }
    }

    async fn exists_active(&self, id: CustomerId) -> Result<bool, DomainError> {
        let customers = self.customers.read().unwrap();
        Ok(customers.get(&id.0).is_some_and(|c| !c.is_deleted))
    }
}

// ============================================================================
// In-Memory Order Repository
// ============================================================================

pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<i32, Order>>>,
    /// Shared with the customer repository to emulate the eager join
    customers: Arc<InMemoryCustomerRepository>,
    next_id: AtomicI32,
}

impl InMemoryOrderRepository {
    pub fn new(customers: Arc<InMemoryCustomerRepository>) -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
            customers,
            next_id: AtomicI32::new(1),
        }
    }

    /// Pre-populate with an order for testing
    pub fn with_order(self, order: Order) -> Self {
        {
            let mut orders = self.orders.write().unwrap();
            if order.id.0 >= self.next_id.load(Ordering::SeqCst) {
                self.next_id.store(order.id.0 + 1, Ordering::SeqCst);
            }
            orders.insert(order.id.0, order);
        }
        self
    }

    fn join_customer(&self, order: Order) -> OrderWithCustomer {
        let customer = self.customers.get_sync(order.customer_id);
        OrderWithCustomer { order, customer }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list(&self, include_canceled: bool) -> Result<Vec<OrderWithCustomer>, DomainError> {
        let orders: Vec<Order> = {
            let orders = self.orders.read().unwrap();
            let mut results: Vec<Order> = orders
                .values()
                .filter(|o| include_canceled || !o.is_canceled)
                .cloned()
                .collect();
            results.sort_by_key(|o| o.id.0);
            results
        };

        Ok(orders.into_iter().map(|o| self.join_customer(o)).collect())
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<OrderWithCustomer>, DomainError> {
        let order = self.orders.read().unwrap().get(&id.0).cloned();
        Ok(order.map(|o| self.join_customer(o)))
    }

    async fn insert(&self, new: &NewOrder) -> Result<Order, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let order = Order {
            id: OrderId(id),
            product_name: new.product_name.clone(),
            quantity: new.quantity,
            total_price: new.total_price,
            order_date: Utc::now(),
            is_canceled: false,
            canceled_at: None,
            customer_id: new.customer_id,
            version: 0,
        };

        let mut orders = self.orders.write().unwrap();
        orders.insert(id, order.clone());
        Ok(order)
    }

    async fn update(&self, order: &Order) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().unwrap();
        match orders.get_mut(&order.id.0) {
            Some(existing) if existing.version == order.version => {
                let updated = Order {
                    version: order.version + 1,
                    ..order.clone()
                };
                *existing = updated.clone();
                Ok(updated)
            }
            _ => Err(DomainError::Conflict(format!(
                "Order {} was modified by another request.",
                order.id
            ))),
        }
    }
}
