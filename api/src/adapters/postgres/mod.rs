//! PostgreSQL adapters (SeaORM)

pub mod customer_repo;
pub mod order_repo;

pub use customer_repo::PostgresCustomerRepository;
pub use order_repo::PostgresOrderRepository;
