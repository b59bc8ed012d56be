//! PostgreSQL adapter for CustomerRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::domain::entities::{Customer, CustomerId, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::entity::customers;
use crate::error::DomainError;

/// PostgreSQL implementation of CustomerRepository
pub struct PostgresCustomerRepository {
    db: DatabaseConnection,
}

impl PostgresCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn list(&self, include_deleted: bool) -> Result<Vec<Customer>, DomainError> {
        let mut query = customers::Entity::find();
        if !include_deleted {
            query = query.filter(customers::Column::IsDeleted.eq(false));
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let result = customers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn insert(&self, new: &NewCustomer) -> Result<Customer, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = customers::ActiveModel {
            first_name: Set(new.first_name.clone()),
            last_name: Set(new.last_name.clone()),
            email: Set(new.email.clone()),
            phone_number: Set(new.phone_number.clone()),
            created_at: Set(now),
            is_deleted: Set(false),
            deleted_at: Set(None),
            version: Set(0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, DomainError> {
        // Single conditional UPDATE keyed on (id, version): the read-check-write
        // sequence in the service stays atomic per record.
        let result = customers::Entity::update_many()
            .col_expr(
                customers::Column::FirstName,
                Expr::value(customer.first_name.clone()),
            )
            .col_expr(
                customers::Column::LastName,
                Expr::value(customer.last_name.clone()),
            )
            .col_expr(customers::Column::Email, Expr::value(customer.email.clone()))
            .col_expr(
                customers::Column::PhoneNumber,
                Expr::value(customer.phone_number.clone()),
            )
            .col_expr(
                customers::Column::IsDeleted,
                Expr::value(customer.is_deleted),
            )
            .col_expr(
                customers::Column::DeletedAt,
                Expr::value(customer.deleted_at.map(|dt| dt.fixed_offset())),
            )
            .col_expr(
                customers::Column::Version,
                Expr::value(customer.version + 1),
            )
            .filter(customers::Column::Id.eq(customer.id.0))
            .filter(customers::Column::Version.eq(customer.version))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::Conflict(format!(
                "Customer {} was modified by another request.",
                customer.id
            )));
        }

        Ok(Customer {
            version: customer.version + 1,
            ..customer.clone()
        })
    }

    async fn exists_active(&self, id: CustomerId) -> Result<bool, DomainError> {
        let count = customers::Entity::find()
            .filter(customers::Column::Id.eq(id.0))
            .filter(customers::Column::IsDeleted.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Customer {
            id: CustomerId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone_number: model.phone_number,
            created_at: model.created_at.with_timezone(&Utc),
            is_deleted: model.is_deleted,
            deleted_at: model.deleted_at.map(|dt| dt.with_timezone(&Utc)),
            version: model.version,
        }
    }
}
