//! PostgreSQL adapter for OrderRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::domain::entities::{CustomerId, NewOrder, Order, OrderId, OrderWithCustomer};
use crate::domain::ports::OrderRepository;
use crate::entity::{customers, orders};
use crate::error::DomainError;

/// PostgreSQL implementation of OrderRepository
pub struct PostgresOrderRepository {
    db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn list(&self, include_canceled: bool) -> Result<Vec<OrderWithCustomer>, DomainError> {
        let mut query = orders::Entity::find().find_also_related(customers::Entity);
        if !include_canceled {
            query = query.filter(orders::Column::IsCanceled.eq(false));
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results
            .into_iter()
            .map(|(order, customer)| OrderWithCustomer {
                order: order.into(),
                customer: customer.map(|c| c.into()),
            })
            .collect())
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<OrderWithCustomer>, DomainError> {
        let result = orders::Entity::find_by_id(id.0)
            .find_also_related(customers::Entity)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|(order, customer)| OrderWithCustomer {
            order: order.into(),
            customer: customer.map(|c| c.into()),
        }))
    }

    async fn insert(&self, new: &NewOrder) -> Result<Order, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = orders::ActiveModel {
            product_name: Set(new.product_name.clone()),
            quantity: Set(new.quantity),
            total_price: Set(new.total_price),
            order_date: Set(now),
            is_canceled: Set(false),
            canceled_at: Set(None),
            customer_id: Set(new.customer_id.0),
            version: Set(0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, order: &Order) -> Result<Order, DomainError> {
        let result = orders::Entity::update_many()
            .col_expr(
                orders::Column::ProductName,
                Expr::value(order.product_name.clone()),
            )
            .col_expr(orders::Column::Quantity, Expr::value(order.quantity))
            .col_expr(orders::Column::TotalPrice, Expr::value(order.total_price))
            .col_expr(orders::Column::IsCanceled, Expr::value(order.is_canceled))
            .col_expr(
                orders::Column::CanceledAt,
                Expr::value(order.canceled_at.map(|dt| dt.fixed_offset())),
            )
            .col_expr(orders::Column::CustomerId, Expr::value(order.customer_id.0))
            .col_expr(orders::Column::Version, Expr::value(order.version + 1))
            .filter(orders::Column::Id.eq(order.id.0))
            .filter(orders::Column::Version.eq(order.version))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::Conflict(format!(
                "Order {} was modified by another request.",
                order.id
            )));
        }

        Ok(Order {
            version: order.version + 1,
            ..order.clone()
        })
    }
}

/// Convert SeaORM model to domain entity
impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Order {
            id: OrderId(model.id),
            product_name: model.product_name,
            quantity: model.quantity,
            total_price: model.total_price,
            order_date: model.order_date.with_timezone(&Utc),
            is_canceled: model.is_canceled,
            canceled_at: model.canceled_at.map(|dt| dt.with_timezone(&Utc)),
            customer_id: CustomerId(model.customer_id),
            version: model.version,
        }
    }
}
