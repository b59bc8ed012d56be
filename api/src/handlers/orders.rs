//! Order handlers
//!
//! Endpoints for order lifecycle management.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Customer, CustomerId, NewOrder, Order, OrderId, OrderPatch, OrderWithCustomer};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing orders
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersQuery {
    #[serde(default)]
    pub include_canceled: bool,
}

/// Flattened customer summary embedded in order responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Customer> for CustomerSummary {
    fn from(customer: Customer) -> Self {
        CustomerSummary {
            id: customer.id.0,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
        }
    }
}

/// Transport projection of an order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub order_date: String,
    pub is_canceled: bool,
    pub canceled_at: Option<String>,
    pub customer_id: i32,
    pub customer: Option<CustomerSummary>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.0,
            product_name: order.product_name,
            quantity: order.quantity,
            total_price: order.total_price,
            order_date: order.order_date.to_rfc3339(),
            is_canceled: order.is_canceled,
            canceled_at: order.canceled_at.map(|dt| dt.to_rfc3339()),
            customer_id: order.customer_id.0,
            customer: None,
        }
    }
}

impl From<OrderWithCustomer> for OrderResponse {
    fn from(with_customer: OrderWithCustomer) -> Self {
        let mut response: OrderResponse = with_customer.order.into();
        response.customer = with_customer.customer.map(Into::into);
        response
    }
}

/// Request to create an order
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_name: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub customer_id: i32,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            product_name: request.product_name,
            quantity: request.quantity,
            total_price: request.total_price,
            customer_id: CustomerId(request.customer_id),
        }
    }
}

/// Request to update an order's mutable fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub product_name: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub customer_id: i32,
}

impl From<UpdateOrderRequest> for OrderPatch {
    fn from(request: UpdateOrderRequest) -> Self {
        OrderPatch {
            product_name: request.product_name,
            quantity: request.quantity,
            total_price: request.total_price,
            customer_id: CustomerId(request.customer_id),
        }
    }
}

/// GET /orders
///
/// List orders with their customer attached, optionally including canceled
/// ones.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state.order_service.list(query.include_canceled).await?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// GET /orders/:id
///
/// Get an order by its ID.
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.order_service.get(OrderId(id)).await?;

    Ok(Json(order.into()))
}

/// POST /orders
///
/// Create a new order.
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let order = state.order_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// PUT /orders/:id
///
/// Update an existing order.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<StatusCode, AppError> {
    state
        .order_service
        .update(OrderId(id), request.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /orders/:id
///
/// Cancel an order. Orders are never physically removed.
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.order_service.cancel(OrderId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
