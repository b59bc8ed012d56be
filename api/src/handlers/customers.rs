//! Customer handlers
//!
//! Endpoints for customer lifecycle management.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Customer, CustomerId, CustomerPatch, NewCustomer};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing customers
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomersQuery {
    #[serde(default)]
    pub include_deleted: bool,
}

/// Transport projection of a customer
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: String,
    pub is_deleted: bool,
    pub deleted_at: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id.0,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone_number: customer.phone_number,
            created_at: customer.created_at.to_rfc3339(),
            is_deleted: customer.is_deleted,
            deleted_at: customer.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// Request to create a customer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
        }
    }
}

/// Request to update a customer's mutable fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl From<UpdateCustomerRequest> for CustomerPatch {
    fn from(request: UpdateCustomerRequest) -> Self {
        CustomerPatch {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
        }
    }
}

/// GET /customers
///
/// List customers, optionally including deleted/anonymized ones.
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<ListCustomersQuery>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let customers = state.customer_service.list(query.include_deleted).await?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// GET /customers/:id
///
/// Get a specific customer by ID.
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state.customer_service.get(CustomerId(id)).await?;

    Ok(Json(customer.into()))
}

/// POST /customers
///
/// Create a customer.
pub async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let customer = state.customer_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// PUT /customers/:id
///
/// Update an existing customer.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<StatusCode, AppError> {
    state
        .customer_service
        .update(CustomerId(id), request.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /customers/:id
///
/// Soft delete a customer.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.customer_service.delete(CustomerId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /customers/anonymize/:id
///
/// Anonymize a customer's personal data to comply with data protection
/// regulations.
pub async fn anonymize_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.customer_service.anonymize(CustomerId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
