//! Unified error types for the MiniCRM API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    /// Operation violates a lifecycle guard (e.g. double delete, double cancel)
    #[error("{0}")]
    InvalidState(String),

    /// Optimistic concurrency check failed - the row changed under us
    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    NotFound(String),
}

/// JSON error body shared by every failure response
#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Domain(DomainError::NotFound(msg)) | AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, msg, None)
            }
            AppError::Domain(DomainError::Validation(msg))
            | AppError::Domain(DomainError::InvalidState(msg)) => {
                (StatusCode::BAD_REQUEST, msg, None)
            }
            AppError::Domain(DomainError::Conflict(msg)) => (StatusCode::CONFLICT, msg, None),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error has occurred.".to_string(),
                    Some(msg),
                )
            }
        };

        let body = Json(ErrorBody {
            status: status.as_u16(),
            message,
            detail,
        });

        (status, body).into_response()
    }
}
