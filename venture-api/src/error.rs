//! API Error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use venture_core::LedgerError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
            ApiError::Ledger(e) => ledger_error_parts(e),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Map a domain error to status, code and caller-facing message.
///
/// Storage failures are logged with their detail and surfaced as a
/// generic message; everything else is safe to echo.
fn ledger_error_parts(e: &LedgerError) -> (StatusCode, &'static str, String) {
    match e {
        LedgerError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        LedgerError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        LedgerError::AlreadyExists(msg) => (StatusCode::BAD_REQUEST, "ALREADY_EXISTS", msg.clone()),
        LedgerError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        LedgerError::StateConflict(msg) => {
            (StatusCode::BAD_REQUEST, "STATE_CONFLICT", msg.clone())
        }
        LedgerError::InsufficientFunds { .. } => (
            StatusCode::BAD_REQUEST,
            "INSUFFICIENT_FUNDS",
            e.to_string(),
        ),
        LedgerError::Storage(detail) => {
            tracing::error!(error = %detail, "storage failure surfaced to API");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "internal storage failure".to_string(),
            )
        }
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
