//! Error boundary: typed errors mapped to HTTP statuses exactly once.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use ledgerlink_aggregator::AggregatorError;
use ledgerlink_core::Error as CoreError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// API error surface.
///
/// Remote-API and storage failures both collapse into `Internal`: the caller
/// sees a generic 500 with the underlying message, never a distinction
/// between the two.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AggregatorError> for ApiError {
    fn from(error: AggregatorError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        // The one site where request failures are logged with their cause.
        error!("Request failed ({}): {}", status, message);

        (
            status,
            Json(json!({ "status": "error", "error": message })),
        )
            .into_response()
    }
}
