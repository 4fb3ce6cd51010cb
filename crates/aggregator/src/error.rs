//! Error types for the aggregator client.

use thiserror::Error;

/// Result type alias for aggregator operations.
pub type Result<T> = std::result::Result<T, AggregatorError>;

/// Errors that can occur while talking to the aggregation API.
#[derive(Debug, Error)]
pub enum AggregatorError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error response from the aggregation API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid request (missing required data, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AggregatorError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// HTTP status if this is an API error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status() {
        let err = AggregatorError::api(400, "INVALID_PUBLIC_TOKEN: could not find token");
        assert_eq!(err.status_code(), Some(400));
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn non_api_errors_have_no_status() {
        let err = AggregatorError::invalid_request("body must be an object");
        assert_eq!(err.status_code(), None);
    }
}
