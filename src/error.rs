//! Error types for the REST API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;


/// Message returned to clients when the quote provider fails.
pub const UPSTREAM_ERROR_MESSAGE: &str = "Error fetching market data";

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

/// A client-supplied payload failed type or presence checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    /// Creates a validation error with the given field list message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failures of the remote market-data source.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The upstream did not answer within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The upstream answered with a non-success status.
    #[error("upstream returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The upstream body was not valid JSON.
    #[error("malformed upstream response: {0}")]
    Malformed(String),

    /// The quote URL could not be built for the symbol.
    #[error("invalid quote url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            QuoteError::Timeout
        } else {
            QuoteError::Request(err.to_string())
        }
    }
}

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Payload validation failed.
    #[error("{0}")]
    Validation(String),

    /// Market data provider failed.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Route does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::Upstream(detail) => {
                error!("Error fetching market data: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    UPSTREAM_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.0)
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}
