//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use spot_types::LedgerError;
use thiserror::Error;

/// API errors that can be returned to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request parameters.
    #[error("invalid request: {0}")]
    BadRequest(String),

    /// The exchange could not serve the request; passed through rather
    /// than papered over with defaults.
    #[error("upstream unavailable: {0}")]
    Upstream(String),

    /// Server-side misconfiguration (e.g. missing credentials for a
    /// signed endpoint).
    #[error("internal error: {0}")]
    Internal(String),

    /// The ledger core rejected its input (malformed fill, unusable
    /// reference price).
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

impl From<spot_exchange::ExchangeError> for ApiError {
    fn from(err: spot_exchange::ExchangeError) -> Self {
        use spot_exchange::ExchangeError;
        match err {
            // Misconfiguration is our fault, not the exchange's.
            ExchangeError::Config(msg) => ApiError::Internal(msg),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            ApiError::Upstream(msg) => {
                tracing::warn!("upstream failure: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_unavailable",
                    Some(msg.clone()),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
            ApiError::Ledger(e) => {
                tracing::error!("ledger error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "invalid_data",
                    Some(e.to_string()),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
