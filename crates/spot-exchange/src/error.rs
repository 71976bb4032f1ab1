//! Error types for the exchange layer.
//!
//! A simple `thiserror` enum; external errors (reqwest, url) are converted
//! into owned strings immediately so the type stays free of generic
//! parameters and boxed trait objects.

use thiserror::Error;

/// Errors that can occur while talking to the exchange.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The exchange answered with a non-success status.
    /// Carries the status code and the raw response body so callers can
    /// surface the upstream failure instead of substituting a default.
    #[error("upstream unavailable: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Transport-level failure (connect, TLS, body read, decode).
    #[error("network error: {0}")]
    Network(String),

    /// Configuration errors (bad base URL, missing credentials for a
    /// signed call).
    #[error("config error: {0}")]
    Config(String),

    /// No data available (e.g. mock response not configured).
    #[error("no data: {0}")]
    NoData(String),
}

impl From<reqwest::Error> for ExchangeError {
    #[inline]
    fn from(err: reqwest::Error) -> Self {
        ExchangeError::Network(err.to_string())
    }
}

impl From<url::ParseError> for ExchangeError {
    #[inline]
    fn from(err: url::ParseError) -> Self {
        ExchangeError::Config(err.to_string())
    }
}
