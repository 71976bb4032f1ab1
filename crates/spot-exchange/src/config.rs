//! Configuration for the exchange client.
//!
//! Credentials and base URL live in one explicit struct, built from the
//! environment once at process start and passed into the client. Nothing
//! here is read lazily or stored in globals.
//!
//! # Environment Variables
//!
//! - `BINANCE_BASE`: API base URL (default: `https://api.binance.com`)
//! - `API_KEY`: Binance API key (only needed for signed endpoints)
//! - `API_SECRET`: Binance API secret (only needed for signed endpoints)

use crate::error::ExchangeError;
use std::env;
use url::Url;

/// Default Binance spot API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Tolerance window sent with signed requests, in milliseconds.
///
/// The exchange rejects signed requests whose timestamp is further than
/// this from its own clock.
pub const RECV_WINDOW_MS: u64 = 60_000;

/// Exchange connection settings.
///
/// Missing credentials are not an error at construction time: public
/// endpoints work without them, and signed calls fail with a config error
/// before any network I/O.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    /// Base URL of the exchange REST API.
    pub base_url: Url,

    /// API key sent in the `X-MBX-APIKEY` header on signed requests.
    pub api_key: String,

    /// Shared secret used to sign request query strings.
    pub api_secret: String,
}

impl ExchangeConfig {
    /// Build a config with explicit values.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, ExchangeError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        })
    }

    /// Load the config from the environment.
    ///
    /// Fails only when `BINANCE_BASE` is set to something that does not
    /// parse as a URL; absent credentials are allowed.
    pub fn from_env() -> Result<Self, ExchangeError> {
        let base = env::var("BINANCE_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(
            &base,
            env::var("API_KEY").unwrap_or_default(),
            env::var("API_SECRET").unwrap_or_default(),
        )
    }

    /// Whether both credentials are present.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config() {
        let config = ExchangeConfig::new(DEFAULT_BASE_URL, "key", "secret").unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.binance.com/");
        assert!(config.has_credentials());
    }

    #[test]
    fn test_missing_credentials_detected() {
        let config = ExchangeConfig::new(DEFAULT_BASE_URL, "", "").unwrap();
        assert!(!config.has_credentials());

        let key_only = ExchangeConfig::new(DEFAULT_BASE_URL, "key", "").unwrap();
        assert!(!key_only.has_credentials());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = ExchangeConfig::new("not a url", "", "");
        assert!(matches!(result, Err(ExchangeError::Config(_))));
    }
}
