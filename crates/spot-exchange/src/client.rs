//! Binance spot REST client.
//!
//! A thin typed wrapper around `reqwest`: one method per endpoint this
//! service consumes, public endpoints as plain GETs, signed endpoints with
//! the HMAC query signature from [`crate::sign`].
//!
//! # Design
//!
//! - Client struct holds `reqwest::Client` + [`ExchangeConfig`]; no other
//!   state, no caching, no retries. Upstream failures pass through as
//!   [`ExchangeError::Upstream`].
//! - The signature must cover the query string byte-for-byte as sent, so
//!   signed URLs are assembled by hand instead of via `reqwest`'s query
//!   serializer (which could reorder or re-encode parameters).

use crate::{
    config::{ExchangeConfig, RECV_WINDOW_MS},
    error::ExchangeError,
    sign::sign_query,
    types::{AccountInfo, AvgPrice, Kline, MyTrade, ServerTime, TickerPrice},
    ExchangeSource,
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use url::Url;

/// Header carrying the API key on signed requests.
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Typed client for the Binance spot REST API.
pub struct BinanceClient {
    http: reqwest::Client,
    config: ExchangeConfig,
}

impl BinanceClient {
    /// Create a client from a config.
    ///
    /// Cheap: no connections are made until the first call.
    pub fn new(config: ExchangeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build a URL for `path` with the given literal query string.
    fn url(&self, path: &str, query: Option<&str>) -> Result<Url, ExchangeError> {
        let mut url = self.config.base_url.join(path)?;
        url.set_query(query);
        Ok(url)
    }

    /// GET a public endpoint and decode the JSON response.
    async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<T, ExchangeError> {
        let url = self.url(path, query)?;
        tracing::debug!(%url, "public request");
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    /// GET a signed endpoint: append `timestamp` and `recvWindow`, sign the
    /// canonical query string, and send the API key header.
    async fn get_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ExchangeError> {
        if !self.config.has_credentials() {
            return Err(ExchangeError::Config(
                "API_KEY/API_SECRET not configured".to_string(),
            ));
        }

        let mut canonical = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        if !canonical.is_empty() {
            canonical.push('&');
        }
        canonical.push_str(&format!(
            "timestamp={}&recvWindow={}",
            Utc::now().timestamp_millis(),
            RECV_WINDOW_MS
        ));

        let signature = sign_query(&canonical, &self.config.api_secret);
        let query = format!("{canonical}&signature={signature}");

        let url = self.url(path, Some(&query))?;
        tracing::debug!(path, "signed request");
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Turn a response into `T`, or into `Upstream` carrying status + body.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ExchangeError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "upstream error");
            return Err(ExchangeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

impl ExchangeSource for BinanceClient {
    async fn server_time(&self) -> Result<ServerTime, ExchangeError> {
        self.get_public("/api/v3/time", None).await
    }

    async fn avg_price(&self, symbol: &str) -> Result<AvgPrice, ExchangeError> {
        self.get_public("/api/v3/avgPrice", Some(&format!("symbol={symbol}")))
            .await
    }

    async fn ticker_price(&self, symbol: &str) -> Result<TickerPrice, ExchangeError> {
        self.get_public("/api/v3/ticker/price", Some(&format!("symbol={symbol}")))
            .await
    }

    async fn day_klines(&self, symbol: &str, limit: u32) -> Result<Vec<Kline>, ExchangeError> {
        self.get_public(
            "/api/v3/klines",
            Some(&format!("symbol={symbol}&interval=1d&limit={limit}")),
        )
        .await
    }

    async fn my_trades(&self, symbol: &str, limit: u32) -> Result<Vec<MyTrade>, ExchangeError> {
        self.get_signed(
            "/api/v3/myTrades",
            &[("symbol", symbol.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn account(&self) -> Result<AccountInfo, ExchangeError> {
        self.get_signed("/api/v3/account", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(key: &str, secret: &str) -> BinanceClient {
        BinanceClient::new(ExchangeConfig::new("https://example.invalid", key, secret).unwrap())
    }

    #[test]
    fn test_url_building() {
        let client = client("", "");
        let url = client
            .url("/api/v3/ticker/price", Some("symbol=BTCUSDT"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.invalid/api/v3/ticker/price?symbol=BTCUSDT"
        );
    }

    #[tokio::test]
    async fn test_signed_call_without_credentials_fails_before_io() {
        // Base URL resolves nowhere; the call must fail on config alone.
        let client = client("", "");
        let result = client.my_trades("BTCUSDT", 1000).await;
        assert!(matches!(result, Err(ExchangeError::Config(_))));
    }
}
