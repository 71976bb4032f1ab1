//! # spot-exchange
//!
//! Upstream collaborator layer: a typed client for the Binance spot REST
//! API, the HMAC request signing its authenticated endpoints require, and
//! an [`ExchangeSource`] trait so the API layer can be tested against
//! [`MockExchange`] without network access.
//!
//! ## Design Principles
//!
//! - **Zero-cost async**: native async traits (Rust 1.75+), no boxed
//!   futures from `async_trait`.
//!
//! - **Thin passthrough**: no retries, no caching, no backoff. Upstream
//!   failures surface as [`ExchangeError::Upstream`] for the caller to
//!   handle; this service never substitutes defaults for missing prices.
//!
//! - **Explicit configuration**: credentials and base URL live in
//!   [`ExchangeConfig`], read from the environment once at startup and
//!   passed into the client - not ambient globals.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spot_exchange::{BinanceClient, ExchangeConfig, ExchangeSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExchangeConfig::from_env()?;
//!     let client = BinanceClient::new(config);
//!
//!     let ticker = client.ticker_price("BTCUSDT").await?;
//!     println!("BTCUSDT last price: {}", ticker.price);
//!     Ok(())
//! }
//! ```

mod client;
pub mod config;
pub mod error;
mod mock;
pub mod sign;
pub mod types;

pub use client::BinanceClient;
pub use config::ExchangeConfig;
pub use error::ExchangeError;
pub use mock::MockExchange;
pub use types::{fills_from_trades, AccountInfo, AvgPrice, Balance, Kline, MyTrade, ServerTime, TickerPrice};

/// Exchange data source abstraction.
///
/// One method per upstream endpoint the proxy consumes. Uses native async
/// syntax rather than `async_trait` to avoid heap-allocated futures; the
/// `Send + Sync` bound lets a source live in shared state (`Arc`) and be
/// used from concurrent handlers.
///
/// ## Implementors
///
/// - [`BinanceClient`]: production implementation over HTTPS
/// - [`MockExchange`]: test implementation with configurable responses
pub trait ExchangeSource: Send + Sync {
    /// Fetch the exchange's clock (`GET /api/v3/time`).
    fn server_time(
        &self,
    ) -> impl std::future::Future<Output = Result<ServerTime, ExchangeError>> + Send;

    /// Fetch the rolling-window average price (`GET /api/v3/avgPrice`).
    fn avg_price(
        &self,
        symbol: &str,
    ) -> impl std::future::Future<Output = Result<AvgPrice, ExchangeError>> + Send;

    /// Fetch the last traded price (`GET /api/v3/ticker/price`).
    fn ticker_price(
        &self,
        symbol: &str,
    ) -> impl std::future::Future<Output = Result<TickerPrice, ExchangeError>> + Send;

    /// Fetch up to `limit` daily candles, oldest first
    /// (`GET /api/v3/klines?interval=1d`).
    fn day_klines(
        &self,
        symbol: &str,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<Kline>, ExchangeError>> + Send;

    /// Fetch the caller's trade history for a symbol, signed
    /// (`GET /api/v3/myTrades`). Order is whatever the exchange returns;
    /// callers sort before folding.
    fn my_trades(
        &self,
        symbol: &str,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<MyTrade>, ExchangeError>> + Send;

    /// Fetch the caller's account snapshot, signed (`GET /api/v3/account`).
    fn account(
        &self,
    ) -> impl std::future::Future<Output = Result<AccountInfo, ExchangeError>> + Send;
}
