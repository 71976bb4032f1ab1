//! Mock exchange source for testing.
//!
//! `MockExchange` implements `ExchangeSource` with configurable responses,
//! allowing handler and valuation tests to run without network calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use spot_exchange::{ExchangeSource, MockExchange};
//!
//! let mock = MockExchange::new()
//!     .with_ticker_price("BTCUSDT", dec!(42000))
//!     .with_trades(vec![/* test trades */]);
//!
//! let ticker = mock.ticker_price("BTCUSDT").await?;
//! ```

use crate::{
    error::ExchangeError,
    types::{AccountInfo, AvgPrice, Kline, MyTrade, ServerTime, TickerPrice},
    ExchangeSource,
};
use rust_decimal::Decimal;

/// Mock exchange source with builder-style configuration.
///
/// Responses left unconfigured yield [`ExchangeError::NoData`], which is
/// also how tests simulate an unavailable upstream.
#[derive(Default, Clone)]
pub struct MockExchange {
    /// Server time to return. If None, returns an error.
    pub server_time_ms: Option<u64>,

    /// Average price to return. If None, returns an error.
    pub avg_price: Option<Decimal>,

    /// Last price to return. If None, returns an error.
    pub ticker_price: Option<Decimal>,

    /// Klines to return from `day_klines`.
    pub klines: Vec<Kline>,

    /// Trades to return from `my_trades`.
    pub trades: Vec<MyTrade>,

    /// Account snapshot to return. If None, returns an error.
    pub account: Option<AccountInfo>,
}

impl MockExchange {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server time (builder pattern).
    pub fn with_server_time(mut self, time_ms: u64) -> Self {
        self.server_time_ms = Some(time_ms);
        self
    }

    /// Set the rolling average price (builder pattern).
    pub fn with_avg_price(mut self, price: Decimal) -> Self {
        self.avg_price = Some(price);
        self
    }

    /// Set the last traded price (builder pattern).
    pub fn with_ticker_price(mut self, price: Decimal) -> Self {
        self.ticker_price = Some(price);
        self
    }

    /// Set one daily kline with the given open price (builder pattern).
    pub fn with_day_open(mut self, open: Decimal) -> Self {
        self.klines = vec![Kline(
            0,
            open,
            open,
            open,
            open,
            Decimal::ZERO,
            0,
            Decimal::ZERO,
            0,
            Decimal::ZERO,
            Decimal::ZERO,
            serde_json::Value::String("0".to_string()),
        )];
        self
    }

    /// Set the trades to return (builder pattern).
    pub fn with_trades(mut self, trades: Vec<MyTrade>) -> Self {
        self.trades = trades;
        self
    }

    /// Set the account snapshot to return (builder pattern).
    pub fn with_account(mut self, account: AccountInfo) -> Self {
        self.account = Some(account);
        self
    }
}

impl ExchangeSource for MockExchange {
    async fn server_time(&self) -> Result<ServerTime, ExchangeError> {
        self.server_time_ms
            .map(|server_time| ServerTime { server_time })
            .ok_or_else(|| ExchangeError::NoData("mock server time not configured".into()))
    }

    async fn avg_price(&self, _symbol: &str) -> Result<AvgPrice, ExchangeError> {
        self.avg_price
            .map(|price| AvgPrice { mins: 5, price })
            .ok_or_else(|| ExchangeError::NoData("mock avg price not configured".into()))
    }

    async fn ticker_price(&self, symbol: &str) -> Result<TickerPrice, ExchangeError> {
        self.ticker_price
            .map(|price| TickerPrice {
                symbol: symbol.to_string(),
                price,
            })
            .ok_or_else(|| ExchangeError::NoData("mock ticker price not configured".into()))
    }

    async fn day_klines(&self, _symbol: &str, limit: u32) -> Result<Vec<Kline>, ExchangeError> {
        Ok(self.klines.iter().take(limit as usize).cloned().collect())
    }

    async fn my_trades(&self, symbol: &str, limit: u32) -> Result<Vec<MyTrade>, ExchangeError> {
        // Filter by symbol like the real endpoint does.
        Ok(self
            .trades
            .iter()
            .filter(|t| t.symbol == symbol)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn account(&self) -> Result<AccountInfo, ExchangeError> {
        self.account
            .clone()
            .ok_or_else(|| ExchangeError::NoData("mock account not configured".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_empty_mock_has_no_prices() {
        let mock = MockExchange::new();
        assert!(mock.ticker_price("BTCUSDT").await.is_err());
        assert!(mock.server_time().await.is_err());
        assert!(mock.account().await.is_err());
    }

    #[tokio::test]
    async fn test_configured_prices_round_trip() {
        let mock = MockExchange::new()
            .with_ticker_price(dec!(42000))
            .with_day_open(dec!(40000));

        let ticker = mock.ticker_price("BTCUSDT").await.unwrap();
        assert_eq!(ticker.price, dec!(42000));

        let klines = mock.day_klines("BTCUSDT", 1).await.unwrap();
        assert_eq!(klines[0].open(), dec!(40000));
    }

    #[tokio::test]
    async fn test_trades_filtered_by_symbol() {
        let trade = MyTrade {
            symbol: "BTCUSDT".to_string(),
            id: 1,
            order_id: 1,
            price: dec!(100),
            qty: dec!(1),
            commission: Decimal::ZERO,
            commission_asset: String::new(),
            time: 1,
            is_buyer: true,
            is_maker: false,
        };
        let mock = MockExchange::new().with_trades(vec![trade]);

        assert_eq!(mock.my_trades("BTCUSDT", 1000).await.unwrap().len(), 1);
        assert!(mock.my_trades("ETHUSDT", 1000).await.unwrap().is_empty());
    }
}
