//! Wire types for the Binance spot REST API.
//!
//! These mirror the JSON shapes the exchange actually sends. Prices and
//! quantities arrive as decimal strings; `rust_decimal`'s serde support
//! parses them directly, so no field needs a manual string round trip.
//!
//! Only the fields this service consumes are modeled; serde ignores the
//! rest (e.g. `orderListId`, `isBestMatch` on trades).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spot_types::{Fill, Side};

/// Response of `GET /api/v3/time`.
///
/// Also serializable: the `/time` proxy endpoint passes it through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Exchange clock, milliseconds since Unix epoch.
    pub server_time: u64,
}

/// Response of `GET /api/v3/avgPrice` (rolling-window average price).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvgPrice {
    /// Averaging window length in minutes.
    pub mins: u32,
    /// Average price over the window.
    pub price: Decimal,
}

/// Response of `GET /api/v3/ticker/price`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerPrice {
    pub symbol: String,
    /// Last traded price.
    pub price: Decimal,
}

/// One candlestick from `GET /api/v3/klines`.
///
/// The exchange sends klines as 12-element JSON arrays of mixed number and
/// string values, so this is a tuple struct deserialized positionally. The
/// trailing field is documented by Binance as "ignore".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Kline(
    pub u64,     // open time (ms)
    pub Decimal, // open
    pub Decimal, // high
    pub Decimal, // low
    pub Decimal, // close
    pub Decimal, // volume
    pub u64,     // close time (ms)
    pub Decimal, // quote asset volume
    pub u64,     // number of trades
    pub Decimal, // taker buy base volume
    pub Decimal, // taker buy quote volume
    pub serde_json::Value, // unused
);

impl Kline {
    /// Candle open time, milliseconds since Unix epoch.
    pub fn open_time_ms(&self) -> u64 {
        self.0
    }

    /// Opening price of the candle.
    pub fn open(&self) -> Decimal {
        self.1
    }
}

/// One trade from `GET /api/v3/myTrades` (signed).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyTrade {
    pub symbol: String,
    /// Exchange-assigned trade id.
    pub id: u64,
    pub order_id: u64,
    pub price: Decimal,
    pub qty: Decimal,
    pub commission: Decimal,
    pub commission_asset: String,
    /// Execution time, milliseconds since Unix epoch.
    pub time: u64,
    pub is_buyer: bool,
    pub is_maker: bool,
}

impl From<&MyTrade> for Fill {
    fn from(trade: &MyTrade) -> Self {
        Fill {
            timestamp_ms: trade.time,
            quantity: trade.qty,
            price: trade.price,
            side: if trade.is_buyer { Side::Buy } else { Side::Sell },
            commission: trade.commission,
            commission_asset: trade.commission_asset.clone(),
        }
    }
}

/// Convert a batch of raw trades into domain fills.
pub fn fills_from_trades(trades: &[MyTrade]) -> Vec<Fill> {
    trades.iter().map(Fill::from).collect()
}

/// One asset balance from `GET /api/v3/account` (signed).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub asset: String,
    /// Amount available for trading.
    pub free: Decimal,
    /// Amount locked in open orders.
    pub locked: Decimal,
}

impl Balance {
    /// Total holding (free + locked).
    pub fn total(&self) -> Decimal {
        self.free + self.locked
    }
}

/// Response of `GET /api/v3/account` (signed).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub balances: Vec<Balance>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_my_trade_deserializes_binance_shape() {
        let json = r#"{
            "symbol": "BNBBTC",
            "id": 28457,
            "orderId": 100234,
            "orderListId": -1,
            "price": "4.00000100",
            "qty": "12.00000000",
            "quoteQty": "48.000012",
            "commission": "10.10000000",
            "commissionAsset": "BNB",
            "time": 1499865549590,
            "isBuyer": true,
            "isMaker": false,
            "isBestMatch": true
        }"#;

        let trade: MyTrade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.id, 28457);
        assert_eq!(trade.price, dec!(4.000001));
        assert_eq!(trade.qty, dec!(12));
        assert_eq!(trade.commission_asset, "BNB");
        assert!(trade.is_buyer);
    }

    #[test]
    fn test_my_trade_converts_to_fill() {
        let trade = MyTrade {
            symbol: "BTCUSDT".to_string(),
            id: 1,
            order_id: 2,
            price: dec!(100),
            qty: dec!(0.5),
            commission: dec!(0.05),
            commission_asset: "USDT".to_string(),
            time: 1000,
            is_buyer: false,
            is_maker: true,
        };

        let fill = Fill::from(&trade);
        assert_eq!(fill.timestamp_ms, 1000);
        assert_eq!(fill.quantity, dec!(0.5));
        assert_eq!(fill.side, Side::Sell);
        assert_eq!(fill.commission, dec!(0.05));
    }

    #[test]
    fn test_kline_deserializes_mixed_array() {
        let json = r#"[
            1499040000000,
            "0.01634790",
            "0.80000000",
            "0.01575800",
            "0.01577100",
            "148976.11427815",
            1499644799999,
            "2434.19055334",
            308,
            "1756.87402397",
            "28.46694368",
            "17928899.62484339"
        ]"#;

        let kline: Kline = serde_json::from_str(json).unwrap();
        assert_eq!(kline.open_time_ms(), 1499040000000);
        assert_eq!(kline.open(), dec!(0.0163479));
    }

    #[test]
    fn test_ticker_price_deserializes_string_price() {
        let json = r#"{"symbol": "LTCBTC", "price": "4.00000200"}"#;
        let ticker: TickerPrice = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.price, dec!(4.000002));
    }

    #[test]
    fn test_balance_total() {
        let balance = Balance {
            asset: "BTC".to_string(),
            free: dec!(1.5),
            locked: dec!(0.25),
        };
        assert_eq!(balance.total(), dec!(1.75));
    }
}
