//! API request and response types.
//!
//! Field names are camelCase to match what the low-code frontend already
//! binds to. All numeric outputs are rounded here - and only here: the
//! core accumulates at full precision and this module is the presentation
//! boundary. Values get 8 decimal places, percentages 4.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use spot_exchange::Balance;
use spot_types::{Position, Valuation};

/// Decimal places for value amounts (quantities, prices, PnL values).
const VALUE_DP: u32 = 8;

/// Decimal places for percentages.
const PERCENT_DP: u32 = 4;

/// Round a value amount for presentation.
pub(crate) fn round_value(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(VALUE_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a percentage for presentation.
pub(crate) fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PERCENT_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Query parameters for symbol-scoped endpoints.
///
/// `symbol` is optional at the serde level so a missing parameter becomes
/// a JSON 400 from the handler instead of axum's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
}

impl SymbolQuery {
    /// The symbol, or a bad-request error when absent/empty.
    pub fn require(&self) -> Result<&str, crate::error::ApiError> {
        self.symbol
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| crate::error::ApiError::BadRequest("missing symbol".to_string()))
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Response for `/avgPrice`.
#[derive(Debug, Serialize)]
pub struct AvgPriceResponse {
    pub symbol: String,
    pub price: Decimal,
}

/// Response for `/spot/tickerPrice`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerPriceResponse {
    pub symbol: String,
    pub last_price: Decimal,
}

/// Response for `/spot/dayOpen`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOpenResponse {
    pub symbol: String,
    pub day_open: Decimal,
}

/// Response for `/spot/avgEntry`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvgEntryResponse {
    pub symbol: String,
    pub qty: Decimal,
    pub avg_entry: Decimal,
}

impl AvgEntryResponse {
    pub fn from_position(symbol: String, position: &Position) -> Self {
        Self {
            symbol,
            qty: round_value(position.net_quantity),
            avg_entry: round_value(position.average_entry_price()),
        }
    }
}

/// One balance row in `/spot/account`.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub asset: String,
    pub free: Decimal,
    pub locked: Decimal,
    pub total: Decimal,
}

impl From<&Balance> for BalanceResponse {
    fn from(balance: &Balance) -> Self {
        Self {
            asset: balance.asset.clone(),
            free: balance.free,
            locked: balance.locked,
            total: round_value(balance.total()),
        }
    }
}

/// Response for `/spot/account`: balances with a positive total.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub balances: Vec<BalanceResponse>,
}

/// Response for `/spot/summary`: the all-in-one figure set the frontend
/// renders as one table row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub symbol: String,
    pub qty: Decimal,
    pub avg_entry: Decimal,
    pub last_price: Decimal,
    pub day_open: Decimal,
    pub pnl_value: Decimal,
    pub pnl_pct: Decimal,
    pub daily_val: Decimal,
    pub daily_pct: Decimal,
}

impl SummaryResponse {
    pub fn build(
        symbol: String,
        position: &Position,
        valuation: &Valuation,
        last_price: Decimal,
        day_open: Decimal,
    ) -> Self {
        Self {
            symbol,
            qty: round_value(position.net_quantity),
            avg_entry: round_value(position.average_entry_price()),
            last_price,
            day_open,
            pnl_value: round_value(valuation.pnl_value),
            pnl_pct: round_percent(valuation.pnl_percent),
            daily_val: round_value(valuation.daily_value),
            daily_pct: round_percent(valuation.daily_percent),
        }
    }
}
