//! Position valuation: unrealized PnL and intraday change.
//!
//! Combines a [`Position`] with two market prices (last trade price and the
//! day's opening price) into the four figures the summary endpoint serves.

use crate::{LedgerError, Position};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Unrealized PnL and intraday change for a position.
///
/// All fields are kept at full precision; rounding (8 decimal places for
/// values, 4 for percentages) is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// (last_price - average_entry) * net_quantity, in quote units.
    pub pnl_value: Decimal,

    /// ((last_price / average_entry) - 1) * 100.
    /// Zero when the average entry is zero - no open cost basis to
    /// compare against.
    pub pnl_percent: Decimal,

    /// (last_price - day_open) * net_quantity, in quote units.
    pub daily_value: Decimal,

    /// ((last_price / day_open) - 1) * 100.
    pub daily_percent: Decimal,
}

impl Valuation {
    /// Value a position against the current price and the day's open.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidReferencePrice`] when `day_open` is
    /// zero or negative: the daily percentage would be undefined, and a
    /// zero open from the exchange means the kline data is unusable rather
    /// than "no change".
    pub fn compute(
        position: &Position,
        last_price: Decimal,
        day_open: Decimal,
    ) -> Result<Self, LedgerError> {
        if day_open <= Decimal::ZERO {
            return Err(LedgerError::InvalidReferencePrice(day_open));
        }

        let average_entry = position.average_entry_price();
        let pnl_percent = if average_entry.is_zero() {
            Decimal::ZERO
        } else {
            (last_price / average_entry - Decimal::ONE) * HUNDRED
        };

        Ok(Self {
            pnl_value: (last_price - average_entry) * position.net_quantity,
            pnl_percent,
            daily_value: (last_price - day_open) * position.net_quantity,
            daily_percent: (last_price / day_open - Decimal::ONE) * HUNDRED,
        })
    }
}
