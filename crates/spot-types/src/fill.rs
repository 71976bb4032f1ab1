//! Fill (trade execution) types.
//!
//! This module provides [`Fill`], a representation of one executed trade
//! for a trading pair. Fills are the fundamental input for reconstructing
//! a position's cost basis.

use crate::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trade execution side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Bought the base asset.
    #[serde(alias = "B", alias = "buy")]
    Buy,
    /// Sold the base asset.
    #[serde(alias = "S", alias = "sell")]
    Sell,
}

impl Side {
    /// Returns true if this is a buy.
    pub fn is_buy(&self) -> bool {
        matches!(self, Side::Buy)
    }
}

/// A single trade execution for one trading pair.
///
/// Quantities are in base-asset units and prices in quote-asset units per
/// base unit. The commission may be paid in any asset; only commissions
/// paid in the pair's quote asset affect the tracked cost basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// Exchange-assigned timestamp (milliseconds since Unix epoch).
    /// Used only for ordering; the exchange does not guarantee
    /// intra-millisecond ordering, so ties keep their input order.
    pub timestamp_ms: u64,

    /// Executed quantity (always positive, base-asset units).
    pub quantity: Decimal,

    /// Execution price (quote-asset units per base unit).
    pub price: Decimal,

    /// Whether the base asset was bought or sold.
    pub side: Side,

    /// Commission charged for this fill (non-negative, may be zero).
    pub commission: Decimal,

    /// Asset the commission was paid in (e.g. "USDT", "BNB").
    pub commission_asset: String,
}

impl Fill {
    /// Create a fill with no commission.
    pub fn new(timestamp_ms: u64, quantity: Decimal, price: Decimal, side: Side) -> Self {
        Self {
            timestamp_ms,
            quantity,
            price,
            side,
            commission: Decimal::ZERO,
            commission_asset: String::new(),
        }
    }

    /// Set the commission on this fill (builder pattern).
    pub fn with_commission(mut self, commission: Decimal, asset: impl Into<String>) -> Self {
        self.commission = commission;
        self.commission_asset = asset.into();
        self
    }

    /// Notional value of this fill (price * quantity).
    pub fn notional_value(&self) -> Decimal {
        self.price * self.quantity
    }

    /// Check the fill satisfies the aggregator's preconditions.
    ///
    /// Quantity and price must be strictly positive and the commission
    /// non-negative. `Decimal` values are always finite, so these are the
    /// only invalid shapes that can reach the fold.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.quantity <= Decimal::ZERO {
            return Err(LedgerError::InvalidFill(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        if self.price <= Decimal::ZERO {
            return Err(LedgerError::InvalidFill(format!(
                "price must be positive, got {}",
                self.price
            )));
        }
        if self.commission < Decimal::ZERO {
            return Err(LedgerError::InvalidFill(format!(
                "commission must be non-negative, got {}",
                self.commission
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_fill() -> Fill {
        Fill::new(1704067200000, dec!(0.5), dec!(42000), Side::Buy)
            .with_commission(dec!(10.5), "USDT")
    }

    #[test]
    fn test_notional_value() {
        assert_eq!(sample_fill().notional_value(), dec!(21000));
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_fill().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let mut fill = sample_fill();
        fill.quantity = Decimal::ZERO;
        assert!(matches!(fill.validate(), Err(LedgerError::InvalidFill(_))));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut fill = sample_fill();
        fill.price = dec!(-1);
        assert!(matches!(fill.validate(), Err(LedgerError::InvalidFill(_))));
    }

    #[test]
    fn test_validate_rejects_negative_commission() {
        let mut fill = sample_fill();
        fill.commission = dec!(-0.1);
        assert!(matches!(fill.validate(), Err(LedgerError::InvalidFill(_))));
    }

    #[test]
    fn test_zero_commission_is_valid() {
        let fill = Fill::new(1, dec!(1), dec!(100), Side::Sell);
        assert!(fill.validate().is_ok());
    }
}
