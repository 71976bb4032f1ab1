//! Weighted-average-cost position tracking.
//!
//! This module provides [`Position`], the running (net quantity, cost basis)
//! pair folded from a trader's fill history for one pair. It is the
//! computational core of the service.
//!
//! # Accounting model
//!
//! Buys are averaged into the running cost; sells reduce quantity and cost
//! proportionally to the average at the moment of sale, not to the sale
//! price. Realized gain/loss on the sold portion is deliberately discarded:
//! this tracker answers "what did the coins I still hold cost me", nothing
//! more.
//!
//! Commission handling follows the same asymmetry: a buy commission paid in
//! the pair's quote asset increases the cost basis, while a sell commission
//! only affects realized proceeds and is therefore ignored entirely.
//! Commissions paid in any other asset (e.g. BNB fee discounts) never touch
//! the quote-denominated cost basis.

use crate::{Fill, LedgerError, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net quantity and cumulative cost basis for one trading pair.
///
/// Computed fresh from the full fill history on every request; never
/// persisted.
///
/// # Oversell convention
///
/// Selling more than the tracked net quantity (e.g. after a transfer-in
/// that trade history does not see) drives both fields negative. The fold
/// does not clamp at zero: clamping would hide the discrepancy between
/// trade history and actual holdings, and garbage-in/garbage-out is the
/// documented policy here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Remaining base-asset quantity.
    pub net_quantity: Decimal,

    /// Cumulative cost of `net_quantity`, in quote-asset units.
    pub total_cost: Decimal,
}

impl Position {
    /// An empty (flat) position.
    pub fn empty() -> Self {
        Self {
            net_quantity: Decimal::ZERO,
            total_cost: Decimal::ZERO,
        }
    }

    /// Fold a fill history into a position.
    ///
    /// Fills may arrive in any order; they are processed in ascending
    /// timestamp order, with equal timestamps keeping their input order
    /// (the exchange does not guarantee intra-millisecond ordering, so the
    /// sort must be stable).
    ///
    /// `quote_asset` identifies which commission payments increase the cost
    /// basis on buys; see [`crate::Symbol::quote`].
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidFill`] if any fill has a non-positive
    /// quantity or price, or a negative commission. Validation runs before
    /// any folding, so a bad fill anywhere in the batch fails the whole
    /// computation.
    pub fn from_fills(fills: &[Fill], quote_asset: &str) -> Result<Self, LedgerError> {
        for fill in fills {
            fill.validate()?;
        }

        let mut ordered: Vec<&Fill> = fills.iter().collect();
        // slice::sort_by_key is stable: equal timestamps keep input order.
        ordered.sort_by_key(|f| f.timestamp_ms);

        let mut position = Position::empty();
        for fill in ordered {
            position.apply(fill, quote_asset);
        }
        Ok(position)
    }

    /// Apply one fill to the running state.
    ///
    /// No rounding happens here: the fold accumulates at full precision and
    /// rounding is left to the presentation boundary, so error cannot
    /// compound across many fills.
    fn apply(&mut self, fill: &Fill, quote_asset: &str) {
        match fill.side {
            Side::Buy => {
                self.net_quantity += fill.quantity;
                self.total_cost += fill.notional_value();
                if fill.commission_asset == quote_asset {
                    self.total_cost += fill.commission;
                }
            }
            Side::Sell => {
                // Reduce cost at the current average, not the sale price.
                let average = self.average_entry_price();
                self.net_quantity -= fill.quantity;
                self.total_cost -= average * fill.quantity;
            }
        }
    }

    /// Average entry price of the remaining quantity.
    ///
    /// Zero by convention when the position holds nothing (or has gone
    /// negative on oversell) - there is no open cost basis to average.
    pub fn average_entry_price(&self) -> Decimal {
        if self.net_quantity > Decimal::ZERO {
            self.total_cost / self.net_quantity
        } else {
            Decimal::ZERO
        }
    }

    /// Check whether the position holds nothing.
    pub fn is_flat(&self) -> bool {
        self.net_quantity.is_zero()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn buy(ts: u64, qty: Decimal, price: Decimal) -> Fill {
        Fill::new(ts, qty, price, Side::Buy)
    }

    fn sell(ts: u64, qty: Decimal, price: Decimal) -> Fill {
        Fill::new(ts, qty, price, Side::Sell)
    }

    #[test]
    fn test_empty_history_is_flat() {
        let position = Position::from_fills(&[], "USDT").unwrap();
        assert!(position.is_flat());
        assert_eq!(position.average_entry_price(), Decimal::ZERO);
    }

    #[test]
    fn test_two_buys_average() {
        let fills = vec![buy(1, dec!(1), dec!(100)), buy(2, dec!(1), dec!(200))];
        let position = Position::from_fills(&fills, "USDT").unwrap();

        assert_eq!(position.net_quantity, dec!(2));
        assert_eq!(position.total_cost, dec!(300));
        assert_eq!(position.average_entry_price(), dec!(150));
    }

    #[test]
    fn test_buys_only_equals_weighted_mean() {
        let fills = vec![
            buy(1, dec!(3), dec!(10)),
            buy(2, dec!(1), dec!(50)),
            buy(3, dec!(6), dec!(20)),
        ];
        let position = Position::from_fills(&fills, "USDT").unwrap();

        // (3*10 + 1*50 + 6*20) / 10
        assert_eq!(position.average_entry_price(), dec!(20));
    }

    #[test]
    fn test_sell_price_does_not_move_cost_basis() {
        let fills = vec![buy(1, dec!(2), dec!(100)), sell(2, dec!(1), dec!(999))];
        let position = Position::from_fills(&fills, "USDT").unwrap();

        assert_eq!(position.net_quantity, dec!(1));
        assert_eq!(position.total_cost, dec!(100));
        assert_eq!(position.average_entry_price(), dec!(100));
    }

    #[test]
    fn test_sell_all_returns_to_zero() {
        let fills = vec![
            buy(1, dec!(1), dec!(100)),
            buy(2, dec!(1), dec!(200)),
            sell(3, dec!(2), dec!(175)),
        ];
        let position = Position::from_fills(&fills, "USDT").unwrap();

        assert_eq!(position.net_quantity, Decimal::ZERO);
        assert_eq!(position.total_cost, Decimal::ZERO);
        assert!(position.is_flat());
    }

    #[test]
    fn test_oversell_goes_negative_without_clamping() {
        let fills = vec![buy(1, dec!(1), dec!(100)), sell(2, dec!(3), dec!(100))];
        let position = Position::from_fills(&fills, "USDT").unwrap();

        assert_eq!(position.net_quantity, dec!(-2));
        assert_eq!(position.total_cost, dec!(-200));
        // Negative quantity means no open cost basis by convention.
        assert_eq!(position.average_entry_price(), Decimal::ZERO);
    }

    #[test]
    fn test_quote_commission_increases_cost_on_buy() {
        let fills = vec![buy(1, dec!(2), dec!(100)).with_commission(dec!(4), "USDT")];
        let position = Position::from_fills(&fills, "USDT").unwrap();

        assert_eq!(position.total_cost, dec!(204));
        assert_eq!(position.average_entry_price(), dec!(102));
    }

    #[test]
    fn test_non_quote_commission_is_ignored() {
        let fills = vec![buy(1, dec!(2), dec!(100)).with_commission(dec!(0.01), "BNB")];
        let position = Position::from_fills(&fills, "USDT").unwrap();

        assert_eq!(position.total_cost, dec!(200));
    }

    #[test]
    fn test_sell_commission_never_touches_cost() {
        let fills = vec![
            buy(1, dec!(2), dec!(100)),
            sell(2, dec!(1), dec!(150)).with_commission(dec!(5), "USDT"),
        ];
        let position = Position::from_fills(&fills, "USDT").unwrap();

        assert_eq!(position.net_quantity, dec!(1));
        assert_eq!(position.total_cost, dec!(100));
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let chronological = vec![
            buy(1, dec!(2), dec!(100)),
            sell(2, dec!(1), dec!(300)),
            buy(3, dec!(1), dec!(400)),
        ];
        let shuffled = vec![
            chronological[2].clone(),
            chronological[0].clone(),
            chronological[1].clone(),
        ];

        let a = Position::from_fills(&chronological, "USDT").unwrap();
        let b = Position::from_fills(&shuffled, "USDT").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        // Sell-then-buy at the same timestamp: the sell sees an empty
        // position (average 0), so cost only reflects the later buy.
        let fills = vec![sell(5, dec!(1), dec!(100)), buy(5, dec!(2), dec!(100))];
        let position = Position::from_fills(&fills, "USDT").unwrap();

        assert_eq!(position.net_quantity, dec!(1));
        assert_eq!(position.total_cost, dec!(200));
    }

    #[test]
    fn test_invariant_holds_after_every_prefix() {
        let fills = vec![
            buy(1, dec!(1.5), dec!(100)).with_commission(dec!(1), "USDT"),
            buy(2, dec!(0.5), dec!(120)),
            sell(3, dec!(1), dec!(130)),
            buy(4, dec!(2), dec!(90)).with_commission(dec!(0.002), "BNB"),
            sell(5, dec!(0.25), dec!(80)),
        ];

        for prefix_len in 1..=fills.len() {
            let position = Position::from_fills(&fills[..prefix_len], "USDT").unwrap();
            if position.net_quantity > Decimal::ZERO {
                let reconstructed = position.average_entry_price() * position.net_quantity;
                let diff = (reconstructed - position.total_cost).abs();
                assert!(
                    diff < dec!(0.0000000001),
                    "prefix {}: {} != {}",
                    prefix_len,
                    reconstructed,
                    position.total_cost
                );
            }
        }
    }

    #[test]
    fn test_bad_fill_anywhere_fails_whole_batch() {
        let fills = vec![buy(1, dec!(1), dec!(100)), buy(2, dec!(0), dec!(100))];
        assert!(matches!(
            Position::from_fills(&fills, "USDT"),
            Err(LedgerError::InvalidFill(_))
        ));
    }
}
