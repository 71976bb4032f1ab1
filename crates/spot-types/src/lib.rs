//! spot-types: Shared data structures for the spot proxy
//!
//! This crate defines the types used across the workspace and holds the
//! computational core of the service:
//! - [`Fill`] - A single trade execution (buy or sell) with timestamp
//! - [`Symbol`] - A trading pair with its detected quote asset
//! - [`Position`] - Net quantity and cost basis folded from fills (WAC)
//! - [`Valuation`] - Unrealized PnL and intraday change for a position
//!
//! # Example
//!
//! ```rust
//! use spot_types::{Fill, Position, Side, Symbol, Valuation};
//! use rust_decimal_macros::dec;
//!
//! let symbol = Symbol::new("BTCUSDT");
//! let fills = vec![
//!     Fill::new(1, dec!(1), dec!(100), Side::Buy),
//!     Fill::new(2, dec!(1), dec!(200), Side::Buy),
//! ];
//!
//! let position = Position::from_fills(&fills, symbol.quote()).unwrap();
//! assert_eq!(position.average_entry_price(), dec!(150));
//!
//! let valuation = Valuation::compute(&position, dec!(180), dec!(160)).unwrap();
//! assert_eq!(valuation.pnl_value, dec!(60));
//! ```

mod error;
mod fill;
mod position;
mod symbol;
mod valuation;

pub use error::LedgerError;
pub use fill::{Fill, Side};
pub use position::Position;
pub use symbol::Symbol;
pub use valuation::Valuation;
