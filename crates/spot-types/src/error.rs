//! Error types for spot-types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the ledger core.
///
/// Both variants are `InvalidInput` conditions: the core performs no I/O,
/// so malformed data handed to it is the only way it can fail. Upstream
/// failures belong to the layers that fetch data.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// A fill failed validation (non-positive quantity/price or negative
    /// commission).
    #[error("invalid fill: {0}")]
    InvalidFill(String),

    /// The reference (opening) price is zero or negative, so a percentage
    /// change against it is undefined.
    #[error("invalid reference price: {0}")]
    InvalidReferencePrice(Decimal),
}
