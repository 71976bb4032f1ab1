//! Trading pair symbols and quote-asset detection.
//!
//! Binance spot symbols are flat strings like "BTCUSDT" with no separator
//! between base and quote asset. The exchange's instrument metadata is the
//! authoritative source for the split, but this service deliberately avoids
//! that extra round trip and guesses the quote asset from a fixed-priority
//! suffix list instead.
//!
//! # Known limitation
//!
//! A pair quoted in an asset missing from [`QUOTE_SUFFIXES`] silently falls
//! back to USDT, which makes commission attribution in the WAC fold wrong
//! for that pair. Callers that do know the quote asset can bypass the
//! heuristic with [`Symbol::with_quote`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quote-asset suffixes checked in priority order.
///
/// Order matters: the first matching suffix wins, so longer/more common
/// quotes come first (e.g. "FDUSD" must be tried before a hypothetical
/// "USD" entry would be).
pub const QUOTE_SUFFIXES: &[&str] = &[
    "USDT", "FDUSD", "BUSD", "USDC", "TUSD", "BTC", "ETH", "BNB", "TRY", "EUR", "BRL", "AUD",
    "GBP", "RUB",
];

/// Fallback when no suffix matches.
pub const DEFAULT_QUOTE: &str = "USDT";

/// A spot trading pair with its (detected or declared) quote asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pair: String,
    quote: String,
}

impl Symbol {
    /// Create a symbol, detecting the quote asset from the pair's suffix.
    ///
    /// The pair is uppercased to match Binance's canonical form.
    pub fn new(pair: &str) -> Self {
        let pair = pair.to_uppercase();
        let quote = detect_quote(&pair).to_string();
        Self { pair, quote }
    }

    /// Create a symbol with an explicitly declared quote asset, bypassing
    /// suffix detection.
    pub fn with_quote(pair: &str, quote: &str) -> Self {
        Self {
            pair: pair.to_uppercase(),
            quote: quote.to_uppercase(),
        }
    }

    /// The full pair string (e.g. "BTCUSDT").
    pub fn pair(&self) -> &str {
        &self.pair
    }

    /// The quote asset (e.g. "USDT").
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// The base asset, i.e. the pair with the quote suffix stripped.
    ///
    /// Falls back to the full pair when it does not actually end with the
    /// quote asset (possible when the quote was defaulted or declared).
    pub fn base(&self) -> &str {
        self.pair
            .strip_suffix(self.quote.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.pair)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pair)
    }
}

/// First matching suffix wins; USDT when nothing matches.
fn detect_quote(pair: &str) -> &'static str {
    QUOTE_SUFFIXES
        .iter()
        .find(|q| pair.ends_with(*q))
        .copied()
        .unwrap_or(DEFAULT_QUOTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_usdt() {
        let symbol = Symbol::new("BTCUSDT");
        assert_eq!(symbol.quote(), "USDT");
        assert_eq!(symbol.base(), "BTC");
    }

    #[test]
    fn test_detects_non_stable_quote() {
        let symbol = Symbol::new("ETHBTC");
        assert_eq!(symbol.quote(), "BTC");
        assert_eq!(symbol.base(), "ETH");
    }

    #[test]
    fn test_detects_fdusd() {
        let symbol = Symbol::new("BNBFDUSD");
        assert_eq!(symbol.quote(), "FDUSD");
        assert_eq!(symbol.base(), "BNB");
    }

    #[test]
    fn test_unknown_suffix_defaults_to_usdt() {
        let symbol = Symbol::new("XYZABC");
        assert_eq!(symbol.quote(), "USDT");
        // Default quote is not a real suffix of the pair.
        assert_eq!(symbol.base(), "XYZABC");
    }

    #[test]
    fn test_lowercase_input_is_canonicalized() {
        let symbol = Symbol::new("solusdt");
        assert_eq!(symbol.pair(), "SOLUSDT");
        assert_eq!(symbol.quote(), "USDT");
    }

    #[test]
    fn test_explicit_quote_override() {
        let symbol = Symbol::with_quote("XYZABC", "ABC");
        assert_eq!(symbol.quote(), "ABC");
        assert_eq!(symbol.base(), "XYZ");
    }
}
