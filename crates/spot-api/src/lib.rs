//! spot-api: HTTP API layer for the spot proxy
//!
//! This crate defines the REST endpoints the low-code frontend calls:
//! - GET /            - liveness banner
//! - GET /health      - status + version
//! - GET /time        - upstream clock passthrough
//! - GET /avgPrice    - rolling average price
//! - GET /spot/tickerPrice - last price
//! - GET /spot/dayOpen     - daily candle open
//! - GET /spot/avgEntry    - WAC position from trade history (signed)
//! - GET /spot/account     - non-zero balances (signed)
//! - GET /spot/summary     - all-in-one position row
//!
//! Handlers are generic over [`spot_exchange::ExchangeSource`], so the
//! same router runs against the real client in production and against
//! `MockExchange` in tests.

pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

pub use error::ApiError;
pub use state::AppState;

use axum::{routing::get, Router};
use spot_exchange::ExchangeSource;
use std::sync::Arc;

/// Build the application router over the given state.
pub fn create_router<S: ExchangeSource + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/time", get(handlers::time::<S>))
        .route("/avgPrice", get(handlers::avg_price::<S>))
        .route("/spot/tickerPrice", get(handlers::ticker_price::<S>))
        .route("/spot/dayOpen", get(handlers::day_open::<S>))
        .route("/spot/avgEntry", get(handlers::avg_entry::<S>))
        .route("/spot/account", get(handlers::account::<S>))
        .route("/spot/summary", get(handlers::summary::<S>))
        .with_state(state)
}
