//! Application state for the API server.

/// Shared application state.
///
/// Generic over the exchange source so tests can run the real router
/// against `MockExchange` while production uses `BinanceClient`.
pub struct AppState<S> {
    /// The upstream exchange this proxy fronts.
    pub exchange: S,
}

impl<S> AppState<S> {
    /// Create a new application state with the given exchange source.
    pub fn new(exchange: S) -> Self {
        Self { exchange }
    }
}
