//! Route handlers for the proxy endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{
    AccountResponse, AvgEntryResponse, AvgPriceResponse, BalanceResponse, DayOpenResponse,
    HealthResponse, SummaryResponse, SymbolQuery, TickerPriceResponse,
};
use rust_decimal::Decimal;
use spot_exchange::{fills_from_trades, ExchangeSource, Kline, ServerTime};
use spot_types::{Position, Symbol, Valuation};

/// How many trades to request from the signed history endpoint.
/// The exchange caps a single request at 1000.
const MY_TRADES_LIMIT: u32 = 1000;

/// Daily candles fetched for the day-open price; only the current one
/// is needed.
const DAY_KLINE_LIMIT: u32 = 1;

/// GET / - plain banner so a browser poke shows the proxy is alive.
pub async fn root() -> &'static str {
    "OK - Binance spot proxy"
}

/// GET /health - health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /time - upstream server clock, passed through unchanged.
pub async fn time<S: ExchangeSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<ServerTime>, ApiError> {
    Ok(Json(state.exchange.server_time().await?))
}

/// GET /avgPrice - rolling-window average price for a symbol.
pub async fn avg_price<S: ExchangeSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<AvgPriceResponse>, ApiError> {
    let symbol = query.require()?;
    let avg = state.exchange.avg_price(symbol).await?;
    Ok(Json(AvgPriceResponse {
        symbol: symbol.to_string(),
        price: avg.price,
    }))
}

/// GET /spot/tickerPrice - last traded price for a symbol.
pub async fn ticker_price<S: ExchangeSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<TickerPriceResponse>, ApiError> {
    let symbol = query.require()?;
    let ticker = state.exchange.ticker_price(symbol).await?;
    Ok(Json(TickerPriceResponse {
        symbol: symbol.to_string(),
        last_price: ticker.price,
    }))
}

/// GET /spot/dayOpen - opening price of the current daily candle.
pub async fn day_open<S: ExchangeSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<DayOpenResponse>, ApiError> {
    let symbol = query.require()?;
    let klines = state.exchange.day_klines(symbol, DAY_KLINE_LIMIT).await?;
    let open = first_day_open(&klines)?;
    Ok(Json(DayOpenResponse {
        symbol: symbol.to_string(),
        day_open: open,
    }))
}

/// GET /spot/avgEntry - net quantity and weighted-average entry price
/// folded from the caller's trade history (signed upstream call).
pub async fn avg_entry<S: ExchangeSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<AvgEntryResponse>, ApiError> {
    let symbol = Symbol::new(query.require()?);
    let trades = state
        .exchange
        .my_trades(symbol.pair(), MY_TRADES_LIMIT)
        .await?;

    let fills = fills_from_trades(&trades);
    let position = Position::from_fills(&fills, symbol.quote())?;

    Ok(Json(AvgEntryResponse::from_position(
        symbol.pair().to_string(),
        &position,
    )))
}

/// GET /spot/account - spot balances with a positive total (signed
/// upstream call).
pub async fn account<S: ExchangeSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<AccountResponse>, ApiError> {
    let info = state.exchange.account().await?;
    let balances = info
        .balances
        .iter()
        .filter(|b| b.total() > Decimal::ZERO)
        .map(BalanceResponse::from)
        .collect();
    Ok(Json(AccountResponse { balances }))
}

/// GET /spot/summary - everything the frontend's position table needs in
/// one flat object: quantity, average entry, last price, day open, PnL
/// and daily change.
///
/// The three upstream fetches are independent, so they run concurrently;
/// a failure in any of them aborts the whole request rather than serving
/// a partial row.
pub async fn summary<S: ExchangeSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let symbol = Symbol::new(query.require()?);

    let (ticker, klines, trades) = tokio::join!(
        state.exchange.ticker_price(symbol.pair()),
        state.exchange.day_klines(symbol.pair(), DAY_KLINE_LIMIT),
        state.exchange.my_trades(symbol.pair(), MY_TRADES_LIMIT),
    );
    let (ticker, klines, trades) = (ticker?, klines?, trades?);

    let day_open = first_day_open(&klines)?;
    let fills = fills_from_trades(&trades);
    let position = Position::from_fills(&fills, symbol.quote())?;
    let valuation = Valuation::compute(&position, ticker.price, day_open)?;

    tracing::debug!(
        symbol = %symbol,
        qty = %position.net_quantity,
        "summary computed from {} trades",
        trades.len()
    );

    Ok(Json(SummaryResponse::build(
        symbol.pair().to_string(),
        &position,
        &valuation,
        ticker.price,
        day_open,
    )))
}

/// Open price of the first returned candle; an empty kline response is an
/// upstream data problem, not "price is zero".
fn first_day_open(klines: &[Kline]) -> Result<Decimal, ApiError> {
    klines
        .first()
        .map(Kline::open)
        .ok_or_else(|| ApiError::Upstream("no kline data returned".to_string()))
}
