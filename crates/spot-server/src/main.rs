//! spot-server: Main binary for the spot proxy service.
//!
//! This binary wires together all crates and starts the HTTP server.

use axum::http::{header, HeaderName, Method};
use spot_api::{create_router, AppState};
use spot_exchange::{BinanceClient, ExchangeConfig};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default port for the server.
const DEFAULT_PORT: u16 = 3000;

/// Default host for the server.
const DEFAULT_HOST: &str = "0.0.0.0";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "spot_server=info,spot_api=info,spot_exchange=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Exchange credentials and base URL, read once at startup
    let config = ExchangeConfig::from_env()?;
    if !config.has_credentials() {
        tracing::warn!("API_KEY/API_SECRET not set; signed endpoints will fail");
    }
    tracing::info!("Proxying {}", config.base_url);

    let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // Create app state around the exchange client
    let state = Arc::new(AppState::new(BinanceClient::new(config)));

    // Create router with request tracing and CORS for the hosted frontend
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_any_origin());

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET /time             - Exchange clock passthrough");
    tracing::info!("  GET /avgPrice         - Rolling average price");
    tracing::info!("  GET /spot/tickerPrice - Last price");
    tracing::info!("  GET /spot/dayOpen     - Daily candle open");
    tracing::info!("  GET /spot/avgEntry    - WAC position (signed)");
    tracing::info!("  GET /spot/account     - Non-zero balances (signed)");
    tracing::info!("  GET /spot/summary     - All-in-one position row");

    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS: any origin. The proxy fronts a hosted low-code app whose origin
/// is not under our control, and it holds no per-caller state worth
/// protecting beyond what the upstream keys already gate.
fn cors_any_origin() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-mbx-apikey"),
        ])
}
