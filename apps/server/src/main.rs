//! # Shoplite Server
//!
//! HTTP API for the Shoplite demo shop.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize tracing (env filter, default INFO)                       │
//! │  2. Load configuration from SHOPLITE_* env vars                         │
//! │  3. Build state: seeded catalog, empty cart/ledger/history              │
//! │  4. Bind the listener and serve the router                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shoplite_server::config::ServerConfig;
use shoplite_server::router;
use shoplite_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Shoplite server...");

    // Load configuration
    let config = ServerConfig::load()?;
    info!(
        addr = %config.bind_address(),
        discount_interval = config.discount_interval,
        discount_rate_bps = config.discount_rate_bps,
        "Configuration loaded"
    );

    // All state is in-memory; a restart starts a fresh shop
    let state = AppState::from_config(&config);
    let app = router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
