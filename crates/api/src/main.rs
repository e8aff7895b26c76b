//! ShiftClock - employee time-tracking service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use shiftclock_api::{router, AppContext};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }

    let config = shiftclock_infra::config::load()?;
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    // Fail-fast initialization: storage probe and seeding happen here, not
    // on the first request.
    let ctx = Arc::new(AppContext::new(config).await?);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, backend = %ctx.storage_backend, "shiftclock listening");

    axum::serve(listener, router(ctx)).await?;
    Ok(())
}
