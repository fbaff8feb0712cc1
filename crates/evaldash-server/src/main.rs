mod chart;
mod dto;
mod error;
mod handlers;
mod render;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Result;
use evaldash_core::ServerConfig;
use tracing::info;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;
    let state = Arc::new(AppState::new(config)?);

    let app = routes::router(state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
