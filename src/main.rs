//! Server: loads config from env, ensures tables exist, mounts common and resource routes.

use pizza_restaurants::{app, connect, ensure_tables, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pizza_restaurants=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect(&config).await?;
    ensure_tables(&pool).await?;

    let router = app(AppState::new(pool), config.body_limit_bytes);
    let listener = TcpListener::bind(config.bind_addr()?).await?;
    tracing::info!(database = %config.database_url, "listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
