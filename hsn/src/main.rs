//! hsnd - HSN code validation server

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hsn::{app, loader, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hsn=info,tower_http=info")),
        )
        .init();

    let config = Config::parse();

    // The only blocking load; everything after this point is read-only
    let index = loader::load_index(&config.data)
        .with_context(|| format!("loading master data from {}", config.data.display()))?;

    let state = AppState {
        index: Arc::new(index),
        max_batch_size: config.max_batch_size,
    };

    let addr = format!("0.0.0.0:{}", config.port);
    info!(%addr, "starting HSN validation server");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
