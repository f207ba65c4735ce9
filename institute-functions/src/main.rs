//! Institute Functions Server
//!
//! Serves the static per-section content endpoints and accepts enquiries.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use institute_functions::config::FunctionsConfig;
use institute_functions::http::{create_router, HttpState};
use institute_functions::open_storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("institute_functions=info".parse()?),
        )
        .init();

    let config = FunctionsConfig::from_env();
    info!(
        "Starting Institute Functions v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!("Listening on {}", config.listen_addr);
    if config.ephemeral {
        info!("Enquiries kept in memory only");
    } else {
        info!("Enquiry database: {}", config.database_path().display());
    }

    let storage = open_storage(&config)?;
    let router = create_router(HttpState::new(storage));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
