//! Serve command - run the HTTP server

use std::{path::Path, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use jurassic_core::Config;
use tokio::net::TcpListener;

use crate::server::{AppState, create_router};

/// Run the serve command.
///
/// Serves the landing page until interrupted with Ctrl+C.
pub async fn run(config_path: &Path, host: Option<&str>, port: Option<u16>) -> Result<()> {
    let mut config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    if let Some(h) = host {
        tracing::info!(host = h, "Overriding server host from CLI");
        config.server.host = h.to_string();
    }

    if let Some(p) = port {
        tracing::info!(port = p, "Overriding server port from CLI");
        config.server.port = p;
    }

    tracing::debug!(?config, "Loaded configuration");

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Jurassic Words is running at http://{addr}");
    println!("  Press Ctrl+C to stop");
    println!();

    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
