//! Binding the listener and serving the API.

use tokio::net::TcpListener;
use tracing::info;

use crate::api::app;
use crate::config::{Config, ServerMode};
use crate::error::{Result, ServerError};
use crate::metrics;
use crate::utils::shutdown_signal;

/// Bind the configured address and serve until a shutdown signal.
pub async fn run(config: &Config, mode: ServerMode) -> Result<()> {
    let addr = config.socket_addr()?;

    if let Some(port) = config.metrics_port {
        metrics::install_exporter((addr.ip(), port).into())?;
    }

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!("Server starting on port {}", config.port);
    info!(
        "Health check available at: http://localhost:{}/ping",
        config.port
    );
    info!("Mode: {}", mode);

    axum::serve(listener, app(mode))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
