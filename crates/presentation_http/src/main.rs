//! RideVibe HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use infrastructure::{AppConfig, VideoServerAdapters, init_tracing};
use presentation_http::{create_app, state::AppState};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        backend = %config.backend.base_url,
        "RideVibe server starting"
    );

    let adapters = VideoServerAdapters::from_config(config.backend.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize video server client: {e}"))?;
    let state = AppState::new(adapters, config.health.clone());

    let app = create_app(state, &config.server);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Server listening");

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = signalled_tx.send(());
    });

    tokio::select! {
        result = async { server.await } => result?,
        () = drain_deadline(signalled_rx, shutdown_timeout) => {
            warn!(timeout = ?shutdown_timeout, "Connections still open after shutdown timeout, exiting");
        }
    }

    info!("Server shutdown complete");

    Ok(())
}

/// Resolve once `timeout` has passed after the shutdown signal
async fn drain_deadline(signalled: oneshot::Receiver<()>, timeout: Duration) {
    if signalled.await.is_err() {
        std::future::pending::<()>().await;
    }
    info!(timeout = ?timeout, "Waiting for connections to close");
    tokio::time::sleep(timeout).await;
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
