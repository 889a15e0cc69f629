//! HTTP server initialization and runtime setup.
//!
//! Handles telemetry sink selection, worker spawning, registry wiring, and
//! the Axum server lifecycle.

use crate::application::Telemetry;
use crate::application::services::Registry;
use crate::config::Config;
use crate::infrastructure::persistence::{InMemoryAccessLog, InMemoryEntryStore};
use crate::infrastructure::telemetry::{
    HttpTelemetrySink, LogSink, TelemetrySink, run_telemetry_worker,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Telemetry sink (remote collector or local log) and its background worker
/// - In-memory registry
/// - Axum HTTP server with graceful shutdown
///
/// On shutdown the telemetry worker is given a bounded amount of time to
/// deliver events that are still queued.
///
/// # Errors
///
/// Returns an error if:
/// - The telemetry HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let sink = build_sink(&config)?;
    tracing::info!("Telemetry sink: {}", sink.name());

    let (telemetry_tx, telemetry_rx) = mpsc::channel(config.telemetry_queue_capacity);
    let worker = tokio::spawn(run_telemetry_worker(
        telemetry_rx,
        sink,
        config.telemetry_worker_concurrency,
    ));
    tracing::info!("Telemetry worker started");

    let registry = Arc::new(
        Registry::new(
            Arc::new(InMemoryEntryStore::new()),
            Arc::new(InMemoryAccessLog::new()),
            Telemetry::new(config.telemetry_stack.clone(), telemetry_tx),
        )
        .with_default_validity(config.default_validity_minutes),
    );

    let state = AppState::new(registry.clone(), config.base_url.clone(), config.behind_proxy);
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    let addr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}");

    registry
        .telemetry()
        .info("service", format!("URL Shortener Backend started on {addr}"));
    drop(registry);

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    let drain_timeout = Duration::from_secs(config.telemetry_timeout_secs + 1);
    if tokio::time::timeout(drain_timeout, worker).await.is_err() {
        tracing::warn!("Telemetry worker did not drain in time, pending events dropped");
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Picks the remote collector when both URL and token are configured,
/// otherwise the local log sink.
fn build_sink(config: &Config) -> Result<Arc<dyn TelemetrySink>> {
    match config.remote_telemetry() {
        Some((url, token)) => {
            let sink = HttpTelemetrySink::new(
                url,
                token,
                Duration::from_secs(config.telemetry_timeout_secs),
            )
            .context("Failed to build telemetry HTTP client")?;
            Ok(Arc::new(sink))
        }
        None => Ok(Arc::new(LogSink::new())),
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Terminate signal received, starting graceful shutdown");
}
