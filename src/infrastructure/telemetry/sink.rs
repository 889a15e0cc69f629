//! Telemetry sink trait and error types.

use async_trait::async_trait;

use crate::domain::log_event::LogEvent;

/// Errors that can occur while delivering a telemetry event.
///
/// These never leave the telemetry worker; they are logged and dropped.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Telemetry transport error: {0}")]
    Transport(String),

    #[error("Telemetry collector rejected event with status {0}")]
    Rejected(u16),
}

/// Result type for telemetry deliveries.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Destination for telemetry events.
///
/// Implementations are called from the background worker only, so they may
/// take as long as their own timeout allows without affecting request
/// latency.
///
/// # Implementations
///
/// - [`crate::infrastructure::telemetry::HttpTelemetrySink`] - POSTs events to a collector
/// - [`crate::infrastructure::telemetry::LogSink`] - writes events to the local log
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError`] when the event could not be delivered.
    async fn send(&self, event: &LogEvent) -> TelemetryResult<()>;

    /// Short name used in startup and health output.
    fn name(&self) -> &'static str;
}
