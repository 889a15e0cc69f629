//! Telemetry sink that writes events to the local log only.

use async_trait::async_trait;
use tracing::{error, info, warn};

use super::sink::{TelemetryResult, TelemetrySink};
use crate::domain::log_event::{LogEvent, LogLevel};

/// A sink that forwards events to `tracing` instead of a remote collector.
///
/// Used when no collector URL or token is configured, so that events still
/// show up in the service log.
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TelemetrySink for LogSink {
    async fn send(&self, event: &LogEvent) -> TelemetryResult<()> {
        match event.level {
            LogLevel::Info => info!(
                target: "telemetry",
                stack = %event.stack,
                package = %event.component,
                "{}",
                event.message
            ),
            LogLevel::Warn => warn!(
                target: "telemetry",
                stack = %event.stack,
                package = %event.component,
                "{}",
                event.message
            ),
            LogLevel::Error => error!(
                target: "telemetry",
                stack = %event.stack,
                package = %event.component,
                "{}",
                event.message
            ),
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_sink_always_succeeds() {
        let sink = LogSink::new();

        for level in [LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            let event = LogEvent::new("backend", level, "controller", "message");
            assert!(sink.send(&event).await.is_ok());
        }

        assert_eq!(sink.name(), "log");
    }
}
