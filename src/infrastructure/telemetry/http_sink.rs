//! HTTP telemetry sink posting events to a remote log collector.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::sink::{TelemetryError, TelemetryResult, TelemetrySink};
use crate::domain::log_event::LogEvent;

/// Sends each event as a JSON `POST` with a bearer token.
///
/// Body: `{"stack": ..., "level": ..., "package": ..., "message": ...}`.
pub struct HttpTelemetrySink {
    client: Client,
    endpoint: String,
    token: String,
}

impl HttpTelemetrySink {
    /// Creates a sink with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> TelemetryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TelemetryError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl TelemetrySink for HttpTelemetrySink {
    async fn send(&self, event: &LogEvent) -> TelemetryResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(event)
            .send()
            .await
            .map_err(|e| TelemetryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TelemetryError::Rejected(status.as_u16()));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
