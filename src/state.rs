//! Shared application state injected into all handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::application::Telemetry;
use crate::application::services::Registry;
use crate::infrastructure::persistence::{InMemoryAccessLog, InMemoryEntryStore};

/// The registry as wired up by the server.
pub type AppRegistry = Registry<InMemoryEntryStore, InMemoryAccessLog>;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<AppRegistry>,
    /// Prefix for returned short links, without a trailing slash.
    pub base_url: String,
    /// When true, the client identifier is read from `X-Forwarded-For` /
    /// `X-Real-IP`. Enable only behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(registry: Arc<AppRegistry>, base_url: impl Into<String>, behind_proxy: bool) -> Self {
        Self {
            registry,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            behind_proxy,
            started_at: Instant::now(),
        }
    }

    pub fn telemetry(&self) -> &Telemetry {
        self.registry.telemetry()
    }
}
