//! Telemetry event model for asynchronous log delivery.

use serde::Serialize;
use std::fmt;

/// Severity accepted by the telemetry collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event headed for the external telemetry collector.
///
/// Created by [`crate::application::Telemetry`], sent over a bounded
/// channel and delivered by
/// [`crate::infrastructure::telemetry::run_telemetry_worker`]. The serialized
/// form is the collector's wire format, where the component is called
/// `package`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    pub stack: String,
    pub level: LogLevel,
    #[serde(rename = "package")]
    pub component: String,
    pub message: String,
}

impl LogEvent {
    pub fn new(
        stack: impl Into<String>,
        level: LogLevel,
        component: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stack: stack.into(),
            level,
            component: component.into(),
            message: message.into(),
        }
    }
}
