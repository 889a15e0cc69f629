//! Fire-and-forget telemetry emitter.

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::warn;

use crate::domain::log_event::{LogEvent, LogLevel};

/// Handle used by the registry to emit telemetry events.
///
/// Emission never blocks and never fails the caller: the event is offered to
/// a bounded channel with `try_send`. When the queue is full or the worker
/// has stopped, the event is dropped and a local warning is logged.
#[derive(Debug, Clone)]
pub struct Telemetry {
    stack: String,
    sender: mpsc::Sender<LogEvent>,
}

impl Telemetry {
    pub fn new(stack: impl Into<String>, sender: mpsc::Sender<LogEvent>) -> Self {
        Self {
            stack: stack.into(),
            sender,
        }
    }

    pub fn emit(&self, level: LogLevel, component: &str, message: impl Into<String>) {
        let event = LogEvent::new(self.stack.as_str(), level, component, message);

        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(
                    level = %event.level,
                    message = %event.message,
                    "Telemetry queue full, dropping event"
                );
            }
            Err(TrySendError::Closed(event)) => {
                warn!(
                    level = %event.level,
                    message = %event.message,
                    "Telemetry worker stopped, dropping event"
                );
            }
        }
    }

    pub fn info(&self, component: &str, message: impl Into<String>) {
        self.emit(LogLevel::Info, component, message);
    }

    pub fn warn(&self, component: &str, message: impl Into<String>) {
        self.emit(LogLevel::Warn, component, message);
    }

    pub fn error(&self, component: &str, message: impl Into<String>) {
        self.emit(LogLevel::Error, component, message);
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Free slots currently available in the queue.
    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }
}
