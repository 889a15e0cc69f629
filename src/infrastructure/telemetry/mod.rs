//! Telemetry delivery to an external log collector.
//!
//! Provides a [`TelemetrySink`] trait with two implementations:
//! - [`HttpTelemetrySink`] - Posts events to a remote collector
//! - [`LogSink`] - Writes events to the local log when no collector is configured
//!
//! [`run_telemetry_worker`] moves events from the registry's channel to the
//! sink, off the request path.

mod http_sink;
mod log_sink;
mod sink;
mod worker;

pub use http_sink::HttpTelemetrySink;
pub use log_sink::LogSink;
pub use sink::{TelemetryError, TelemetryResult, TelemetrySink};
pub use worker::run_telemetry_worker;

#[cfg(test)]
pub use sink::MockTelemetrySink;
