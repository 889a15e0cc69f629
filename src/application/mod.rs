//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and telemetry. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::registry::Registry`] - Short-code creation, resolution and reports
//! - [`telemetry::Telemetry`] - Non-blocking telemetry emitter

pub mod services;
pub mod telemetry;

pub use telemetry::Telemetry;
