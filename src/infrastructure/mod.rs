//! Infrastructure layer for storage and external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory entry store and access log
//! - [`telemetry`] - Telemetry sinks and the delivery worker

pub mod persistence;
pub mod telemetry;
