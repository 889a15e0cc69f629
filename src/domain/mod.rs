//! Domain layer containing the registry's data model and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Entries, access events and reports
//! - [`repositories`] - Storage trait definitions
//! - [`log_event`] - Telemetry event model
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in [`crate::application::services::Registry`]
//!
//! # Telemetry Flow
//!
//! 1. The registry builds a [`log_event::LogEvent`] for each operation outcome
//! 2. The event is pushed onto a bounded channel without waiting
//! 3. A background worker hands it to the configured sink
//! 4. Delivery failures are logged locally and dropped

pub mod entities;
pub mod log_event;
pub mod repositories;
