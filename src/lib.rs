//! # Shortlink Registry
//!
//! An in-memory URL shortening service with expiring short codes and
//! per-redirect click tracking, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entries, access events, reports and repository traits
//! - **Application Layer** ([`application`]) - The registry service and telemetry emitter
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory storage and telemetry sinks
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or custom short codes, case-insensitive
//! - Per-entry validity in minutes; expired codes answer 410 but keep their stats
//! - Click history with user agent, referer and client address
//! - Best-effort telemetry to a remote log collector, off the request path
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3001"
//! cargo run
//!
//! curl -X POST localhost:3001/shorturls \
//!   -H 'content-type: application/json' \
//!   -d '{"url": "https://example.com", "validity": 60}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.
//!
//! ## Storage
//!
//! Everything lives in process memory and is lost on restart. Entries and
//! click histories are never evicted, expired or not.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::Telemetry;
    pub use crate::application::services::Registry;
    pub use crate::domain::entities::{Entry, NewEntry, Report, RequestContext};
    pub use crate::error::AppError;
    pub use crate::state::{AppRegistry, AppState};
}
