//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field names on
//! the wire are camelCase.

pub mod clicks;
pub mod health;
pub mod shorten;
pub mod stats;
