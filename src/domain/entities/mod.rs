//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Entry`] - A short code mapped to a target URL with a time-to-live
//! - [`AccessEvent`] - One recorded resolution of a short code
//! - [`Report`] - An entry together with its click history
//!
//! Creation inputs are separate structs ([`NewEntry`], [`RequestContext`]),
//! following the "New Type" pattern used for the stored entities.

pub mod access_event;
pub mod entry;
pub mod report;

pub use access_event::{AccessEvent, DIRECT, RequestContext, UNKNOWN};
pub use entry::{Entry, NewEntry};
pub use report::{ClickDetail, Report, UNKNOWN_LOCATION};
