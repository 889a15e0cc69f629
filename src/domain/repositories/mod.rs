//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the two shared containers the registry owns. They
//! are implemented in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`EntryStore`] - Short code to entry mapping
//! - [`AccessLog`] - Per-code click history
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod access_log;
pub mod entry_store;

pub use access_log::AccessLog;
pub use entry_store::EntryStore;

#[cfg(test)]
pub use access_log::MockAccessLog;
#[cfg(test)]
pub use entry_store::MockEntryStore;
