//! Repository trait for short-code entries.

use crate::domain::entities::Entry;
use crate::error::AppError;

/// Authoritative mapping from short code to [`Entry`].
///
/// Codes are case-insensitive: implementations normalize every key they
/// receive to lowercase.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryEntryStore`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait EntryStore: Send + Sync {
    /// Inserts a new entry.
    ///
    /// The presence check and the write form a single atomic step: of two
    /// concurrent inserts for the same code exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeCollision`] if the code is already present.
    fn insert(&self, entry: Entry) -> Result<(), AppError>;

    /// Finds an entry by code, expired or not.
    fn get(&self, code: &str) -> Result<Option<Entry>, AppError>;

    fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Snapshot of every stored entry in insertion order.
    fn all_entries(&self) -> Result<Vec<Entry>, AppError>;
}
