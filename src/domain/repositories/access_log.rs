//! Repository trait for per-code access history.

use crate::domain::entities::AccessEvent;
use crate::error::AppError;

/// Append-only, per-code sequence of [`AccessEvent`]s.
///
/// Keys follow the same case-insensitive normalization as
/// [`super::EntryStore`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryAccessLog`] - process-local log
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait AccessLog: Send + Sync {
    /// Ensures an (empty) sequence exists for `code`.
    ///
    /// Never clears events that are already recorded.
    fn init(&self, code: &str) -> Result<(), AppError>;

    /// Records an event, creating the sequence if it does not exist yet.
    /// The sequence stays ordered by event timestamp.
    ///
    /// Atomic with respect to [`Self::count`] and [`Self::events`] for the
    /// same code.
    fn append(&self, code: &str, event: AccessEvent) -> Result<(), AppError>;

    /// Number of recorded events. Reports take their total from a single
    /// [`Self::events`] snapshot instead, so this serves callers that only
    /// need the count.
    fn count(&self, code: &str) -> Result<usize, AppError>;

    /// Copy of the recorded events in chronological order.
    ///
    /// Later appends never affect a snapshot that was already returned.
    fn events(&self, code: &str) -> Result<Vec<AccessEvent>, AppError>;
}
