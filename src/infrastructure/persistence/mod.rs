//! In-memory repository implementations.
//!
//! Nothing here survives a restart; the registry is a single-process
//! component.

mod memory_access_log;
mod memory_entry_store;

pub use memory_access_log::InMemoryAccessLog;
pub use memory_entry_store::InMemoryEntryStore;
