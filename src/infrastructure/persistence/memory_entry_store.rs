//! In-memory [`EntryStore`] implementation.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryStore;
use crate::error::AppError;
use crate::utils::code_generator::normalize_code;
use serde_json::json;

#[derive(Debug, Default)]
struct EntryTable {
    entries: HashMap<String, Entry>,
    /// Codes in insertion order, so listings follow creation order.
    order: Vec<String>,
}

/// Process-local entry store.
///
/// A single reader-writer lock guards both the map and the insertion order,
/// which makes [`EntryStore::insert`] one indivisible check-and-write.
///
/// Entries are never evicted. Expired entries stay in memory for reporting
/// until the process exits, so memory grows with the number of codes ever
/// created.
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    table: RwLock<EntryTable>,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntryStore for InMemoryEntryStore {
    fn insert(&self, mut entry: Entry) -> Result<(), AppError> {
        let key = normalize_code(&entry.code);
        let mut table = self.table.write();

        if table.entries.contains_key(&key) {
            return Err(AppError::code_collision(
                "Shortcode already exists",
                json!({ "code": key }),
            ));
        }

        entry.code = key.clone();
        table.order.push(key.clone());
        table.entries.insert(key, entry);

        Ok(())
    }

    fn get(&self, code: &str) -> Result<Option<Entry>, AppError> {
        let key = normalize_code(code);
        Ok(self.table.read().entries.get(&key).cloned())
    }

    fn exists(&self, code: &str) -> Result<bool, AppError> {
        let key = normalize_code(code);
        Ok(self.table.read().entries.contains_key(&key))
    }

    fn all_entries(&self) -> Result<Vec<Entry>, AppError> {
        let table = self.table.read();

        table
            .order
            .iter()
            .map(|code| {
                table.entries.get(code).cloned().ok_or_else(|| {
                    AppError::internal(
                        "Entry index out of sync with entry map",
                        json!({ "code": code }),
                    )
                })
            })
            .collect()
    }
}
