//! In-memory record store keyed by content hash
//!
//! Records live for the lifetime of the process. Insertion order is kept so
//! listings are stable between calls.

use crate::strings::types::StringRecord;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Records {
    by_id: HashMap<String, StringRecord>,
    order: Vec<String>,
}

/// Store of analyzed strings
///
/// Mutations take the write lock, so at most one insert per id succeeds
/// even under concurrent requests.
#[derive(Default)]
pub struct StringStore {
    records: RwLock<Records>,
}

impl StringStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless one with the same id exists.
    ///
    /// Returns `false` and leaves the store untouched on a duplicate.
    pub async fn insert_if_absent(&self, record: StringRecord) -> bool {
        let mut records = self.records.write().await;
        if records.by_id.contains_key(&record.id) {
            return false;
        }
        records.order.push(record.id.clone());
        records.by_id.insert(record.id.clone(), record);
        true
    }

    /// Get a record by id
    pub async fn get(&self, id: &str) -> Option<StringRecord> {
        self.records.read().await.by_id.get(id).cloned()
    }

    /// Delete a record by id. Returns `false` if it was absent.
    pub async fn delete(&self, id: &str) -> bool {
        let mut records = self.records.write().await;
        if records.by_id.remove(id).is_none() {
            return false;
        }
        records.order.retain(|existing| existing != id);
        true
    }

    /// All records in insertion order
    pub async fn list_all(&self) -> Vec<StringRecord> {
        let records = self.records.read().await;
        records
            .order
            .iter()
            .filter_map(|id| records.by_id.get(id).cloned())
            .collect()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
