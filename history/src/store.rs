//! In-memory transaction store.
//!
//! Holds the records last fetched from the node in display order and owns
//! their `hide` flags. Shared between the list view and the visibility
//! toggle through `&` or `Arc`.

use cryp_types::{RecordKey, TransactionRecord};
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use crate::error::HistoryError;
use crate::visibility::RecordStore;

#[derive(Debug, Default)]
pub struct TransactionStore {
    records: RwLock<Vec<TransactionRecord>>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a freshly fetched list.
    ///
    /// `hide` flags of records that survive the refresh are carried over.
    pub fn load(&self, records: Vec<TransactionRecord>) {
        let mut guard = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, records);
        for record in guard.iter_mut() {
            if let Some(old) = previous.iter().find(|old| old.key() == record.key()) {
                record.hide = old.hide;
            }
        }
        tracing::debug!(count = guard.len(), "loaded transaction records");
    }

    /// Parse a `listtransactions` JSON array and load it.
    pub fn load_json(&self, json: &str) -> Result<usize, HistoryError> {
        let records: Vec<TransactionRecord> = serde_json::from_str(json)?;
        let count = records.len();
        self.load(records);
        Ok(count)
    }

    pub fn load_json_file(&self, path: impl AsRef<Path>) -> Result<usize, HistoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| HistoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.load_json(&content)
    }

    /// Snapshot of all records in load order.
    pub fn records(&self) -> Vec<TransactionRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, key: &RecordKey) -> Option<TransactionRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| &r.key() == key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for TransactionStore {
    fn set_hidden(&self, key: &RecordKey, hidden: bool) {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let mut matched = 0;
        for record in records.iter_mut().filter(|r| &r.key() == key) {
            record.hide = hidden;
            matched += 1;
        }
        if matched == 0 {
            tracing::warn!(%key, "visibility change for unknown record ignored");
        }
    }
}
