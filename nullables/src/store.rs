//! Nullable record store: record visibility writes for assertions.

use cryp_history::RecordStore;
use cryp_types::RecordKey;
use std::sync::Mutex;

/// Records every `set_hidden` call without applying it.
#[derive(Default)]
pub struct NullRecordStore {
    writes: Mutex<Vec<(RecordKey, bool)>>,
}

impl NullRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<(RecordKey, bool)> {
        self.writes.lock().unwrap().clone()
    }
}

impl RecordStore for NullRecordStore {
    fn set_hidden(&self, key: &RecordKey, hidden: bool) {
        self.writes.lock().unwrap().push((key.clone(), hidden));
    }
}
