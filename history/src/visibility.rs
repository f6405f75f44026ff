//! Click-to-expand visibility of history rows.
//!
//! The flag lives in the record store; toggling only asks the store to
//! write the negation of the value the caller rendered. Any number of rows
//! may be expanded at once.

use cryp_types::{RecordKey, TransactionRecord};
use std::sync::Arc;

/// Mutator for the `hide` flag of stored records.
///
/// Writes are fire-and-forget: a store that cannot apply one logs it.
pub trait RecordStore {
    fn set_hidden(&self, key: &RecordKey, hidden: bool);
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn set_hidden(&self, key: &RecordKey, hidden: bool) {
        (**self).set_hidden(key, hidden)
    }
}

impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    fn set_hidden(&self, key: &RecordKey, hidden: bool) {
        (**self).set_hidden(key, hidden)
    }
}

pub struct VisibilityToggle<S> {
    store: S,
}

impl<S: RecordStore> VisibilityToggle<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Flip the `hide` flag of `record` as it was last rendered.
    pub fn toggle(&self, record: &TransactionRecord) {
        let key = RecordKey::of(record);
        let hidden = !record.hide;
        tracing::trace!(%key, hidden, "toggling record visibility");
        self.store.set_hidden(&key, hidden);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryp_types::{Categories, Timestamp};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Writes(RefCell<Vec<(RecordKey, bool)>>);

    impl RecordStore for Writes {
        fn set_hidden(&self, key: &RecordKey, hidden: bool) {
            self.0.borrow_mut().push((key.clone(), hidden));
        }
    }

    #[test]
    fn writes_negated_flag_under_composite_key() {
        let writes = Writes::default();
        let toggle = VisibilityToggle::new(&writes);

        let mut record = TransactionRecord::new("ab12");
        record.category = Categories::from_strs(["receive"]);
        record.address = "t1Kx9".into();
        record.timereceived = Timestamp::new(1_551_801_605);
        toggle.toggle(&record);

        record.hide = true;
        toggle.toggle(&record);

        let writes = writes.0.borrow();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].0.txid, "ab12");
        assert_eq!(writes[0].0.address, "t1Kx9");
        assert_eq!(writes[0].0.timereceived, Timestamp::new(1_551_801_605));
        assert!(writes[0].1);
        assert!(!writes[1].1);
    }
}
