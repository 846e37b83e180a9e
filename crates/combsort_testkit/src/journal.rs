//! In-memory journal for assertions in tests.

use combsort_server::{SortJournal, SortRecord};
use parking_lot::Mutex;

/// Journal that keeps every record it receives.
#[derive(Debug, Default)]
pub struct RecordingJournal {
    records: Mutex<Vec<SortRecord>>,
}

impl RecordingJournal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all records so far.
    pub fn records(&self) -> Vec<SortRecord> {
        self.records.lock().clone()
    }

    /// Number of records so far.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl SortJournal for RecordingJournal {
    fn record(&self, record: &SortRecord) {
        self.records.lock().push(record.clone());
    }
}
