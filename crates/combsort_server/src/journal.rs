//! Sort journal seam.
//!
//! Every completed sort is reported to a [`SortJournal`] with the input and
//! output arrays and the caller's user id. Where (or whether) those records
//! are stored is up to the implementation.

use tracing::info;

/// One completed sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRecord {
    /// Human-readable summary.
    pub message: String,
    /// Values as received.
    pub input: Vec<i32>,
    /// Values as returned.
    pub output: Vec<i32>,
    /// Caller, if known.
    pub user_id: Option<String>,
}

impl SortRecord {
    /// Creates a record.
    pub fn new(
        message: impl Into<String>,
        input: Vec<i32>,
        output: Vec<i32>,
        user_id: Option<String>,
    ) -> Self {
        Self {
            message: message.into(),
            input,
            output,
            user_id,
        }
    }
}

/// Receives completed sorts.
pub trait SortJournal: Send + Sync {
    /// Records one sort. Must not block for long; it runs on the request path.
    fn record(&self, record: &SortRecord);
}

/// Journal that emits one `tracing` event per sort.
///
/// Events use the `combsort::journal` target so they can be routed or
/// filtered separately from request logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingJournal;

impl SortJournal for TracingJournal {
    fn record(&self, record: &SortRecord) {
        info!(
            target: "combsort::journal",
            user = record.user_id.as_deref().unwrap_or("unknown"),
            len = record.input.len(),
            input = ?record.input,
            output = ?record.output,
            "{}",
            record.message
        );
    }
}
