//! JSON wire format of the sort endpoint.
//!
//! Request:
//!
//! ```json
//! { "array": [5, 2, 8], "ascending": true, "gap": null }
//! ```
//!
//! Response:
//!
//! ```json
//! {
//!   "originalArray": [5, 2, 8],
//!   "sortedArray": [2, 5, 8],
//!   "ascending": true,
//!   "gap": 2,
//!   "executionTimeMs": 0.004,
//!   "completionTime": "2025-01-01T12:00:00.123456Z"
//! }
//! ```
//!
//! Errors carry `{ "error": "<message>" }`.

use crate::error::{ServerError, ServerResult};
use chrono::{DateTime, Utc};
use combsort_core::{SortOrder, SortRequest, SortResult};
use serde::{Deserialize, Serialize};

/// Message returned when the array is missing, null or empty.
pub const EMPTY_ARRAY_MESSAGE: &str = "Array cannot be empty";

/// Body of `POST /api/sort`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortBody {
    /// Values to sort. Required and non-empty.
    pub array: Option<Vec<i32>>,
    /// Direction; missing or null means ascending.
    pub ascending: Option<bool>,
    /// Initial gap; missing, null or out of range means automatic.
    pub gap: Option<i64>,
}

impl SortBody {
    /// Validates the body and turns it into an engine request.
    ///
    /// Fails on a missing or empty array, or one longer than `max_values`.
    /// A gap that is not a usable index distance is passed through as
    /// "automatic" rather than rejected.
    pub fn into_request(self, max_values: usize) -> ServerResult<SortRequest<i32>> {
        let values = match self.array {
            Some(values) if !values.is_empty() => values,
            _ => return Err(ServerError::InvalidRequest(EMPTY_ARRAY_MESSAGE.into())),
        };
        if values.len() > max_values {
            return Err(ServerError::PayloadTooLarge {
                len: values.len(),
                max: max_values,
            });
        }

        Ok(SortRequest {
            values,
            order: SortOrder::from_ascending(self.ascending.unwrap_or(true)),
            gap: self.gap.and_then(|gap| usize::try_from(gap).ok()),
        })
    }
}

/// Successful response of `POST /api/sort`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortResponse {
    /// Values as received.
    pub original_array: Vec<i32>,
    /// Values sorted.
    pub sorted_array: Vec<i32>,
    /// Direction used.
    pub ascending: bool,
    /// Gap of the first comparison pass.
    pub gap: usize,
    /// Time spent sorting, in milliseconds.
    pub execution_time_ms: f64,
    /// When sorting finished.
    pub completion_time: DateTime<Utc>,
}

impl SortResponse {
    /// Builds the response from the original values and the engine result.
    pub fn new(original_array: Vec<i32>, order: SortOrder, result: SortResult<i32>) -> Self {
        let execution_time_ms = result.execution_time_ms();
        Self {
            original_array,
            sorted_array: result.sorted_values,
            ascending: order.is_ascending(),
            gap: result.initial_gap,
            execution_time_ms,
            completion_time: result.completion_timestamp,
        }
    }
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// What went wrong.
    pub error: String,
}
