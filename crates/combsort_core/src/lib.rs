//! # combsort core
//!
//! Comb sort engine for integer sequences.
//!
//! This crate provides:
//! - The comb loop over a caller-owned buffer ([`sort_in_place`])
//! - Copying sorts in either direction ([`sort`], [`sort_with_metadata`])
//! - Initial gap selection with optional caller override ([`initial_gap`])
//! - The request/result data model used by the HTTP layer and the CLI
//!
//! ## Algorithm
//!
//! Comb sort compares elements a *gap* apart and shrinks the gap by a fixed
//! factor of 1.3 after every pass. Once the gap reaches 1 the passes repeat
//! until one of them performs no swap, which makes the tail of the run a
//! bubble sort over an almost sorted buffer.
//!
//! ```
//! use combsort_core::{sort_with_metadata, SortOrder};
//!
//! let result = sort_with_metadata(&[5, 2, 8, 1, 9, 3], SortOrder::Ascending, None);
//! assert_eq!(result.sorted_values, vec![1, 2, 3, 5, 8, 9]);
//! assert_eq!(result.initial_gap, 4);
//! ```
//!
//! ## Key Invariants
//!
//! - The input slice is never mutated; every call works on its own copy
//! - Output is a permutation of the input (not a stable one)
//! - The engine holds no state and takes no dependencies

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod engine;
mod gap;
mod order;
mod types;

pub use engine::{sort, sort_in_place, sort_then_reverse, sort_with_metadata, CombSorter};
pub use gap::{initial_gap, next_gap, SHRINK_FACTOR};
pub use order::SortOrder;
pub use types::{SortRequest, SortResult};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
