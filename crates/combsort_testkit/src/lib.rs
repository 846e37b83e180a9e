//! # combsort testkit
//!
//! Test utilities for combsort.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - Known input/output scenarios
//! - Ordering and permutation checks
//! - A journal that keeps every record for later assertions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use combsort_testkit::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn sorted(values in values_strategy(0..64)) {
//!         let sorted = combsort_core::sort(&values, true);
//!         prop_assert!(is_permutation(&values, &sorted));
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod checks;
pub mod fixtures;
pub mod generators;
pub mod journal;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checks::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::journal::*;
    pub use proptest::prelude::*;
}

pub use checks::*;
pub use fixtures::*;
pub use generators::*;
pub use journal::*;
