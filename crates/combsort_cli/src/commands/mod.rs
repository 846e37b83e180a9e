//! CLI command implementations.

pub mod serve;
pub mod sort;
pub mod token;
