//! Benchmarks for combsort.
//!
//! Run with `cargo bench -p combsort_bench`. This library only hosts the
//! input generators shared by the bench targets.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Input shapes used by the benchmarks.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// Uniformly random values.
    Random,
    /// Already ascending.
    Sorted,
    /// Descending.
    Reversed,
    /// Only a few distinct values.
    FewUnique,
}

impl Shape {
    /// All shapes, in report order.
    pub const ALL: [Shape; 4] = [
        Shape::Random,
        Shape::Sorted,
        Shape::Reversed,
        Shape::FewUnique,
    ];

    /// Label used in benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            Shape::Random => "random",
            Shape::Sorted => "sorted",
            Shape::Reversed => "reversed",
            Shape::FewUnique => "few_unique",
        }
    }
}

/// Generates `len` values of the given shape from a fixed seed.
pub fn generate(shape: Shape, len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    match shape {
        Shape::Random => (0..len).map(|_| rng.gen()).collect(),
        Shape::Sorted => (0..len as i32).collect(),
        Shape::Reversed => (0..len as i32).rev().collect(),
        Shape::FewUnique => (0..len).map(|_| rng.gen_range(0..8)).collect(),
    }
}
