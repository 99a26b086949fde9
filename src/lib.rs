//! # Foldstats
//!
//! Composable, mergeable streaming statistics for Rust.
//!
//! Every accumulator in this crate summarizes a sample in constant space,
//! absorbs one element in O(1) work, and can be merged with another
//! accumulator built over a disjoint sub-sample. Merging is associative and
//! commutative, so partial results can be combined in any order: across
//! threads, shards, or a reduction tree.
//!
//! ## Features
//!
//! - **Counting and means**: [`Count`], Welford [`Mean`], compensated [`MeanKBN`]
//! - **Variance**: [`Variance`] with the Chan-Golub-LeVeque parallel merge
//! - **Extrema**: [`Min`]/[`Max`] for ordered types, NaN-skipping [`MinD`]/[`MaxD`]
//! - **Compensated sums**: [`KahanSum`] and [`KbnSum`]
//! - **Products**: [`Pair`] and tuples run several accumulators in one pass
//!
//! ## Quick Start
//!
//! ```rust
//! use foldstats::prelude::*;
//!
//! let mut stats = Variance::identity();
//! for x in [1.0, 2.0, 3.0, 4.0] {
//!     stats.push(x);
//! }
//! println!("mean: {}", stats.mean().unwrap());
//! println!("sample variance: {}", stats.sample_variance().unwrap());
//! ```
//!
//! ## Distributed Computing
//!
//! All accumulators implement [`Monoid`](traits::Monoid), so partial results
//! from independent workers can be merged:
//!
//! ```rust
//! use foldstats::fold::reduce_sample;
//! use foldstats::prelude::*;
//!
//! // Each worker processes its partition
//! let worker1: Variance = reduce_sample([2.0, 4.0, 4.0, 4.0]);
//! let worker2: Variance = reduce_sample([5.0, 5.0, 7.0, 9.0]);
//!
//! // Merge results
//! let total = worker1.merge(worker2);
//! assert!((total.variance().unwrap() - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the crate is
//!   `no_std` and uses `libm` for float functions
//! - `serde`: Enable serialization of every accumulator

#![cfg_attr(not(feature = "std"), no_std)]

// Core traits always available
pub mod traits;

pub mod combinators;
pub mod fold;
pub mod statistics;
pub mod summation;

mod math;

pub mod prelude {
    pub use crate::combinators::Pair;
    pub use crate::statistics::{Count, Max, MaxD, Mean, MeanKBN, Min, MinD, Variance};
    pub use crate::summation::{KahanSum, KbnSum};
    pub use crate::traits::*;
}

pub use combinators::Pair;
pub use statistics::{Count, Max, MaxD, Mean, MeanKBN, Min, MinD, Variance};
pub use summation::{KahanSum, KbnSum};
