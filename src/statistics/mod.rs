//! Scalar statistics over streaming data
//!
//! Each accumulator here is a small `Copy` value computed in a single pass
//! with constant memory, and every one of them can be merged with another
//! accumulator of the same type built over a disjoint sub-sample.
//!
//! # Accumulators
//!
//! - [`Count`]: number of elements
//! - [`Mean`]: running mean via Welford's update
//! - [`MeanKBN`]: mean from a compensated sum
//! - [`Variance`]: count, sum and sum of squared deviations, merged with the
//!   Chan-Golub-LeVeque formula
//! - [`Min`] / [`Max`]: extremum over a totally ordered type
//! - [`MinD`] / [`MaxD`]: extremum over `f64` that ignores NaN
//!
//! # Example
//!
//! ```
//! use foldstats::statistics::Variance;
//! use foldstats::traits::{Accumulator, CalcMean, CalcVariance, Monoid};
//!
//! let mut stats = Variance::identity();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.push(value);
//! }
//!
//! println!("Mean: {}", stats.mean().unwrap());
//! println!("Stddev: {}", stats.stddev().unwrap());
//! ```

mod count;
mod extremum;
mod mean;
mod variance;

pub use count::Count;
pub use extremum::{Max, MaxD, Min, MinD};
pub use mean::{Mean, MeanKBN};
pub use variance::Variance;
