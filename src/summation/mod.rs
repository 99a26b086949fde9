//! Compensated summation
//!
//! Running sums that carry a correction term for the low-order bits lost in
//! each floating-point addition. Both accumulators accept any primitive
//! numeric element, widened to `f64` before it is added.
//!
//! # Algorithms
//!
//! - [`KahanSum`]: classic Kahan compensated summation
//! - [`KbnSum`]: Kahan-Babuška-Neumaier summation, which also recovers the
//!   error when the next term is larger in magnitude than the running sum
//!
//! # Example
//!
//! ```
//! use foldstats::summation::KbnSum;
//! use foldstats::traits::{Accumulator, Monoid};
//!
//! let mut sum = KbnSum::identity();
//! for x in [1.0, 1e100, 1.0, -1e100] {
//!     sum.push(x);
//! }
//! assert_eq!(sum.sum(), 2.0);
//! ```

mod kahan;
mod kbn;

pub use kahan::KahanSum;
pub use kbn::KbnSum;
