//! Kahan compensated summation

use num_traits::AsPrimitive;

use crate::traits::{Accumulator, Monoid};

/// Running sum with Kahan compensation
///
/// Keeps the running sum and a correction term holding the low-order bits
/// that the last addition rounded away. The corrected total is
/// `sum + compensation`.
///
/// Merging folds the other accumulator's running sum in as a single element
/// and then adds its correction term, so a merge costs one compensated
/// addition.
///
/// # Example
///
/// ```
/// use foldstats::summation::KahanSum;
/// use foldstats::traits::{Accumulator, Monoid};
///
/// let mut sum = KahanSum::identity();
/// sum.push(1.0);
/// for _ in 0..10_000 {
///     sum.push(1e-16);
/// }
/// assert!((sum.sum() - (1.0 + 1e-12)).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl KahanSum {
    /// Create an empty sum
    pub fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// The compensated total
    ///
    /// An infinite running sum is returned as is.
    pub fn sum(&self) -> f64 {
        if self.sum.is_infinite() {
            self.sum
        } else {
            self.sum + self.compensation
        }
    }

    /// The running sum without its correction term
    pub fn raw_sum(&self) -> f64 {
        self.sum
    }

    /// The correction term
    pub fn compensation(&self) -> f64 {
        self.compensation
    }

    fn add(self, x: f64) -> Self {
        let y = x + self.compensation;
        let t = self.sum + y;
        // past overflow or an infinite term the correction is meaningless
        if !t.is_finite() {
            return Self {
                sum: t,
                compensation: 0.0,
            };
        }
        Self {
            sum: t,
            compensation: y - (t - self.sum),
        }
    }
}

impl Monoid for KahanSum {
    fn identity() -> Self {
        Self::new()
    }

    /// Folds `other`'s running sum in as one compensated addition, then adds
    /// its correction term to ours.
    ///
    /// Unlike folding `other.sum()` as a single element, this keeps
    /// `other`'s correction term instead of rounding it away.
    fn merge(self, other: Self) -> Self {
        let merged = self.add(other.sum);
        if !merged.sum.is_finite() {
            return merged;
        }
        Self {
            sum: merged.sum,
            compensation: merged.compensation + other.compensation,
        }
    }
}

impl<T: AsPrimitive<f64>> Accumulator<T> for KahanSum {
    fn update(self, item: T) -> Self {
        self.add(item.as_())
    }
}
