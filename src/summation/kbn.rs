//! Kahan-Babuška-Neumaier compensated summation

use num_traits::AsPrimitive;

use crate::math;
use crate::traits::{Accumulator, Monoid};

/// Running sum with Neumaier's improved compensation
///
/// Kahan's scheme assumes the running sum dominates each new term. When a
/// term is larger in magnitude than the sum, the bits lost belong to the sum
/// instead, and Kahan's correction misses them. This variant checks which
/// operand is larger before recovering the rounding error.
///
/// # Example
///
/// ```
/// use foldstats::summation::KbnSum;
/// use foldstats::traits::{Accumulator, Monoid};
///
/// let left = KbnSum::identity().update(1.0).update(1e100);
/// let right = KbnSum::identity().update(1.0).update(-1e100);
/// assert_eq!(left.merge(right).sum(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KbnSum {
    sum: f64,
    compensation: f64,
}

impl KbnSum {
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

    /// The accumulated correction term
    pub fn compensation(&self) -> f64 {
        self.compensation
    }

    fn add(self, x: f64) -> Self {
        let t = self.sum + x;
        if !t.is_finite() {
            return Self {
                sum: t,
                compensation: 0.0,
            };
        }
        let lost = if math::abs(self.sum) >= math::abs(x) {
            (self.sum - t) + x
        } else {
            (x - t) + self.sum
        };
        Self {
            sum: t,
            compensation: self.compensation + lost,
        }
    }
}

impl Monoid for KbnSum {
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

impl<T: AsPrimitive<f64>> Accumulator<T> for KbnSum {
    fn update(self, item: T) -> Self {
        self.add(item.as_())
    }
}
