//! Mergeable variance
//!
//! Keeps the count `n`, the sum `S` and the sum of squared deviations from the
//! mean `M`. Combining two partial states uses the pairwise formula of Chan,
//! Golub and LeVeque:
//!
//! ```text
//! M = M1 + M2 + (S1·n2 - S2·n1)² / (n1·n2·(n1 + n2))
//! ```
//!
//! The last term accounts for the distance between the two partial means.
//! Dropping it understates the variance whenever the halves disagree.

use num_traits::AsPrimitive;

use crate::traits::{Accumulator, CalcCount, CalcMean, CalcVariance, Monoid, ReadoutError};

/// Count, sum and sum of squared deviations of a sample
///
/// A single update is a merge with the one-element state `(1, x, 0)`, so the
/// sequential and the parallel code paths share one formula.
///
/// # Example
///
/// ```
/// use foldstats::statistics::Variance;
/// use foldstats::traits::{Accumulator, CalcMean, CalcVariance, Monoid};
///
/// let mut stats = Variance::identity();
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.push(value);
/// }
///
/// assert!((stats.mean().unwrap() - 5.0).abs() < 1e-12);
/// assert!((stats.variance().unwrap() - 4.0).abs() < 1e-12);
/// assert!((stats.stddev().unwrap() - 2.0).abs() < 1e-12);
/// ```
///
/// # Distributed Usage
///
/// ```
/// use foldstats::statistics::Variance;
/// use foldstats::traits::{Accumulator, CalcVariance, Monoid};
///
/// let mut left = Variance::identity();
/// let mut right = Variance::identity();
///
/// // Worker 1
/// for v in [2.0, 4.0, 4.0, 4.0] {
///     left.push(v);
/// }
///
/// // Worker 2
/// for v in [5.0, 5.0, 7.0, 9.0] {
///     right.push(v);
/// }
///
/// let merged = left.merge(right);
/// assert!((merged.sample_variance().unwrap() - 32.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variance {
    count: u64,
    sum: f64,
    /// Sum of squared deviations from the mean (M2 in Welford's notation)
    m2: f64,
}

impl Variance {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            m2: 0.0,
        }
    }

    /// Sum of all elements
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Sum of squared deviations from the sample mean
    pub fn sum_squared_deviations(&self) -> f64 {
        self.m2
    }
}

impl Monoid for Variance {
    fn identity() -> Self {
        Self::new()
    }

    fn merge(self, other: Self) -> Self {
        let count = self.count + other.count;
        let sum = self.sum + other.sum;

        if self.count == 0 || other.count == 0 {
            return Self {
                count,
                sum,
                m2: self.m2 + other.m2,
            };
        }

        let n1 = self.count as f64;
        let n2 = other.count as f64;
        let shift = self.sum * n2 - other.sum * n1;
        Self {
            count,
            sum,
            m2: self.m2 + other.m2 + shift * shift / (n1 * n2 * (n1 + n2)),
        }
    }
}

impl<T: AsPrimitive<f64>> Accumulator<T> for Variance {
    fn singleton(item: T) -> Self {
        Self {
            count: 1,
            sum: item.as_(),
            m2: 0.0,
        }
    }
}

impl CalcCount for Variance {
    fn count(&self) -> u64 {
        self.count
    }
}

impl CalcMean for Variance {
    fn mean(&self) -> Result<f64, ReadoutError> {
        ReadoutError::require(1, self.count)?;
        Ok(self.sum / self.count as f64)
    }
}

impl CalcVariance for Variance {
    fn variance(&self) -> Result<f64, ReadoutError> {
        ReadoutError::require(1, self.count)?;
        Ok(self.m2 / self.count as f64)
    }

    fn sample_variance(&self) -> Result<f64, ReadoutError> {
        ReadoutError::require(2, self.count)?;
        Ok(self.m2 / (self.count - 1) as f64)
    }
}
