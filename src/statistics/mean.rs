//! Running mean

use num_traits::AsPrimitive;

use crate::summation::KbnSum;
use crate::traits::{Accumulator, CalcCount, CalcMean, Monoid, ReadoutError};

/// Running mean using Welford's incremental update
///
/// Each element moves the estimate by `(x - mean) / n`, so large sample
/// totals are never formed and the estimate stays accurate for data far from
/// zero.
///
/// # Example
///
/// ```
/// use foldstats::statistics::Mean;
/// use foldstats::traits::{Accumulator, CalcCount, CalcMean, Monoid};
///
/// let mut mean = Mean::identity();
/// for x in [1.0, 2.0, 3.0, 4.0] {
///     mean.push(x);
/// }
///
/// assert_eq!(mean.count(), 4);
/// assert_eq!(mean.mean(), Ok(2.5));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mean {
    count: u64,
    mean: f64,
}

impl Mean {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
        }
    }

    /// The stored estimate, `0.0` for the empty sample
    pub fn value(&self) -> f64 {
        self.mean
    }
}

impl Monoid for Mean {
    fn identity() -> Self {
        Self::new()
    }

    fn merge(self, other: Self) -> Self {
        if other.count == 0 {
            return self;
        }
        if self.count == 0 {
            return other;
        }

        let n = self.count as f64;
        let k = other.count as f64;
        Self {
            count: self.count + other.count,
            mean: (self.mean * n + other.mean * k) / (n + k),
        }
    }
}

impl<T: AsPrimitive<f64>> Accumulator<T> for Mean {
    fn update(self, item: T) -> Self {
        let count = self.count + 1;
        Self {
            count,
            mean: self.mean + (item.as_() - self.mean) / count as f64,
        }
    }
}

impl CalcCount for Mean {
    fn count(&self) -> u64 {
        self.count
    }
}

impl CalcMean for Mean {
    fn mean(&self) -> Result<f64, ReadoutError> {
        ReadoutError::require(1, self.count)?;
        Ok(self.mean)
    }
}

/// Mean computed as a compensated sum divided by the count
///
/// Prefer this over [`Mean`] when the sample mixes magnitudes so widely that
/// the rounding of each Welford step matters more than the size of the
/// running total.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeanKBN {
    count: u64,
    sum: KbnSum,
}

impl MeanKBN {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: KbnSum::new(),
        }
    }

    /// The compensated sum of all elements
    pub fn sum(&self) -> f64 {
        self.sum.sum()
    }
}

impl Monoid for MeanKBN {
    fn identity() -> Self {
        Self::new()
    }

    fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            sum: self.sum.merge(other.sum),
        }
    }
}

impl<T: AsPrimitive<f64>> Accumulator<T> for MeanKBN {
    fn update(self, item: T) -> Self {
        Self {
            count: self.count + 1,
            sum: self.sum.update(item),
        }
    }
}

impl CalcCount for MeanKBN {
    fn count(&self) -> u64 {
        self.count
    }
}

impl CalcMean for MeanKBN {
    fn mean(&self) -> Result<f64, ReadoutError> {
        ReadoutError::require(1, self.count)?;
        Ok(self.sum.sum() / self.count as f64)
    }
}
