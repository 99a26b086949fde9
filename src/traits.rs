//! Core traits for mergeable accumulators
//!
//! Every accumulator is a [`Monoid`]: it has an identity value standing for the
//! empty sample and a `merge` that combines two partial summaries as if their
//! samples had been concatenated. [`Accumulator`] adds the single-element fold.
//! The `Calc*` traits expose typed readouts without naming the concrete
//! accumulator that produced them.

use crate::math;

/// Error returned by a readout that is undefined for the current sample size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadoutError {
    /// The sample is too small for this estimator
    InsufficientSample {
        required: u64,
        found: u64,
    },
}

impl ReadoutError {
    pub(crate) fn require(required: u64, found: u64) -> Result<(), ReadoutError> {
        if found < required {
            Err(ReadoutError::InsufficientSample { required, found })
        } else {
            Ok(())
        }
    }
}

impl core::fmt::Display for ReadoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadoutError::InsufficientSample { required, found } => {
                write!(
                    f,
                    "insufficient sample: need at least {} elements, found {}",
                    required, found
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadoutError {}

/// A value with an associative, commutative merge and an identity element
///
/// Laws (floating-point equality is approximate):
///
/// - `a.merge(b) ≈ b.merge(a)`
/// - `a.merge(b).merge(c) ≈ a.merge(b.merge(c))`
/// - `Self::identity().merge(a) ≈ a ≈ a.merge(Self::identity())`
pub trait Monoid: Sized {
    /// The summary of the empty sample
    fn identity() -> Self;

    /// Combine two summaries of disjoint sub-samples
    fn merge(self, other: Self) -> Self;

    /// Merge `other` into `self`, overwriting it
    fn merge_in(&mut self, other: Self) {
        let this = core::mem::replace(self, Self::identity());
        *self = this.merge(other);
    }
}

/// A [`Monoid`] that can absorb elements of type `T` one at a time
///
/// Both `update` and `singleton` have default implementations written in
/// terms of each other, so an implementation must override at least one of
/// them. Overriding neither recurses forever.
///
/// Whichever one is primitive, the pair must satisfy
/// `Self::identity().update(x) ≈ Self::singleton(x)`, and merging two
/// singletons must match folding both elements in sequence.
pub trait Accumulator<T>: Monoid {
    /// Fold one element into the accumulator
    fn update(self, item: T) -> Self {
        self.merge(Self::singleton(item))
    }

    /// Build the accumulator for a one-element sample
    fn singleton(item: T) -> Self {
        Self::identity().update(item)
    }

    /// Fold one element into `self` in place
    fn push(&mut self, item: T) {
        let this = core::mem::replace(self, Self::identity());
        *self = this.update(item);
    }
}

/// Accumulators that know how many elements they have seen
pub trait CalcCount {
    /// Number of elements folded in
    fn count(&self) -> u64;

    /// Check if no element has been folded in
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Accumulators that can report the sample mean
pub trait CalcMean {
    /// Arithmetic mean, undefined for the empty sample
    fn mean(&self) -> Result<f64, ReadoutError>;
}

/// Accumulators that can report the sample variance
pub trait CalcVariance {
    /// Population (biased, maximum-likelihood) variance: divides by `n`
    ///
    /// Undefined for the empty sample.
    fn variance(&self) -> Result<f64, ReadoutError>;

    /// Sample (unbiased) variance with Bessel's correction: divides by `n - 1`
    ///
    /// Undefined when fewer than two elements have been seen.
    fn sample_variance(&self) -> Result<f64, ReadoutError>;

    /// Population standard deviation
    fn stddev(&self) -> Result<f64, ReadoutError> {
        self.variance().map(math::sqrt)
    }

    /// Sample standard deviation
    fn sample_stddev(&self) -> Result<f64, ReadoutError> {
        self.sample_variance().map(math::sqrt)
    }
}
