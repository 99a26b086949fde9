//! Minimum and maximum
//!
//! [`Min`] and [`Max`] work for any totally ordered type and report `None`
//! for the empty sample. [`MinD`] and [`MaxD`] are specialised for `f64` and
//! use NaN as the empty marker, which keeps them a single `f64` wide.

use crate::traits::{Accumulator, Monoid};

/// Smallest element seen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min<T>(Option<T>);

impl<T> Min<T> {
    /// The minimum, or `None` if nothing was folded in
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Consume the accumulator and return the minimum
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Min<T> {
    fn default() -> Self {
        Min(None)
    }
}

impl<T: Ord> Monoid for Min<T> {
    fn identity() -> Self {
        Min(None)
    }

    fn merge(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Min(Some(a.min(b))),
            (a, None) => Min(a),
            (None, b) => Min(b),
        }
    }
}

impl<T: Ord> Accumulator<T> for Min<T> {
    fn singleton(item: T) -> Self {
        Min(Some(item))
    }
}

/// Largest element seen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max<T>(Option<T>);

impl<T> Max<T> {
    /// The maximum, or `None` if nothing was folded in
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Consume the accumulator and return the maximum
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Max<T> {
    fn default() -> Self {
        Max(None)
    }
}

impl<T: Ord> Monoid for Max<T> {
    fn identity() -> Self {
        Max(None)
    }

    fn merge(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Max(Some(a.max(b))),
            (a, None) => Max(a),
            (None, b) => Max(b),
        }
    }
}

impl<T: Ord> Accumulator<T> for Max<T> {
    fn singleton(item: T) -> Self {
        Max(Some(item))
    }
}

/// Smallest `f64` seen, ignoring NaN
///
/// NaN marks the empty state. Merging returns the other operand whenever one
/// side is NaN, so NaN elements in the stream are skipped instead of
/// replacing a real minimum. Folding only NaNs leaves the accumulator empty.
/// Between `0.0` and `-0.0` the negative zero wins, whatever the order.
///
/// # Example
///
/// ```
/// use foldstats::statistics::MinD;
/// use foldstats::traits::{Accumulator, Monoid};
///
/// let mut min = MinD::identity();
/// for x in [1.0, f64::NAN, 3.0, -2.0, f64::NAN] {
///     min.push(x);
/// }
/// assert_eq!(min.get(), Some(-2.0));
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinD(f64);

impl MinD {
    /// The minimum, or `None` if no non-NaN element was folded in
    pub fn get(&self) -> Option<f64> {
        if self.0.is_nan() {
            None
        } else {
            Some(self.0)
        }
    }

    /// The raw value, NaN when empty
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Check if no non-NaN element was folded in
    pub fn is_empty(&self) -> bool {
        self.0.is_nan()
    }
}

impl Default for MinD {
    fn default() -> Self {
        MinD(f64::NAN)
    }
}

impl PartialEq for MinD {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Monoid for MinD {
    fn identity() -> Self {
        MinD(f64::NAN)
    }

    fn merge(self, other: Self) -> Self {
        if self.0.is_nan() {
            other
        } else if other.0.is_nan() {
            self
        } else if other.0 < self.0 || (other.0 == self.0 && other.0.is_sign_negative()) {
            other
        } else {
            self
        }
    }
}

impl Accumulator<f64> for MinD {
    fn singleton(item: f64) -> Self {
        MinD(item)
    }
}

/// Largest `f64` seen, ignoring NaN
///
/// Uses the same NaN convention as [`MinD`]. Between `0.0` and `-0.0` the
/// positive zero wins.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxD(f64);

impl MaxD {
    /// The maximum, or `None` if no non-NaN element was folded in
    pub fn get(&self) -> Option<f64> {
        if self.0.is_nan() {
            None
        } else {
            Some(self.0)
        }
    }

    /// The raw value, NaN when empty
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Check if no non-NaN element was folded in
    pub fn is_empty(&self) -> bool {
        self.0.is_nan()
    }
}

impl Default for MaxD {
    fn default() -> Self {
        MaxD(f64::NAN)
    }
}

impl PartialEq for MaxD {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Monoid for MaxD {
    fn identity() -> Self {
        MaxD(f64::NAN)
    }

    fn merge(self, other: Self) -> Self {
        if self.0.is_nan() {
            other
        } else if other.0.is_nan() {
            self
        } else if other.0 > self.0 || (other.0 == self.0 && other.0.is_sign_positive()) {
            other
        } else {
            self
        }
    }
}

impl Accumulator<f64> for MaxD {
    fn singleton(item: f64) -> Self {
        MaxD(item)
    }
}
