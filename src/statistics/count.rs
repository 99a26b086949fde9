//! Element counting

use crate::traits::{Accumulator, CalcCount, Monoid};

/// Number of elements seen, regardless of their value
///
/// Accepts elements of any type. The count is a `u64`; overflow behaves like
/// any other `u64` addition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Count(pub u64);

impl Monoid for Count {
    fn identity() -> Self {
        Count(0)
    }

    fn merge(self, other: Self) -> Self {
        Count(self.0 + other.0)
    }
}

impl<T> Accumulator<T> for Count {
    fn update(self, _item: T) -> Self {
        Count(self.0 + 1)
    }
}

impl CalcCount for Count {
    fn count(&self) -> u64 {
        self.0
    }
}
