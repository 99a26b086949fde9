//! Running several accumulators in one pass
//!
//! A product of accumulators is itself an accumulator: each component sees
//! the same element, and merging merges component by component. [`Pair`]
//! names the two-component case; plain tuples of two to four accumulators
//! work the same way.
//!
//! # Example
//!
//! ```
//! use foldstats::statistics::{Count, Max, Mean, Variance};
//! use foldstats::traits::{Accumulator, CalcCount, CalcMean, CalcVariance, Monoid};
//!
//! let mut acc = <(Count, Mean, Variance, Max<i64>)>::identity();
//! for x in [2i64, 4, 4, 4, 5, 5, 7, 9] {
//!     acc.push(x);
//! }
//!
//! let (count, mean, variance, max) = acc;
//! assert_eq!(count.count(), 8);
//! assert!((mean.mean().unwrap() - 5.0).abs() < 1e-12);
//! assert!((variance.variance().unwrap() - 4.0).abs() < 1e-12);
//! assert_eq!(max.into_inner(), Some(9));
//! ```

use crate::traits::{Accumulator, Monoid};

/// Two accumulators fed from the same stream
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B>(pub A, pub B);

impl<A, B> Pair<A, B> {
    /// Split into the two components
    pub fn into_parts(self) -> (A, B) {
        (self.0, self.1)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((a, b): (A, B)) -> Self {
        Pair(a, b)
    }
}

impl<A: Monoid, B: Monoid> Monoid for Pair<A, B> {
    fn identity() -> Self {
        Pair(A::identity(), B::identity())
    }

    fn merge(self, other: Self) -> Self {
        Pair(self.0.merge(other.0), self.1.merge(other.1))
    }
}

impl<T, A, B> Accumulator<T> for Pair<A, B>
where
    T: Clone,
    A: Accumulator<T>,
    B: Accumulator<T>,
{
    fn update(self, item: T) -> Self {
        Pair(self.0.update(item.clone()), self.1.update(item))
    }

    fn singleton(item: T) -> Self {
        Pair(A::singleton(item.clone()), B::singleton(item))
    }
}

macro_rules! tuple_accumulator {
    ($($name:ident . $idx:tt),+ ; $last:ident . $last_idx:tt) => {
        impl<$($name: Monoid,)+ $last: Monoid> Monoid for ($($name,)+ $last) {
            fn identity() -> Self {
                ($($name::identity(),)+ $last::identity())
            }

            fn merge(self, other: Self) -> Self {
                ($(self.$idx.merge(other.$idx),)+ self.$last_idx.merge(other.$last_idx))
            }
        }

        impl<T, $($name,)+ $last> Accumulator<T> for ($($name,)+ $last)
        where
            T: Clone,
            $($name: Accumulator<T>,)+
            $last: Accumulator<T>,
        {
            fn update(self, item: T) -> Self {
                ($(self.$idx.update(item.clone()),)+ self.$last_idx.update(item))
            }

            fn singleton(item: T) -> Self {
                ($($name::singleton(item.clone()),)+ $last::singleton(item))
            }
        }
    };
}

tuple_accumulator!(A.0; B.1);
tuple_accumulator!(A.0, B.1; C.2);
tuple_accumulator!(A.0, B.1, C.2; D.3);
