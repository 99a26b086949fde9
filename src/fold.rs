//! Folding whole samples
//!
//! Helpers that drive [`Accumulator::update`] and [`Monoid::merge`] over
//! collections. [`reduce_chunked`] shows the shard-then-merge pattern: every
//! chunk is folded on its own and the partial results are merged along a
//! balanced tree, so the result matches a sequential fold up to rounding.

use crate::traits::{Accumulator, Monoid};

/// Fold a sample into a fresh accumulator
///
/// ```
/// use foldstats::fold::reduce_sample;
/// use foldstats::statistics::Variance;
/// use foldstats::traits::CalcVariance;
///
/// let stats: Variance = reduce_sample([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((stats.variance().unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn reduce_sample<A, T, I>(sample: I) -> A
where
    A: Accumulator<T>,
    I: IntoIterator<Item = T>,
{
    fold_sample(A::identity(), sample)
}

/// Fold a sample into an existing accumulator
pub fn fold_sample<A, T, I>(acc: A, sample: I) -> A
where
    A: Accumulator<T>,
    I: IntoIterator<Item = T>,
{
    sample.into_iter().fold(acc, |acc, item| acc.update(item))
}

/// Merge partial accumulators left to right
pub fn merge_all<A, I>(parts: I) -> A
where
    A: Monoid,
    I: IntoIterator<Item = A>,
{
    parts.into_iter().fold(A::identity(), A::merge)
}

/// Merge partial accumulators pairwise along a balanced tree
///
/// Returns the identity for an empty slice.
pub fn merge_tree<A>(parts: &[A]) -> A
where
    A: Monoid + Clone,
{
    match parts.len() {
        0 => A::identity(),
        1 => parts[0].clone(),
        len => {
            let (left, right) = parts.split_at(len / 2);
            merge_tree(left).merge(merge_tree(right))
        }
    }
}

/// Fold a slice in chunks of at most `chunk_size` and merge the partials
///
/// A `chunk_size` of zero is treated as one.
pub fn reduce_chunked<A, T>(sample: &[T], chunk_size: usize) -> A
where
    A: Accumulator<T>,
    T: Clone,
{
    let chunk_size = chunk_size.max(1);
    if sample.len() <= chunk_size {
        return reduce_sample(sample.iter().cloned());
    }

    // split on a chunk boundary so leaves are exactly the chunks
    let chunks = sample.len().div_ceil(chunk_size);
    let (left, right) = sample.split_at((chunks / 2) * chunk_size);
    reduce_chunked::<A, T>(left, chunk_size).merge(reduce_chunked(right, chunk_size))
}
