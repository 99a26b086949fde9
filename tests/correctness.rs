//! Correctness and invariant tests for foldstats
//!
//! These tests verify merge semantics, numerical accuracy and edge cases for
//! every accumulator. They complement the unit tests in each module by
//! focusing on properties that must always hold.
//!
//! Run with: cargo test --test correctness

use foldstats::combinators::Pair;
use foldstats::fold::{merge_all, merge_tree, reduce_chunked, reduce_sample};
use foldstats::statistics::{Count, Max, MaxD, Mean, MeanKBN, Min, MinD, Variance};
use foldstats::summation::{KahanSum, KbnSum};
use foldstats::traits::{
    Accumulator, CalcCount, CalcMean, CalcVariance, Monoid, ReadoutError,
};

const SAMPLE: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

fn rel_err(a: f64, b: f64) -> f64 {
    if a == b {
        0.0
    } else {
        (a - b).abs() / a.abs().max(b.abs())
    }
}

/// Deterministic pseudo-random data spread over several magnitudes
fn noisy_sample(n: usize) -> Vec<f64> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..n)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            1e3 + unit * 250.0 + (i % 7) as f64
        })
        .collect()
}

// ============================================================================
// Mean
// ============================================================================

mod mean {
    use super::*;

    #[test]
    fn matches_sum_over_count() {
        let data = noisy_sample(10_000);
        let mean: Mean = reduce_sample(data.iter().copied());
        let expected = data.iter().sum::<f64>() / data.len() as f64;

        assert_eq!(mean.count(), 10_000);
        assert!(
            rel_err(mean.mean().unwrap(), expected) < 1e-10,
            "mean: {} expected: {}",
            mean.mean().unwrap(),
            expected
        );
    }

    #[test]
    fn small_fixture() {
        let mean: Mean = reduce_sample([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(mean.count(), 4);
        assert!((mean.mean().unwrap() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn merge_is_commutative() {
        let a: Mean = reduce_sample([1.0, 3.0, 5.0, 7.0, 9.0]);
        let b: Mean = reduce_sample([2.0, 4.0, 6.0]);

        let ab = a.merge(b);
        let ba = b.merge(a);

        assert_eq!(ab.count(), ba.count());
        assert!(
            rel_err(ab.value(), ba.value()) < 1e-12,
            "mean: {} vs {}",
            ab.value(),
            ba.value()
        );
    }

    #[test]
    fn grouping_does_not_matter() {
        let data = noisy_sample(1_000);
        let sequential: Mean = reduce_sample(data.iter().copied());

        for chunk_size in [1, 3, 64, 999] {
            let chunked: Mean = reduce_chunked(&data, chunk_size);
            assert!(rel_err(chunked.value(), sequential.value()) < 1e-9);
        }
    }

    #[test]
    fn empty_mean_is_an_error() {
        assert_eq!(
            Mean::identity().mean(),
            Err(ReadoutError::InsufficientSample {
                required: 1,
                found: 0
            })
        );
        assert!(MeanKBN::identity().mean().is_err());
    }

    #[test]
    fn kbn_mean_agrees_with_welford() {
        let data = noisy_sample(5_000);
        let welford: Mean = reduce_sample(data.iter().copied());
        let kbn: MeanKBN = reduce_sample(data.iter().copied());

        assert_eq!(welford.count(), kbn.count());
        assert!(rel_err(welford.mean().unwrap(), kbn.mean().unwrap()) < 1e-10);
    }
}

// ============================================================================
// Variance
// ============================================================================

mod variance {
    use super::*;

    #[test]
    fn fixture_readouts() {
        let stats: Variance = reduce_sample(SAMPLE);

        assert_eq!(stats.count(), 8);
        assert!((stats.mean().unwrap() - 5.0).abs() < 1e-12);
        assert!((stats.variance().unwrap() - 4.0).abs() < 1e-12);
        assert!((stats.sample_variance().unwrap() - 4.571428571).abs() < 1e-9);
        assert!((stats.stddev().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn parallel_halves_match_single_pass() {
        let whole: Variance = reduce_sample(SAMPLE);
        let left: Variance = reduce_sample([2.0, 4.0, 4.0, 4.0]);
        let right: Variance = reduce_sample([5.0, 5.0, 7.0, 9.0]);
        let merged = left.merge(right);

        assert_eq!(merged.count(), whole.count());
        assert!(rel_err(merged.variance().unwrap(), whole.variance().unwrap()) < 1e-9);
        assert!(
            rel_err(
                merged.sample_variance().unwrap(),
                whole.sample_variance().unwrap()
            ) < 1e-9
        );
    }

    #[test]
    fn merge_is_associative() {
        let a: Variance = reduce_sample([1.0, 2.0, 3.0]);
        let b: Variance = reduce_sample([4.0, 5.0, 6.0]);
        let c: Variance = reduce_sample([7.0, 8.0, 9.0]);

        let ab_c = a.merge(b).merge(c);
        let a_bc = a.merge(b.merge(c));

        assert_eq!(ab_c.count(), a_bc.count());
        assert!(
            rel_err(ab_c.variance().unwrap(), a_bc.variance().unwrap()) < 1e-12,
            "variance: {:?} vs {:?}",
            ab_c.variance(),
            a_bc.variance()
        );
    }

    #[test]
    fn merge_equivalent_to_sequential_add() {
        let data_a = [1.5, 3.7, 2.1, 8.9, 4.3];
        let data_b = [6.2, 7.4, 0.5, 9.1, 5.6];

        let sequential: Variance = reduce_sample(data_a.iter().chain(data_b.iter()).copied());
        let merged = reduce_sample::<Variance, _, _>(data_a).merge(reduce_sample(data_b));

        assert_eq!(merged.count(), sequential.count());
        assert!(rel_err(merged.mean().unwrap(), sequential.mean().unwrap()) < 1e-12);
        assert!(rel_err(merged.variance().unwrap(), sequential.variance().unwrap()) < 1e-12);
    }

    #[test]
    fn any_partition_and_tree_shape() {
        let data = noisy_sample(2_000);
        let sequential: Variance = reduce_sample(data.iter().copied());

        // uneven groups, merged both linearly and as a tree, in reverse order
        let bounds = [0, 1, 17, 400, 401, 1_250, 2_000];
        let mut parts: Vec<Variance> = bounds
            .windows(2)
            .map(|w| reduce_sample(data[w[0]..w[1]].iter().copied()))
            .collect();
        parts.reverse();

        let linear = merge_all(parts.iter().copied());
        let tree = merge_tree(&parts);

        for merged in [linear, tree] {
            assert_eq!(merged.count(), 2_000);
            assert!(
                rel_err(
                    merged.sample_variance().unwrap(),
                    sequential.sample_variance().unwrap()
                ) < 1e-9
            );
            assert!(rel_err(merged.mean().unwrap(), sequential.mean().unwrap()) < 1e-9);
        }
    }

    #[test]
    fn unbiased_needs_two_elements() {
        let one = Variance::singleton(3.0);
        assert_eq!(one.variance(), Ok(0.0));
        assert_eq!(
            one.sample_variance(),
            Err(ReadoutError::InsufficientSample {
                required: 2,
                found: 1
            })
        );
        assert!(Variance::identity().stddev().is_err());
    }

    #[test]
    fn large_offset_is_stable() {
        let data: Vec<f64> = (0..1_000).map(|i| 1e9 + (i % 10) as f64).collect();
        let stats: Variance = reduce_sample(data.iter().copied());

        // digits 0..9 repeated: population variance 8.25
        assert!((stats.variance().unwrap() - 8.25).abs() < 1e-6);
    }
}

// ============================================================================
// Extrema
// ============================================================================

mod extrema {
    use super::*;

    #[test]
    fn nan_values_are_ignored() {
        let data = [1.0, f64::NAN, 3.0, -2.0, f64::NAN];
        let min: MinD = reduce_sample(data);
        let max: MaxD = reduce_sample(data);

        assert_eq!(min.get(), Some(-2.0));
        assert_eq!(max.get(), Some(3.0));
    }

    #[test]
    fn only_nan_is_empty() {
        let min: MinD = reduce_sample([f64::NAN, f64::NAN]);
        let max: MaxD = reduce_sample([f64::NAN]);

        assert!(min.value().is_nan());
        assert_eq!(max.get(), None);
    }

    #[test]
    fn ordered_min_max() {
        let words = ["kiwi", "apple", "mango", "fig"];
        let min: Min<&str> = reduce_sample(words);
        let max: Max<&str> = reduce_sample(words);

        assert_eq!(min.into_inner(), Some("apple"));
        assert_eq!(max.into_inner(), Some("mango"));
    }

    #[test]
    fn merge_in_any_order() {
        let parts: Vec<Max<u32>> = [[4, 8], [15, 16], [23, 42]]
            .into_iter()
            .map(|pair| reduce_sample::<Max<u32>, _, _>(pair))
            .collect();

        let forward = merge_all(parts.iter().copied());
        let backward = merge_all(parts.iter().rev().copied());
        assert_eq!(forward.into_inner(), Some(42));
        assert_eq!(forward, backward);
    }
}

// ============================================================================
// Compensated summation
// ============================================================================

mod summation {
    use super::*;

    const SMALL: f64 = 1e-16;
    const N_SMALL: usize = 20_000;

    fn exact() -> f64 {
        1.0 + N_SMALL as f64 * SMALL
    }

    fn sample() -> Vec<f64> {
        let mut data = vec![1.0];
        data.extend(std::iter::repeat(SMALL).take(N_SMALL));
        data
    }

    #[test]
    fn beats_naive_summation() {
        let data = sample();
        let naive: f64 = data.iter().sum();
        let kahan: KahanSum = reduce_sample(data.iter().copied());
        let kbn: KbnSum = reduce_sample(data.iter().copied());

        let naive_err = (naive - exact()).abs();
        let kahan_err = (kahan.sum() - exact()).abs();
        let kbn_err = (kbn.sum() - exact()).abs();

        assert!(naive_err > 1e-12, "naive error: {}", naive_err);
        assert!(kahan_err < 1e-15, "kahan error: {}", kahan_err);
        assert!(kbn_err < 1e-15, "kbn error: {}", kbn_err);
    }

    #[test]
    fn merged_halves_match_single_pass() {
        let data = sample();
        let (left, right) = data.split_at(data.len() / 2);

        let kahan: KahanSum = reduce_sample(data.iter().copied());
        let kahan_merged = reduce_sample::<KahanSum, _, _>(left.iter().copied())
            .merge(reduce_sample(right.iter().copied()));
        assert!((kahan_merged.sum() - kahan.sum()).abs() < 1e-15);

        let kbn: KbnSum = reduce_sample(data.iter().copied());
        let kbn_merged = reduce_sample::<KbnSum, _, _>(left.iter().copied())
            .merge(reduce_sample(right.iter().copied()));
        assert!((kbn_merged.sum() - kbn.sum()).abs() < 1e-15);
    }

    #[test]
    fn kbn_handles_large_terms() {
        let kbn: KbnSum = reduce_sample([1.0, 1e100, 1.0, -1e100]);
        assert_eq!(kbn.sum(), 2.0);
    }

    #[test]
    fn widened_integer_elements() {
        let kbn: KbnSum = reduce_sample([1u32, 2, 3]);
        let kahan: KahanSum = reduce_sample([-1i64, -2, -3]);
        assert_eq!(kbn.sum(), 6.0);
        assert_eq!(kahan.sum(), -6.0);
    }
}

// ============================================================================
// Combinators
// ============================================================================

mod combinators {
    use super::*;

    #[test]
    fn tuple_matches_independent_accumulators() {
        let data: Vec<i64> = vec![2, 4, 4, 4, 5, 5, 7, 9, -3, 11];

        let (count, mean, variance, max): (Count, Mean, Variance, Max<i64>) =
            reduce_sample(data.iter().copied());

        assert_eq!(count, reduce_sample::<Count, _, _>(data.iter().copied()));
        assert_eq!(mean, reduce_sample::<Mean, _, _>(data.iter().copied()));
        assert_eq!(variance, reduce_sample::<Variance, _, _>(data.iter().copied()));
        assert_eq!(max, reduce_sample::<Max<i64>, _, _>(data.iter().copied()));
        assert_eq!(max.into_inner(), Some(11));
    }

    #[test]
    fn tuple_merge_is_componentwise() {
        type Stats = (Count, Mean, Variance, MaxD);

        let left: Stats = reduce_sample(SAMPLE[..3].iter().copied());
        let right: Stats = reduce_sample(SAMPLE[3..].iter().copied());
        let (count, mean, variance, max) = left.merge(right);

        assert_eq!(count.count(), 8);
        assert!((mean.mean().unwrap() - 5.0).abs() < 1e-12);
        assert!((variance.variance().unwrap() - 4.0).abs() < 1e-12);
        assert_eq!(max.get(), Some(9.0));
    }

    #[test]
    fn pair_with_identity() {
        let pair: Pair<MinD, Variance> = reduce_sample(SAMPLE);
        assert_eq!(pair.merge(Pair::identity()), pair);
        assert_eq!(Pair::<MinD, Variance>::identity().merge(pair), pair);
    }
}

// ============================================================================
// Concurrency
// ============================================================================

mod concurrency {
    use super::*;

    #[test]
    fn shards_folded_on_threads() {
        type Stats = (Count, Variance, MinD, MaxD);

        let data = noisy_sample(40_000);
        let sequential: Stats = reduce_sample(data.iter().copied());

        let partials: Vec<Stats> = std::thread::scope(|scope| {
            let handles: Vec<_> = data
                .chunks(7_001)
                .map(|shard| scope.spawn(move || reduce_sample::<Stats, _, _>(shard.iter().copied())))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("worker panicked"))
                .collect()
        });

        let (count, variance, min, max) = merge_tree(&partials);
        assert_eq!(count, sequential.0);
        assert_eq!(min, sequential.2);
        assert_eq!(max, sequential.3);
        assert!(
            rel_err(
                variance.sample_variance().unwrap(),
                sequential.1.sample_variance().unwrap()
            ) < 1e-9
        );
    }
}
