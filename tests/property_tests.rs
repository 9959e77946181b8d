use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tombola::{build_cdf, choose_weighted_n_with_rng, DrawCount, SampleError};

fn is_valid(w: i64) -> bool {
    w >= 1
}

proptest! {
    #[test]
    fn prop_items_and_boundaries_line_up(
        weights in prop::collection::vec(-10i64..50, 0..60)
    ) {
        let cdf = build_cdf(weights.iter().copied().enumerate());

        prop_assert_eq!(cdf.items().len(), cdf.boundaries().len());
        prop_assert!(cdf.boundaries().windows(2).all(|w| w[0] < w[1]));
        if let Some(&first) = cdf.boundaries().first() {
            prop_assert!(first >= 1);
        }
    }

    #[test]
    fn prop_total_is_sum_of_valid_weights(
        weights in prop::collection::vec(-10i64..50, 0..60)
    ) {
        let cdf = build_cdf(weights.iter().copied().enumerate());
        let expected: i64 = weights.iter().copied().filter(|&w| is_valid(w)).sum();

        prop_assert_eq!(cdf.total(), expected as u64);
        prop_assert_eq!(cdf.boundaries().last().copied().unwrap_or(0), cdf.total());
    }

    #[test]
    fn prop_invalid_items_never_survive(
        weights in prop::collection::vec(-10i64..50, 0..60)
    ) {
        let cdf = build_cdf(weights.iter().copied().enumerate());
        let kept: Vec<usize> = weights
            .iter()
            .enumerate()
            .filter(|(_, &w)| is_valid(w))
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(cdf.items(), kept.as_slice());
        for (&i, w) in cdf.iter() {
            prop_assert_eq!(w as i64, weights[i]);
        }
    }

    #[test]
    fn prop_fractional_weights_never_survive(
        weights in prop::collection::vec(-4.0f64..8.0, 0..40)
    ) {
        let cdf = build_cdf(weights.iter().copied().enumerate());
        for &i in cdf.items() {
            let w = weights[i];
            prop_assert!(w >= 1.0 && w.fract() == 0.0, "kept weight {}", w);
        }
    }

    #[test]
    fn prop_build_is_idempotent(
        weights in prop::collection::vec(-10i64..50, 0..60)
    ) {
        let a = build_cdf(weights.iter().copied().enumerate());
        let b = build_cdf(weights.iter().copied().enumerate());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_every_draw_value_selects_its_slice(
        weights in prop::collection::vec(1u64..20, 1..30)
    ) {
        let cdf = build_cdf(weights.iter().copied().enumerate());
        let mut lo = 0u64;
        for (i, &w) in weights.iter().enumerate() {
            for num in lo + 1..=lo + w {
                prop_assert_eq!(cdf.index_of(num), Some(i));
            }
            lo += w;
        }
        prop_assert_eq!(cdf.index_of(0), None);
        prop_assert_eq!(cdf.index_of(lo + 1), None);
    }

    #[test]
    fn prop_batch_size_and_membership(
        weights in prop::collection::vec(0u32..10, 0..30),
        count in 0usize..100,
        seed in any::<u64>(),
    ) {
        let cdf = build_cdf(weights.iter().copied().enumerate());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match cdf.sample_n_with_rng(count, &mut rng) {
            Ok(picks) => {
                prop_assert_eq!(picks.len(), count);
                prop_assert!(picks.iter().all(|&&i| weights[i] >= 1));
            }
            Err(e) => {
                prop_assert_eq!(e, SampleError::EmptyDomain);
                prop_assert!(count > 0 && cdf.total() == 0);
            }
        }
    }

    #[test]
    fn prop_negative_draw_counts_rejected(n in i64::MIN..0) {
        prop_assert_eq!(DrawCount::try_from(n), Err(SampleError::InvalidDrawCount(n)));
    }
}

#[test]
fn all_invalid_candidates_fail_with_empty_domain() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let res = choose_weighted_n_with_rng([("A", -5.0), ("B", 0.25)], 1usize, &mut rng);
    assert_eq!(res, Err(SampleError::EmptyDomain));
}
