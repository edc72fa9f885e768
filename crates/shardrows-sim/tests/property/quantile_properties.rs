use proptest::prelude::*;
use shardrows_core::types::{RoundingPolicy, SimulationConfig};
use shardrows_sim::{order_statistic_rank, select_quantile, DepthEvaluator, FixedTrials};

proptest! {
    #[test]
    fn rank_within_bounds(accuracy in 0.001f64..=100.0, n in 1usize..50_000) {
        let k = order_statistic_rank(accuracy, n);
        prop_assert!(k >= 1 && k <= n);
    }

    #[test]
    fn rank_covers_requested_share(accuracy in 0.001f64..=100.0, n in 1usize..50_000) {
        let k = order_statistic_rank(accuracy, n);
        // at least accuracy% of values sit at or below the k-th
        let wanted = accuracy * n as f64;
        prop_assert!(k as f64 * 100.0 >= wanted * (1.0 - 1e-10));
        // and k is the smallest such rank
        if k > 1 {
            prop_assert!(((k - 1) as f64) * 100.0 < wanted * (1.0 + 1e-10));
        }
    }

    #[test]
    fn quantile_is_monotonic_in_confidence(
        values in prop::collection::vec(0.0f64..=1.0, 1..200),
        a in 0.01f64..=100.0,
        b in 0.01f64..=100.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let q_lo = select_quantile(values.clone(), lo).unwrap();
        let q_hi = select_quantile(values, hi).unwrap();
        prop_assert!(q_lo <= q_hi);
    }

    #[test]
    fn quantile_is_a_sample_member(
        values in prop::collection::vec(0.0f64..=1.0, 1..200),
        accuracy in 0.01f64..=100.0,
    ) {
        let q = select_quantile(values.clone(), accuracy).unwrap();
        prop_assert!(values.contains(&q));
    }

    #[test]
    fn rounding_never_lowers_the_factor(
        occupancies in prop::collection::vec(1u64..=500, 1..100),
        accuracy in 0.01f64..=100.0,
    ) {
        let depth = 500;
        let trials = occupancies.len() as u32;
        let exact_cfg = SimulationConfig::new(4, depth, 1, trials, accuracy)
            .with_rounding(RoundingPolicy::Exact);
        let rounded_cfg = exact_cfg.clone().with_rounding(RoundingPolicy::WholePercent);

        let exact = DepthEvaluator::with_source(&exact_cfg, FixedTrials::new(occupancies.clone()))
            .unwrap()
            .evaluate(depth)
            .unwrap();
        let rounded = DepthEvaluator::with_source(&rounded_cfg, FixedTrials::new(occupancies))
            .unwrap()
            .evaluate(depth)
            .unwrap();

        prop_assert!(rounded >= exact);
        prop_assert!(rounded - exact < 0.01 + 1e-12);
    }
}
