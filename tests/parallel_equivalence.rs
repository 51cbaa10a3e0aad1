#![cfg(feature = "parallel")]

use knapsack_dp::{batch::solve_batch, solve_with, ItemBuffers, SolverConfig, TableMode};
use proptest::prelude::*;

fn instances() -> impl Strategy<Value = Vec<ItemBuffers>> {
    prop::collection::vec(
        (0usize..12, 0usize..50).prop_flat_map(|(n, capacity)| {
            (
                prop::collection::vec(0.0f64..100.0, n),
                prop::collection::vec(0usize..20, n),
            )
                .prop_map(move |(values, weights)| {
                    ItemBuffers::new(values, weights, capacity).unwrap()
                })
        }),
        0..24,
    )
}

proptest! {
    #[test]
    fn batch_matches_sequential(instances in instances()) {
        let config = SolverConfig::default();
        let sequential: Vec<_> = instances.iter().map(|items| solve_with(items, &config)).collect();
        prop_assert_eq!(solve_batch(&instances, &config), sequential);
    }

    #[test]
    fn batch_rolling_matches_full(instances in instances()) {
        let full = solve_batch(&instances, &SolverConfig::default());
        let rolling = solve_batch(
            &instances,
            &SolverConfig {
                mode: TableMode::Rolling,
                ..SolverConfig::default()
            },
        );
        prop_assert_eq!(full, rolling);
    }
}
