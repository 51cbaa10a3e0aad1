use knapsack_dp::solve;
use proptest::prelude::*;

fn brute_force(values: &[f64], weights: &[u32], capacity: u32) -> f64 {
    let n = values.len();
    let mut best = 0.0f64;
    for mask in 0u32..(1u32 << n) {
        let mut weight = 0u64;
        let mut value = 0.0f64;
        for k in 0..n {
            if mask & (1 << k) != 0 {
                weight += u64::from(weights[k]);
                value += values[k];
            }
        }
        if weight <= u64::from(capacity) && value > best {
            best = value;
        }
    }
    best
}

fn items(max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<u32>)> {
    (0usize..=max_len).prop_flat_map(|n| {
        (
            prop::collection::vec(0u32..1_000, n).prop_map(|v| {
                v.into_iter().map(|x| f64::from(x) / 4.0).collect::<Vec<f64>>()
            }),
            prop::collection::vec(1u32..20, n),
        )
    })
}

proptest! {
    #[test]
    fn matches_exhaustive_enumeration((values, weights) in items(12), capacity in 0u32..80) {
        let best = solve(&values, &weights, capacity).unwrap();
        prop_assert_eq!(best, brute_force(&values, &weights, capacity));
    }

    #[test]
    fn zero_capacity_is_zero(
        values in prop::collection::vec(-50.0f64..50.0, 0..10),
        seed in 0u32..20,
    ) {
        let weights: Vec<u32> = (0..values.len() as u32).map(|k| (k + seed) % 5).collect();
        prop_assert_eq!(solve(&values, &weights, 0).unwrap(), 0.0);
    }

    #[test]
    fn empty_items_are_zero(capacity in 0usize..10_000) {
        prop_assert_eq!(solve::<f64, u8, usize>(&[], &[], capacity).unwrap(), 0.0);
    }

    #[test]
    fn non_decreasing_in_capacity((values, weights) in items(10), capacity in 0u32..60) {
        let lower = solve(&values, &weights, capacity).unwrap();
        let upper = solve(&values, &weights, capacity + 1).unwrap();
        prop_assert!(upper >= lower, "capacity {} gave {} then {}", capacity, lower, upper);
    }

    #[test]
    fn deterministic((values, weights) in items(10), capacity in 0u32..60) {
        let a = solve(&values, &weights, capacity).unwrap();
        let b = solve(&values, &weights, capacity).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn input_order_does_not_change_optimum((values, weights) in items(10), capacity in 0u32..60) {
        let forward = solve(&values, &weights, capacity).unwrap();
        let rv: Vec<f64> = values.iter().rev().copied().collect();
        let rw: Vec<u32> = weights.iter().rev().copied().collect();
        let backward = solve(&rv, &rw, capacity).unwrap();
        // Values are quarter-units, so every subset sum is exact.
        prop_assert_eq!(forward, backward);
    }
}
