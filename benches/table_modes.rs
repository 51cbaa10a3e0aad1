use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_dp::{solve_with, ItemBuffers, SolverConfig, TableMode};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_items(n: usize, capacity: usize) -> ItemBuffers {
    let mut rng = StdRng::seed_from_u64(7);
    let values = (0..n).map(|_| rng.gen_range(0.0..500.0)).collect();
    let weights = (0..n).map(|_| rng.gen_range(1..=capacity / 8 + 1)).collect();
    ItemBuffers::new(values, weights, capacity).unwrap()
}

fn bench_table_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_modes");
    group.sample_size(20);
    for &capacity in &[1_000usize, 10_000, 50_000] {
        let items = random_items(256, capacity);
        for mode in [TableMode::Full, TableMode::Rolling] {
            let config = SolverConfig {
                mode,
                ..SolverConfig::default()
            };
            group.bench_with_input(
                BenchmarkId::new(mode.as_str(), capacity),
                &items,
                |b, items| b.iter(|| criterion::black_box(solve_with(items, &config).unwrap())),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_table_modes);
criterion_main!(benches);
