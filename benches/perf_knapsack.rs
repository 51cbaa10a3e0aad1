use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use knapsack_dp::{solve_with, ItemBuffers, SolverConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_items(rng: &mut StdRng, n: usize, capacity: usize) -> ItemBuffers {
    let values = (0..n).map(|_| rng.gen_range(0.0..500.0)).collect();
    let weights = (0..n).map(|_| rng.gen_range(1..=capacity / 4 + 1)).collect();
    ItemBuffers::new(values, weights, capacity).unwrap()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_knapsack_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_full_table");
    for &(n, capacity) in &[(100usize, 1_000usize), (500, 5_000), (1_000, 10_000)] {
        group.bench_function(format!("n{n}_w{capacity}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_items(&mut rng, n, capacity)
                },
                |items| {
                    let before = rss_kib();
                    let best = solve_with(&items, &SolverConfig::default()).unwrap();
                    let after = rss_kib();
                    criterion::black_box(best);
                    eprintln!(
                        "RSS KiB delta (n={n}, W={capacity}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack_perf);
criterion_main!(benches);
