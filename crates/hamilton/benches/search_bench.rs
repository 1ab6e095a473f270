//! Criterion benchmarks for the three searches.
//! Sizes: n in {6, 8, 10} on random graphs (p = 0.4), plus complete graphs.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p hamilton

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hamilton::api::{
    builtin_algorithms, draw_graph, random_graph, GraphMatrix, RandomGraphCfg, ReplayToken,
    VertexCount,
};
use rand::{rngs::StdRng, SeedableRng};

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_p040");
    for &n in &[6usize, 8, 10] {
        let cfg = RandomGraphCfg {
            vertex_count: VertexCount::Fixed(n),
            edge_probability: 0.4,
        };
        for algo in builtin_algorithms() {
            group.bench_with_input(BenchmarkId::new(algo.name(), n), &n, |b, _| {
                b.iter_batched(
                    || draw_graph(cfg, ReplayToken { seed: 5, index: 0 }),
                    |g| algo.search(&g),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense");
    for &n in &[8usize, 16, 32] {
        let complete = GraphMatrix::complete(n);
        let mut rng = StdRng::seed_from_u64(n as u64);
        let near_complete = random_graph(n, 0.9, &mut rng);
        for algo in builtin_algorithms().filter(|a| a.name() != "exponential") {
            group.bench_with_input(BenchmarkId::new(algo.name(), format!("K{n}")), &n, |b, _| {
                b.iter(|| algo.search(&complete))
            });
            group.bench_with_input(BenchmarkId::new(algo.name(), format!("p90-{n}")), &n, |b, _| {
                b.iter(|| algo.search(&near_complete))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_random, bench_dense);
criterion_main!(benches);
