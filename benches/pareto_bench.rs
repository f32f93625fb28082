//! Criterion benchmarks for u-pareto.
//!
//! Random decimal candidate sets of increasing size; values are drawn
//! from a small range so that a realistic share of candidates is dominated.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use u_pareto::pareto::{ParetoConfig, ParetoFilter};
use u_pareto::step_search::{StepSearchConfig, StepSearchRunner};

fn random_candidates(n: usize, arity: usize, seed: u64) -> Vec<Vec<Decimal>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            (0..arity)
                .map(|_| Decimal::new(rng.random_range(0..10_000), 2))
                .collect()
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_pareto_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("pareto_filter");
    group.sample_size(10);

    let filter = ParetoFilter::new(ParetoConfig::default());
    for (n, arity) in [(100usize, 2usize), (500, 3), (1000, 5)] {
        let candidates = random_candidates(n, arity, 42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_m{}", n, arity), n),
            &candidates,
            |b, cands| {
                b.iter(|| {
                    let result = filter.filter(black_box(cands));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_step_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_search_sphere");
    group.sample_size(10);

    let sphere = |x: &[f64]| -x.iter().map(|v| v * v).sum::<f64>();
    let config = StepSearchConfig::default().with_tolerance(1e-6);
    for &dim in &[2usize, 10, 50] {
        let start = vec![3.7; dim];
        group.bench_with_input(BenchmarkId::from_parameter(dim), &start, |b, s| {
            b.iter(|| {
                let result = StepSearchRunner::run(&sphere, black_box(s), black_box(&config));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pareto_filter, bench_step_search);
criterion_main!(benches);
