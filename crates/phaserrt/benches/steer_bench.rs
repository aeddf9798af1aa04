//! Criterion benchmarks for the steering check and a single extension.
//! Step sizes: {1e-2, 1e-3, 1e-4} over a unit-length segment.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use phaserrt::api::{extend, steer, AccelBounds, FnDynamics, PhasePoint, RrtCfg, Tree};
use rand::{rngs::StdRng, SeedableRng};

fn bench_steer(c: &mut Criterion) {
    let mut group = c.benchmark_group("steer");
    // Speed-dependent bounds so the oracle is not constant-folded away.
    let o = FnDynamics::new(1.0, |s, sd| AccelBounds::new(-2.0 - s, 2.0 + sd * sd));
    let a = PhasePoint::new(0.0, 1.0);
    let b = PhasePoint::new(1.0, 1.5);
    for &step in &[1e-2f64, 1e-3, 1e-4] {
        group.bench_with_input(BenchmarkId::new("feasible_segment", step), &step, |bch, &step| {
            bch.iter(|| steer(a, b, step, &o).unwrap())
        });
    }
    group.finish();
}

fn bench_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("extend");
    let o = FnDynamics::new(1.0, |_s, _sd| AccelBounds::new(-10.0, 10.0));
    for &k_max in &[1usize, 10, 42] {
        let cfg = RrtCfg {
            k_max,
            step: 1e-3,
            ..RrtCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("from_roots", k_max), &k_max, |bch, _| {
            let mut rng = StdRng::seed_from_u64(43);
            bch.iter_batched(
                || Tree::initialize(0.5, 2.0, 42).unwrap(),
                |mut tree| extend(&mut tree, PhasePoint::new(0.5, 1.0), &o, &cfg, &mut rng),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_steer, bench_extend);
criterion_main!(benches);
