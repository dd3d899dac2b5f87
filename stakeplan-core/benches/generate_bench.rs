//! Criterion benchmarks for plan generation.
//!
//! One hot path: the single-pass schedule loop, measured across plan
//! lengths. Useful mostly as a regression tripwire for the generator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stakeplan_core::{generate_plan, PlanParams};

fn bench_generate_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_plan");

    for num_trades in [1u32, 10, 50] {
        let params = PlanParams::new(num_trades, 10.0, 100.0).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(num_trades),
            &params,
            |b, params| b.iter(|| generate_plan(black_box(params)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate_plan);
criterion_main!(benches);
