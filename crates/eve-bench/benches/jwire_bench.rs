//! Criterion benchmarks for J-wire descriptor derivation and rest-shape sampling.
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use eve_bench::device::{JWire, JWireParams};

fn bench_jwire(c: &mut Criterion) {
    let mut group = c.benchmark_group("jwire");
    group.bench_function("new_reference", |b| {
        b.iter_batched(
            JWireParams::default,
            |params| {
                let _wire = JWire::new(params).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    let wire = JWireParams::default().build().unwrap();
    for &per_mm in &[0.1f64, 1.0, 10.0] {
        group.bench_with_input(BenchmarkId::new("rest_shape", per_mm), &per_mm, |b, &d| {
            b.iter(|| {
                let _pts = wire.rest_shape(d).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_jwire);
criterion_main!(benches);
