//! Benchmark for scaling and affine transformation.

use criterion::{criterion_group, criterion_main, Criterion};

fn benchmarks(c: &mut Criterion) {
    resample::bench::benchmarks(c);
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
