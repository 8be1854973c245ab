//! Benchmarks for scaling and transformation.
//! Run with: cargo bench -p resample --features bench --bench scale -- "<pattern>"
//!
//! Examples:
//!   cargo bench -p resample --features bench --bench scale -- "downscale"
//!   cargo bench -p resample --features bench --bench scale -- "reusable"
//!   cargo bench -p resample --features bench --bench scale -- "transform"

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};

use crate::common::Rect;
use crate::image::{ImageView, Rgba64, Rgba64Image};
use crate::ops::{Affine, Scaler, Transformer, BILINEAR, CATMULL_ROM};

/// Image with deterministic pattern data.
fn create_test_image(width: u32, height: u32) -> Rgba64Image {
    let bounds = Rect::new(0, 0, width as i32, height as i32);
    let pixels = bounds
        .points()
        .map(|p| {
            let v = ((p.x * 31 + p.y * 17) % 256) as u16 * 257;
            Rgba64::gray(v)
        })
        .collect();
    Rgba64Image::from_pixels(bounds, pixels)
}

fn bench_scale(c: &mut Criterion, name: &str, src: &Rgba64Image, dw: u32, dh: u32) {
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Elements(dw as u64 * dh as u64));
    let size = format!("{}x{}->{}x{}", src.width(), src.height(), dw, dh);
    let dr = Rect::new(0, 0, dw as i32, dh as i32);

    let mut dst = Rgba64Image::new(dr);
    group.bench_function(BenchmarkId::new("linear_one_shot", &size), |b| {
        b.iter(|| {
            BILINEAR
                .scale(&mut dst, dr, black_box(src), src.bounds(), None)
                .unwrap()
        })
    });

    group.bench_function(BenchmarkId::new("catmull_rom_one_shot", &size), |b| {
        b.iter(|| {
            CATMULL_ROM
                .scale(&mut dst, dr, black_box(src), src.bounds(), None)
                .unwrap()
        })
    });

    let scaler = CATMULL_ROM
        .new_scaler(dw, dh, src.width(), src.height())
        .unwrap();
    group.bench_function(BenchmarkId::new("catmull_rom_reusable", &size), |b| {
        b.iter(|| {
            scaler
                .scale(&mut dst, dr, black_box(src), src.bounds(), None)
                .unwrap()
        })
    });

    group.finish();
}

fn bench_transform(c: &mut Criterion, src: &Rgba64Image) {
    let mut group = c.benchmark_group("transform");
    let s2d = Affine::translation(src.width() as f64 * 0.5, 0.0) * Affine::rotation(0.5);
    let mut dst = Rgba64Image::new(s2d.bounding_box(&src.bounds()));
    group.throughput(Throughput::Elements(dst.pixels().len() as u64));

    group.bench_function("linear_rotate", |b| {
        b.iter(|| {
            BILINEAR
                .transform(&mut dst, &s2d, black_box(src), src.bounds(), None)
                .unwrap()
        })
    });

    group.bench_function("catmull_rom_rotate", |b| {
        b.iter(|| {
            CATMULL_ROM
                .transform(&mut dst, &s2d, black_box(src), src.bounds(), None)
                .unwrap()
        })
    });

    group.finish();
}

pub fn benchmarks(c: &mut Criterion) {
    common::setup_logging("warn");

    let large = create_test_image(1024, 1024);
    let small = create_test_image(256, 256);

    bench_scale(c, "downscale", &large, 256, 256);
    bench_scale(c, "upscale", &small, 1024, 1024);
    bench_transform(c, &small);
}
