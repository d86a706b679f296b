#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for Bresenham line and path rasterization.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixel_overlay::prelude::*;
use pixel_overlay::render::LinePixels;

fn line_iterator_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_pixels");

    for length in [16, 256, 4_096] {
        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            b.iter(|| {
                LinePixels::new(0, 0, black_box(length), black_box(length / 3))
                    .map(|p| i64::from(p.x + p.y))
                    .sum::<i64>()
            });
        });
    }

    group.finish();
}

fn line_draw_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_draw");
    let mut fb = Framebuffer::new(800, 600).expect("framebuffer creation should succeed");

    // Shallow, steep and partially off-surface
    let cases = [
        ("shallow", (0, 10, 799, 200)),
        ("steep", (10, 0, 200, 599)),
        ("clipped", (-400, -300, 1_200, 900)),
    ];

    for (name, (x0, y0, x1, y1)) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut ctx = Context::new(&mut fb);
                ctx.line(black_box(x0), black_box(y0), black_box(x1), black_box(y1));
            });
        });
    }

    group.finish();
}

fn path_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");
    let mut fb = Framebuffer::new(800, 600).expect("framebuffer creation should succeed");

    for vertices in [10, 100, 1_000] {
        let points: Vec<Point> = (0..vertices)
            .map(|i| {
                let t = i as f64 / f64::from(vertices) * std::f64::consts::TAU;
                Point::new(400 + (t.cos() * 250.0) as i32, 300 + (t.sin() * 250.0) as i32)
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(vertices), &points, |b, points| {
            b.iter(|| {
                let mut ctx = Context::new(&mut fb);
                ctx.path(black_box(points));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, line_iterator_benchmark, line_draw_benchmark, path_benchmark);
criterion_main!(benches);
