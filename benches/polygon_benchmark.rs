#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for even-odd polygon membership and fill.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pixel_overlay::prelude::*;
use pixel_overlay::render::is_in_polygon;

fn regular_polygon(vertices: u32, radius: f64) -> Vec<Point> {
    (0..vertices)
        .map(|i| {
            let t = f64::from(i) / f64::from(vertices) * std::f64::consts::TAU;
            Point::new(
                256 + (t.cos() * radius).round() as i32,
                256 + (t.sin() * radius).round() as i32,
            )
        })
        .collect()
}

fn membership_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_in_polygon");

    for vertices in [3, 16, 128] {
        let points = regular_polygon(vertices, 200.0);
        group.bench_with_input(BenchmarkId::from_parameter(vertices), &points, |b, points| {
            b.iter(|| is_in_polygon(black_box(250), black_box(260), points));
        });
    }

    group.finish();
}

fn fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_fill");
    let mut fb = Framebuffer::new(512, 512).expect("framebuffer creation should succeed");

    for radius in [16.0, 64.0, 240.0] {
        let points = regular_polygon(12, radius);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("r_{radius}")),
            &points,
            |b, points| {
                b.iter(|| {
                    let mut ctx = Context::new(&mut fb);
                    ctx.set_fill(Rgba::YELLOW);
                    ctx.polygon(black_box(points));
                });
            },
        );
    }

    group.finish();
}

fn duplicate_vertices_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_dedup");
    let mut fb = Framebuffer::new(512, 512).expect("framebuffer creation should succeed");

    // Each vertex repeated four times, as produced by coarse contour tracing
    let points: Vec<Point> = regular_polygon(64, 120.0)
        .into_iter()
        .flat_map(|p| [p; 4])
        .collect();

    group.bench_function("repeated_x4", |b| {
        b.iter(|| {
            let mut ctx = Context::new(&mut fb);
            ctx.polygon(black_box(&points));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    membership_benchmark,
    fill_benchmark,
    duplicate_vertices_benchmark
);
criterion_main!(benches);
