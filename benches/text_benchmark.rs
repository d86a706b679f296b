#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for built-in bitmap text rendering.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pixel_overlay::prelude::*;

fn text_draw_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitmap_text");
    let mut fb = Framebuffer::new(1_024, 256).expect("framebuffer creation should succeed");
    let label = "keypoint 42 (x=118, y=207)";

    for size in [10.0_f32, 20.0, 40.0] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut ctx = Context::new(&mut fb);
                ctx.set_font_size(size);
                ctx.text(4, 200, black_box(label))
            });
        });
    }

    group.finish();
}

fn measure_benchmark(c: &mut Criterion) {
    let mut fb = Framebuffer::new(16, 16).expect("framebuffer creation should succeed");
    let ctx = Context::new(&mut fb);
    let line = "The quick brown fox jumps over the lazy dog".repeat(8);

    c.bench_function("measure_text", |b| {
        b.iter(|| ctx.measure_text(black_box(&line)));
    });
}

criterion_group!(benches, text_draw_benchmark, measure_benchmark);
criterion_main!(benches);
