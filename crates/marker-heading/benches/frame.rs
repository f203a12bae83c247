use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use marker_heading::{process_frame, CornerSet, HeadingParams, MarkerMap};
use nalgebra::Point2;

/// `n` markers scattered on a grid, each rotated by a different heading.
fn synthetic_frame(n: u32) -> MarkerMap {
    (0..n)
        .map(|id| {
            let cx = 40.0 + (id % 16) as f32 * 60.0;
            let cy = 40.0 + (id / 16) as f32 * 60.0;
            let theta = (id as f32 * 37.0).to_radians();
            let (s, c) = theta.sin_cos();
            let corners = [(-20.0, -20.0), (20.0, -20.0), (20.0, 20.0), (-20.0, 20.0)]
                .map(|(x, y): (f32, f32)| Point2::new(cx + x * c - y * s, cy + x * s + y * c));
            (id, CornerSet::new(corners).expect("finite corners"))
        })
        .collect()
}

fn bench_process_frame(c: &mut Criterion) {
    let params = HeadingParams::default();
    let mut group = c.benchmark_group("process_frame");
    for n in [3_u32, 32, 256] {
        let frame = synthetic_frame(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &frame, |b, frame| {
            b.iter(|| process_frame(black_box(frame), &params).expect("valid frame"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_process_frame);
criterion_main!(benches);
