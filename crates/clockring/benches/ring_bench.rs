//! Criterion benchmarks for the clockwise ring sorter.
//! Focus sizes: n in {3, 16, 128, 1024, 8192}.
//! Results: by default under target/criterion.

use clockring::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;

fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    let cfg = |n| RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    for &n in &[3usize, 16, 128, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("sort_clockwise", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let local = draw_points_radial(cfg(n), ReplayToken::new(43, n as u64));
                    translate(&local, Vector2::new(500_000.0, 9_800_000.0))
                },
                |pts| {
                    let _ring = sort_clockwise(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("sort_clockwise_xy", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let pts = draw_points_radial(cfg(n), ReplayToken::new(44, n as u64));
                    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
                    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
                    (xs, ys)
                },
                |(xs, ys)| {
                    let _ring = sort_clockwise_xy(&xs, &ys).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ring);
criterion_main!(benches);
