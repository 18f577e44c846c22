//! Criterion benchmarks for the four hull strategies.
//! Sizes: n in {10, 100, 1000, 10000} uniform points.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p hull

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull::rand::{draw_points, PointsCfg, ReplayToken};
use hull::Algorithm;

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull_uniform");
    for &n in &[10usize, 100, 1000, 10_000] {
        let cfg = PointsCfg {
            count: n,
            max_coord: 1_000_000,
        };
        for algo in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algo.slug(), n), &n, |b, _| {
                b.iter_batched(
                    || draw_points(cfg, ReplayToken { seed: 43, index: 0 }),
                    |pts| {
                        let _h = algo.hull(&pts);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

/// Points on a circle: every input point is a hull vertex, the worst case for Jarvis March.
fn bench_all_on_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull_circle");
    for &n in &[16usize, 128, 1024] {
        let pts: Vec<hull::Point> = (0..n)
            .map(|k| {
                let th = (k as f64) * std::f64::consts::TAU / (n as f64);
                hull::Point::new(
                    (th.cos() * 1.0e6).round() as i32,
                    (th.sin() * 1.0e6).round() as i32,
                )
            })
            .collect();
        for algo in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algo.slug(), n), &pts, |b, pts| {
                b.iter(|| algo.hull(pts))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_uniform, bench_all_on_hull);
criterion_main!(benches);
