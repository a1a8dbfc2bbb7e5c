//! Criterion benchmarks for polygon rasterization.
//! Vertex counts straddle the inline-scratch thresholds: {4, 15, 16, 63, 64, 256}.
//! Results land under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hector_math::iterators::{iterate_polygon, iterate_polygon_in_grid, IndexRange};
use hector_math::types::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Star-shaped polygon with `n` vertices around (100, 100), radii in [40, 80).
fn star(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / n as f64;
            let r = rng.gen_range(40.0..80.0);
            Point::new(100.0 + r * a.cos(), 100.0 + r * a.sin())
        })
        .collect()
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[4usize, 15, 16, 63, 64, 256] {
        let poly = star(n, 7);
        group.bench_with_input(BenchmarkId::new("count_cells", n), &poly, |b, poly| {
            b.iter(|| {
                let mut count = 0u64;
                iterate_polygon_in_grid(black_box(poly), 200, 200, |_, _| count += 1);
                count
            })
        });
        group.bench_with_input(BenchmarkId::new("clipped_quarter", n), &poly, |b, poly| {
            let rows = IndexRange::new(100, 200);
            let cols = IndexRange::new(100, 200);
            b.iter(|| {
                let mut sum = 0i64;
                iterate_polygon(black_box(poly), rows, cols, |x, y| sum += x ^ y);
                sum
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon);
criterion_main!(benches);
