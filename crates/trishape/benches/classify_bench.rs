//! Criterion benchmarks for area and classification.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use trishape::plane::rand::{draw_triangle, Bounds2i, ReplayToken};
use trishape::{area, classify, Triangle};

fn sample(n: usize, seed: u64, bounds: Bounds2i) -> Vec<Triangle> {
    (0..n as u64)
        .map(|i| draw_triangle(bounds, ReplayToken::new(seed, i)))
        .collect()
}

fn bench_plane(c: &mut Criterion) {
    let mut group = c.benchmark_group("plane");
    for &extent in &[10i32, 1_000, i32::MAX] {
        let bounds = Bounds2i::new(-extent, extent);
        group.bench_with_input(BenchmarkId::new("classify", extent), &bounds, |b, &bounds| {
            b.iter_batched(
                || sample(256, 11, bounds),
                |tris| {
                    for t in &tris {
                        black_box(classify(black_box(t)));
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("area", extent), &bounds, |b, &bounds| {
            b.iter_batched(
                || sample(256, 12, bounds),
                |tris| black_box(tris.iter().map(area).sum::<f64>()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plane);
criterion_main!(benches);
