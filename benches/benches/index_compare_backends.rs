// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gridder_benches::{lattice_centers, random_queries};
use gridder_index::{Index, Point2D};

const QUERIES: usize = 4096;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[64usize, 256] {
        let points = lattice_centers(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("kdtree_n{n}"), |b| {
            b.iter(|| black_box(Index::with_kdtree(&points).len()));
        });
        group.bench_function(format!("grid_n{n}"), |b| {
            b.iter(|| black_box(Index::<f64>::with_uniform_grid(&points, 10.0, 10.0).len()));
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    for &n in &[32usize, 128, 256] {
        let points = lattice_centers(n, 10.0);
        let extent = n as f64 * 10.0;
        let (xs, ys) = random_queries(QUERIES, -20.0, extent + 20.0, 0xCAFE_F00D_DEAD_BEEF);
        let queries: Vec<_> = xs.iter().zip(&ys).map(|(&x, &y)| Point2D::new(x, y)).collect();
        group.throughput(Throughput::Elements(QUERIES as u64));

        // Linear scans get slow fast; keep them to the small grid.
        if n <= 32 {
            let flat = Index::new(&points);
            group.bench_function(format!("flatvec_n{n}"), |b| {
                b.iter(|| black_box(flat.nearest_batch(&queries, Some(10.0)).len()));
            });
        }
        let kd = Index::with_kdtree(&points);
        group.bench_function(format!("kdtree_n{n}"), |b| {
            b.iter(|| black_box(kd.nearest_batch(&queries, Some(10.0)).len()));
        });
        let grid = Index::<f64>::with_uniform_grid(&points, 10.0, 10.0);
        group.bench_function(format!("grid_n{n}"), |b| {
            b.iter(|| black_box(grid.nearest_batch(&queries, Some(10.0)).len()));
        });
    }
    group.finish();
}

fn bench_nearest_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_f32");
    let n = 128;
    let points: Vec<Point2D<f32>> = lattice_centers(n, 10.0)
        .iter()
        .map(|p| Point2D::new(p.x as f32, p.y as f32))
        .collect();
    let (xs, ys) = random_queries(QUERIES, 0.0, 1280.0, 0xFACE_FEED_CAFE_BABE);
    let queries: Vec<_> = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| Point2D::new(x as f32, y as f32))
        .collect();
    group.throughput(Throughput::Elements(QUERIES as u64));
    group.bench_function("kdtree_build_query", |b| {
        b.iter_batched(
            || points.clone(),
            |points| {
                let idx = Index::with_kdtree(&points);
                black_box(idx.nearest_batch(&queries, None).len())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_far_misses(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_misses");
    let points = lattice_centers(128, 10.0);
    // Everything lies well outside the grid, so the cutoff rejects every query.
    let (xs, ys) = random_queries(QUERIES, 5_000.0, 9_000.0, 0xBADC_F00D_1234_5678);
    let queries: Vec<_> = xs.iter().zip(&ys).map(|(&x, &y)| Point2D::new(x, y)).collect();
    let kd = Index::with_kdtree(&points);
    let grid = Index::<f64>::with_uniform_grid(&points, 10.0, 10.0);
    group.bench_function("kdtree", |b| {
        b.iter(|| black_box(kd.nearest_batch(&queries, Some(5.0)).len()));
    });
    group.bench_function("grid", |b| {
        b.iter(|| black_box(grid.nearest_batch(&queries, Some(5.0)).len()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_nearest,
    bench_nearest_f32,
    bench_far_misses,
);
criterion_main!(benches);
