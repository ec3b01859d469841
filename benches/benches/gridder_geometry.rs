// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use gridder::{BackendKind, GridOptions, Gridder, HitCounting, PolygonMode, accumulate_all};
use gridder_benches::{Rng, corner_grid, random_queries};

const N: usize = 200;
const CELL: f64 = 10.0;

fn gridder(backend: BackendKind) -> Gridder {
    let (tx, ty) = corner_grid(N, CELL);
    let options = GridOptions::new()
        .with_max_distance(CELL)
        .with_backend(backend);
    Gridder::new(tx, ty, options).expect("benchmark grid is valid")
}

fn bench_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_points");
    let (xs, ys) = random_queries(10_000, 0.0, N as f64 * CELL, 1);
    group.throughput(Throughput::Elements(xs.len() as u64));
    for backend in [BackendKind::KdTree, BackendKind::UniformGrid] {
        let g = gridder(backend);
        group.bench_function(format!("{backend:?}"), |b| {
            b.iter(|| black_box(g.grid_points(&xs, &ys).map(|c| c.len())));
        });
    }
    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_lines");
    let extent = N as f64 * CELL;
    let (sxs, sys) = random_queries(2_000, 0.0, extent, 2);
    let (exs, eys) = random_queries(2_000, 0.0, extent, 3);
    let g = gridder(BackendKind::KdTree);
    group.throughput(Throughput::Elements(sxs.len() as u64));
    group.bench_function("rasterize_and_accumulate", |b| {
        b.iter(|| {
            let lines = g.grid_lines(&sxs, &sys, &exs, &eys).unwrap_or_default();
            let mut counts = g.make_counter_grid();
            black_box(accumulate_all(&mut counts, &lines, HitCounting::EveryHit))
        });
    });
    group.finish();
}

fn bench_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_polygons");
    let mut rng = Rng::new(4);
    let extent = N as f64 * CELL;
    let mut xss = Vec::new();
    let mut yss = Vec::new();
    for _ in 0..200 {
        let cx = rng.next_f64() * extent;
        let cy = rng.next_f64() * extent;
        let r = 50.0 + rng.next_f64() * 200.0;
        let (xs, ys): (Vec<f64>, Vec<f64>) = (0..12)
            .map(|k| {
                let a = k as f64 / 12.0 * std::f64::consts::TAU;
                (cx + r * a.cos(), cy + r * a.sin())
            })
            .unzip();
        xss.push(xs);
        yss.push(ys);
    }
    let g = gridder(BackendKind::KdTree);
    for mode in [PolygonMode::Fill, PolygonMode::Perimeter] {
        group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| black_box(g.grid_polygons(&xss, &yss, mode).map(|p| p.len())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_points, bench_lines, bench_polygons);
criterion_main!(benches);
