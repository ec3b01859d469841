// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gridder_benches::{lattice_centers, random_queries};
use gridder_index::{Index, Point2D};

use rstar::RTree;
use rstar::primitives::GeomWithData;

type Entry = GeomWithData<[f64; 2], usize>;

fn to_rstar_points(v: &[Point2D<f64>]) -> Vec<Entry> {
    v.iter()
        .enumerate()
        .map(|(slot, p)| GeomWithData::new([p.x, p.y], slot))
        .collect()
}

fn bench_nearest_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_external_compare_f64");
    for &n in &[64usize, 256] {
        let points = lattice_centers(n, 10.0);
        let (xs, ys) = random_queries(4096, 0.0, n as f64 * 10.0, 0xC1A5_7E55_9999_ABCD);
        group.throughput(Throughput::Elements(xs.len() as u64));

        group.bench_function(format!("gridder_kdtree_build_query_n{n}"), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let idx = Index::with_kdtree(&points);
                    let hits = xs
                        .iter()
                        .zip(&ys)
                        .filter_map(|(&x, &y)| idx.nearest(x, y, None))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_bulk_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |entries| {
                    let tree = RTree::bulk_load(entries);
                    let hits = xs
                        .iter()
                        .zip(&ys)
                        .filter_map(|(&x, &y)| tree.nearest_neighbor(&[x, y]))
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest_external_compare_f64);
criterion_main!(benches);
