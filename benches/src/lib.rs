// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared inputs for the gridder benchmarks.

use gridder_index::Point2D;
use ndarray::Array2;

/// Corner coordinates of an `n` by `n` grid with square cells of size `cell`.
pub fn corner_grid(n: usize, cell: f64) -> (Array2<f64>, Array2<f64>) {
    let tx = Array2::from_shape_fn((n, n), |(_, j)| j as f64 * cell);
    let ty = Array2::from_shape_fn((n, n), |(i, _)| i as f64 * cell);
    (tx, ty)
}

/// Row-major cell centers of the grid built by [`corner_grid`].
pub fn lattice_centers(n: usize, cell: f64) -> Vec<Point2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point2D::new(
                x as f64 * cell + cell / 2.0,
                y as f64 * cell + cell / 2.0,
            ));
        }
    }
    out
}

/// Xorshift generator so runs are reproducible without a rand dependency.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seeded generator.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// `count` query points spread over `[lo, hi)` on both axes.
pub fn random_queries(count: usize, lo: f64, hi: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            (
                lo + rng.next_f64() * (hi - lo),
                lo + rng.next_f64() * (hi - lo),
            )
        })
        .unzip()
}
