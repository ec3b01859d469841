// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend. Buckets points by cell and searches outward in rings.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::NearestBackend;
use crate::types::{Aabb2D, Neighbor, Point2D, distance2, within};

/// Uniform bucket grid backend for f64 coordinates.
///
/// Points are bucketed into a dense `cols × rows` array of cells covering their
/// bounding box. A query starts in the cell under the (clamped) query point and
/// visits rings of increasing Chebyshev radius until no unvisited ring can hold
/// a closer point.
pub struct UniformGrid {
    cell_w: f64,
    cell_h: f64,
    origin_x: f64,
    origin_y: f64,
    cols: usize,
    rows: usize,
    points: Vec<Point2D<f64>>,
    buckets: Vec<Vec<usize>>,
}

impl UniformGrid {
    /// Bucket `points` into cells of the given size.
    ///
    /// Cell sizes must be positive and finite; points must be finite.
    pub fn from_points(points: &[Point2D<f64>], cell_w: f64, cell_h: f64) -> Self {
        assert!(
            cell_w > 0.0 && cell_h > 0.0 && cell_w.is_finite() && cell_h.is_finite(),
            "cell sizes must be positive and finite"
        );
        let bounds = Aabb2D::from_points(points).unwrap_or(Aabb2D::new(0.0, 0.0, 0.0, 0.0));
        let cols = Self::span(bounds.max_x - bounds.min_x, cell_w);
        let rows = Self::span(bounds.max_y - bounds.min_y, cell_h);
        let mut grid = Self {
            cell_w,
            cell_h,
            origin_x: bounds.min_x,
            origin_y: bounds.min_y,
            cols,
            rows,
            points: points.to_vec(),
            buckets: Vec::new(),
        };
        grid.buckets.resize_with(cols * rows, Vec::new);
        for (slot, p) in points.iter().enumerate() {
            let (cx, cy) = grid.key_for(p.x, p.y);
            grid.buckets[cy * cols + cx].push(slot);
        }
        grid
    }

    fn span(extent: f64, cell: f64) -> usize {
        let n = Self::floor_to_i64(extent / cell).saturating_add(1);
        usize::try_from(n.max(1)).unwrap_or(1)
    }

    #[inline]
    fn floor_to_i64(v: f64) -> i64 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Saturating float to int casts are intended; results are clamped."
        )]
        let i = v as i64;
        if (i as f64) > v { i - 1 } else { i }
    }

    /// Cell under `(x, y)`, clamped into the grid.
    fn key_for(&self, x: f64, y: f64) -> (usize, usize) {
        let clamp = |v: i64, n: usize| -> usize {
            usize::try_from(v.max(0)).unwrap_or(usize::MAX).min(n - 1)
        };
        let cx = Self::floor_to_i64((x - self.origin_x) / self.cell_w);
        let cy = Self::floor_to_i64((y - self.origin_y) / self.cell_h);
        (clamp(cx, self.cols), clamp(cy, self.rows))
    }

    fn scan_bucket(
        &self,
        cx: usize,
        cy: usize,
        q: Point2D<f64>,
        max_distance2: Option<f64>,
        best: &mut Option<Neighbor<f64>>,
    ) {
        for &slot in &self.buckets[cy * self.cols + cx] {
            let d2 = distance2(q, self.points[slot]);
            if within(d2, max_distance2) && Neighbor::improves(best.as_ref(), slot, d2) {
                *best = Some(Neighbor {
                    slot,
                    distance2: d2,
                });
            }
        }
    }
}

impl NearestBackend<f64> for UniformGrid {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn nearest(&self, x: f64, y: f64, max_distance2: Option<f64>) -> Option<Neighbor<f64>> {
        if self.points.is_empty() {
            return None;
        }
        let q = Point2D::new(x, y);
        let (qx, qy) = self.key_for(x, y);
        let min_cell = self.cell_w.min(self.cell_h);
        let max_ring = self.cols.max(self.rows);
        let mut best: Option<Neighbor<f64>> = None;
        for ring in 0..=max_ring {
            // Every point in ring `k` is at least `(k - 1)` whole cells away.
            let gap = ring.saturating_sub(1) as f64 * min_cell;
            let bound = gap * gap;
            if !within(bound, max_distance2) {
                break;
            }
            if let Some(b) = best.as_ref()
                && b.distance2 < bound
            {
                break;
            }
            let r0 = qy.saturating_sub(ring);
            let r1 = (qy + ring).min(self.rows - 1);
            let c0 = qx.saturating_sub(ring);
            let c1 = (qx + ring).min(self.cols - 1);
            for cy in r0..=r1 {
                let on_edge_row = cy.abs_diff(qy) == ring;
                for cx in c0..=c1 {
                    if on_edge_row || cx.abs_diff(qx) == ring {
                        self.scan_bucket(cx, cy, q, max_distance2, &mut best);
                    }
                }
            }
        }
        best
    }
}

impl Debug for UniformGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let occupied = self.buckets.iter().filter(|b| !b.is_empty()).count();
        f.debug_struct("UniformGrid")
            .field("cell_w", &self.cell_w)
            .field("cell_h", &self.cell_h)
            .field("origin_x", &self.origin_x)
            .field("origin_y", &self.origin_y)
            .field("cols", &self.cols)
            .field("rows", &self.rows)
            .field("points", &self.points.len())
            .field("occupied_cells", &occupied)
            .finish_non_exhaustive()
    }
}
