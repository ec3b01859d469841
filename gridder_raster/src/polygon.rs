// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon fill and perimeter over integer cells.
//!
//! Polygons are given as ordered vertex rings and are implicitly closed: the
//! last vertex connects back to the first. An explicit closing vertex equal to
//! the first is accepted and adds no edge. A ring with fewer than three
//! distinct vertices is degenerate and rasterizes to nothing; a ring whose
//! vertices are collinear still rasterizes to its traced outline.

use alloc::vec;
use alloc::vec::Vec;

use crate::line::trace_line;
use crate::types::{CellCoord, signed};

/// Whether the ring has fewer than three distinct vertices.
///
/// Repeated vertices are common after snapping (several inputs landing in the
/// same cell), so distinctness is counted rather than raw length.
pub fn is_degenerate(vertices: &[CellCoord]) -> bool {
    let mut distinct: Vec<CellCoord> = vertices.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    distinct.len() < 3
}

/// Trace the outline of the polygon.
///
/// Each edge, including the closing edge from the last vertex to the first, is
/// traced with [`trace_line`]. The closing edge is skipped when the ring is
/// already explicitly closed. Cells shared by adjacent edges appear once per
/// edge; the result is not de-duplicated.
pub fn trace_perimeter(vertices: &[CellCoord]) -> Vec<CellCoord> {
    if is_degenerate(vertices) {
        return Vec::new();
    }
    let ring = match vertices.split_last() {
        Some((last, rest)) if Some(last) == vertices.first() => rest,
        _ => vertices,
    };
    let n = ring.len();
    let mut out = Vec::new();
    for i in 0..n {
        out.extend(trace_line(ring[i], ring[(i + 1) % n]));
    }
    out
}

/// Fill the polygon.
///
/// Returns every cell whose center is inside the ring (even-odd rule) or on
/// its traced outline, in row-major order over the ring's bounding box. Each
/// cell appears at most once. The outline is always part of the fill, so the
/// result is a superset of [`trace_perimeter`]'s cells.
///
/// Outline cells come from Bresenham steps, so along a sloped edge the fill
/// can include a cell whose center lies just outside the ring. A collinear
/// ring encloses no centers and fills to its outline alone.
pub fn fill_polygon(vertices: &[CellCoord]) -> Vec<CellCoord> {
    if is_degenerate(vertices) {
        return Vec::new();
    }
    let min_row = vertices.iter().map(|v| v.row).min().unwrap_or(0);
    let max_row = vertices.iter().map(|v| v.row).max().unwrap_or(0);
    let min_col = vertices.iter().map(|v| v.col).min().unwrap_or(0);
    let max_col = vertices.iter().map(|v| v.col).max().unwrap_or(0);
    let width = max_col - min_col + 1;
    let height = max_row - min_row + 1;

    let mut outline = vec![false; width * height];
    for cell in trace_perimeter(vertices) {
        outline[(cell.row - min_row) * width + (cell.col - min_col)] = true;
    }

    let ring: Vec<(i64, i64)> = vertices
        .iter()
        .map(|v| (signed(v.col), signed(v.row)))
        .collect();
    let mut out = Vec::new();
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            if outline[(row - min_row) * width + (col - min_col)]
                || contains(&ring, signed(col), signed(row))
            {
                out.push(CellCoord::new(row, col));
            }
        }
    }
    out
}

/// Even-odd crossing test for the point `(x, y)` against `ring` of `(x, y)` vertices.
///
/// The crossing comparison is done in exact integer arithmetic.
fn contains(ring: &[(i64, i64)], x: i64, y: i64) -> bool {
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = ring[i];
        let (xj, yj) = ring[j];
        if (yi <= y && y < yj) || (yj <= y && y < yi) {
            // x < xi + (xj - xi) * (y - yi) / (yj - yi), scaled by (yj - yi).
            let lhs = i128::from(x - xi) * i128::from(yj - yi);
            let rhs = i128::from(xj - xi) * i128::from(y - yi);
            let crosses = if yj > yi { lhs < rhs } else { lhs > rhs };
            if crosses {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
