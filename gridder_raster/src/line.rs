// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bresenham line tracing over integer cells.

use alloc::vec::Vec;

use crate::types::{CellCoord, signed, unsigned};

/// Trace the cells on the segment from `start` to `end`.
///
/// Both endpoints are included and cells are ordered from `start` to `end`.
/// Exactly one cell is produced per step along the major axis, so the result
/// holds `max(|Δrow|, |Δcol|) + 1` cells. A zero-length segment yields the
/// single shared cell.
///
/// ```
/// use gridder_raster::{CellCoord, trace_line};
///
/// let cells = trace_line(CellCoord::new(0, 0), CellCoord::new(1, 3));
/// assert_eq!(
///     cells,
///     [(0, 0), (0, 1), (1, 2), (1, 3)].map(CellCoord::from).to_vec()
/// );
/// ```
pub fn trace_line(start: CellCoord, end: CellCoord) -> Vec<CellCoord> {
    let (r1, c1) = (signed(end.row), signed(end.col));
    let (mut r, mut c) = (signed(start.row), signed(start.col));
    let mut dr = (r1 - r).abs();
    let mut dc = (c1 - c).abs();
    let mut sr: i64 = if r1 > r { 1 } else { -1 };
    let mut sc: i64 = if c1 > c { 1 } else { -1 };

    // Walk along the major axis; `c` is always the stepping coordinate.
    let steep = dr > dc;
    if steep {
        core::mem::swap(&mut r, &mut c);
        core::mem::swap(&mut dr, &mut dc);
        core::mem::swap(&mut sr, &mut sc);
    }

    let mut out = Vec::with_capacity(unsigned(dc) + 1);
    let mut d = 2 * dr - dc;
    for _ in 0..dc {
        let cell = if steep {
            CellCoord::new(unsigned(c), unsigned(r))
        } else {
            CellCoord::new(unsigned(r), unsigned(c))
        };
        out.push(cell);
        while d >= 0 {
            r += sr;
            d -= 2 * dc;
        }
        c += sc;
        d += 2 * dr;
    }
    out.push(end);
    out
}
