// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizer trait so line and polygon algorithms can be swapped.

use alloc::vec::Vec;

use crate::line::trace_line;
use crate::polygon::{fill_polygon, trace_perimeter};
use crate::types::CellCoord;

/// Rasterization strategy used by the gridding facade.
///
/// Implementations receive vertices already snapped to cells and return the
/// covered cells. Degenerate input yields an empty result, never a panic.
pub trait Rasterizer {
    /// Cells covered by the segment from `start` to `end`, endpoints included.
    fn line(&self, start: CellCoord, end: CellCoord) -> Vec<CellCoord>;

    /// Cells on or inside the implicitly closed ring.
    fn fill_polygon(&self, vertices: &[CellCoord]) -> Vec<CellCoord>;

    /// Cells on the outline of the implicitly closed ring.
    fn polygon_perimeter(&self, vertices: &[CellCoord]) -> Vec<CellCoord>;
}

/// Bresenham lines and even-odd scanline fill.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanlineRasterizer;

impl Rasterizer for ScanlineRasterizer {
    fn line(&self, start: CellCoord, end: CellCoord) -> Vec<CellCoord> {
        trace_line(start, end)
    }

    fn fill_polygon(&self, vertices: &[CellCoord]) -> Vec<CellCoord> {
        fill_polygon(vertices)
    }

    fn polygon_perimeter(&self, vertices: &[CellCoord]) -> Vec<CellCoord> {
        trace_perimeter(vertices)
    }
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn line(&self, start: CellCoord, end: CellCoord) -> Vec<CellCoord> {
        (**self).line(start, end)
    }

    fn fill_polygon(&self, vertices: &[CellCoord]) -> Vec<CellCoord> {
        (**self).fill_polygon(vertices)
    }

    fn polygon_perimeter(&self, vertices: &[CellCoord]) -> Vec<CellCoord> {
        (**self).polygon_perimeter(vertices)
    }
}
