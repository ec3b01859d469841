// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry points taking `kurbo` geometry.

use gridder_raster::{CellCoord, Rasterizer};
use kurbo::{Line, Point};

use crate::error::Result;
use crate::gridder::Gridder;
use crate::options::PolygonMode;

fn split(points: &[Point]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}

impl<R: Rasterizer> Gridder<R> {
    /// Snap points; see [`Gridder::grid_points`].
    pub fn grid_kurbo_points(&self, points: &[Point]) -> Vec<CellCoord> {
        points
            .iter()
            .filter_map(|p| self.grid().nearest_one(p.x, p.y))
            .collect()
    }

    /// Rasterize segments; see [`Gridder::grid_lines`].
    pub fn grid_segments(&self, lines: &[Line]) -> Result<Vec<Vec<CellCoord>>> {
        let (starts, ends): (Vec<Point>, Vec<Point>) = lines.iter().map(|l| (l.p0, l.p1)).unzip();
        let (sxs, sys) = split(&starts);
        let (exs, eys) = split(&ends);
        self.grid_lines(&sxs, &sys, &exs, &eys)
    }

    /// Rasterize implicitly closed rings; see [`Gridder::grid_polygons`].
    ///
    /// A trailing vertex equal to the first is accepted and changes nothing.
    pub fn grid_rings(&self, rings: &[Vec<Point>], mode: PolygonMode) -> Result<Vec<Vec<CellCoord>>> {
        let (xss, yss): (Vec<_>, Vec<_>) = rings.iter().map(|ring| split(ring)).unzip();
        self.grid_polygons(&xss, &yss, mode)
    }
}
