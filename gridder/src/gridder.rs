// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gridding facade: snap geometries to cells and rasterize them.

use gridder_raster::{CellCoord, Rasterizer, ScanlineRasterizer};
use ndarray::Array2;
use num_traits::Zero;

use crate::error::{GridError, Result, check_len};
use crate::grid::GridIndex;
use crate::options::{GridOptions, PairingPolicy, PolygonMode};

/// Maps points, lines, and polygons onto a [`GridIndex`].
///
/// Results are cell lists; accumulating them into an output grid is left to
/// the caller (see [`accumulate`](crate::accumulate)).
#[derive(Debug)]
pub struct Gridder<R = ScanlineRasterizer> {
    grid: GridIndex,
    rasterizer: R,
}

impl Gridder<ScanlineRasterizer> {
    /// Build a grid index from coordinate arrays and wrap it with the default rasterizer.
    pub fn new(tx: Array2<f64>, ty: Array2<f64>, options: GridOptions) -> Result<Self> {
        Ok(Self::from_index(GridIndex::new(tx, ty, options)?))
    }

    /// Wrap an existing grid index with the default rasterizer.
    pub fn from_index(grid: GridIndex) -> Self {
        Self::with_rasterizer(grid, ScanlineRasterizer)
    }
}

impl<R: Rasterizer> Gridder<R> {
    /// Wrap an existing grid index with a custom rasterizer.
    pub fn with_rasterizer(grid: GridIndex, rasterizer: R) -> Self {
        Self { grid, rasterizer }
    }

    /// The underlying grid index.
    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    /// The rasterizer in use.
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    fn pairing(&self) -> PairingPolicy {
        self.grid.options().pairing
    }

    /// Allocate a zero-filled output grid with the grid's shape.
    pub fn make_empty_grid<T: Clone + Zero>(&self) -> Array2<T> {
        self.grid.make_empty_grid()
    }

    /// Allocate a zero-filled hit counter grid.
    pub fn make_counter_grid(&self) -> Array2<u32> {
        self.grid.make_empty_grid()
    }

    /// Snap a single point.
    pub fn grid_point(&self, x: f64, y: f64) -> Option<CellCoord> {
        self.grid.nearest_one(x, y)
    }

    /// Snap points, keeping input order and dropping those that do not snap.
    pub fn grid_points(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<CellCoord>> {
        self.grid.nearest(xs, ys)
    }

    /// Rasterize a single segment, or `None` if either endpoint does not snap.
    pub fn grid_line(&self, sx: f64, sy: f64, ex: f64, ey: f64) -> Option<Vec<CellCoord>> {
        let start = self.grid.nearest_one(sx, sy)?;
        let end = self.grid.nearest_one(ex, ey)?;
        Some(self.rasterizer.line(start, end))
    }

    /// Rasterize segments given as parallel start/end coordinate slices.
    ///
    /// Each result is the ordered cell list of one segment. Segments that
    /// cannot be drawn are left out, so results are not index-aligned with the
    /// input. Which segments survive depends on the [`PairingPolicy`].
    pub fn grid_lines(
        &self,
        sxs: &[f64],
        sys: &[f64],
        exs: &[f64],
        eys: &[f64],
    ) -> Result<Vec<Vec<CellCoord>>> {
        check_len("sys", sxs.len(), sys.len())?;
        check_len("exs", sxs.len(), exs.len())?;
        check_len("eys", sxs.len(), eys.len())?;

        match self.pairing() {
            PairingPolicy::Atomic => {
                let starts = self.grid.snap(sxs, sys)?;
                let ends = self.grid.snap(exs, eys)?;
                let lines: Vec<_> = starts
                    .into_iter()
                    .zip(ends)
                    .filter_map(|(s, e)| Some(self.rasterizer.line(s?, e?)))
                    .collect();
                if lines.len() < sxs.len() {
                    log::trace!(
                        "skipped {} of {} segments with an endpoint off the grid",
                        sxs.len() - lines.len(),
                        sxs.len()
                    );
                }
                Ok(lines)
            }
            PairingPolicy::Positional => {
                let starts = self.grid.nearest(sxs, sys)?;
                let ends = self.grid.nearest(exs, eys)?;
                if starts.len() != ends.len() {
                    return Err(GridError::UnpairedEndpoints {
                        starts: starts.len(),
                        ends: ends.len(),
                    });
                }
                Ok(starts
                    .into_iter()
                    .zip(ends)
                    .map(|(s, e)| self.rasterizer.line(s, e))
                    .collect())
            }
        }
    }

    /// Rasterize one polygon given by parallel vertex slices.
    ///
    /// `Ok(None)` when the polygon is skipped: a vertex failed to snap under
    /// [`PairingPolicy::Atomic`], or the snapped ring has fewer than three
    /// distinct vertices. A ring that collapses onto a line keeps its outline.
    pub fn grid_polygon(
        &self,
        xs: &[f64],
        ys: &[f64],
        mode: PolygonMode,
    ) -> Result<Option<Vec<CellCoord>>> {
        let vertices = match self.pairing() {
            PairingPolicy::Atomic => {
                let Some(vertices) = self.grid.snap(xs, ys)?.into_iter().collect::<Option<Vec<_>>>()
                else {
                    log::trace!("skipped polygon with a vertex off the grid");
                    return Ok(None);
                };
                vertices
            }
            PairingPolicy::Positional => self.grid.nearest(xs, ys)?,
        };
        let cells = match mode {
            PolygonMode::Fill => self.rasterizer.fill_polygon(&vertices),
            PolygonMode::Perimeter => self.rasterizer.polygon_perimeter(&vertices),
        };
        if cells.is_empty() {
            log::trace!("skipped polygon with fewer than 3 distinct cells among {} snapped vertices", vertices.len());
            return Ok(None);
        }
        Ok(Some(cells))
    }

    /// Rasterize polygons given as per-polygon vertex slices.
    ///
    /// `xss[i]` and `yss[i]` hold the vertices of polygon `i`; rings are closed
    /// implicitly. Skipped polygons contribute nothing and are left out of the
    /// result.
    pub fn grid_polygons<X, Y>(
        &self,
        xss: &[X],
        yss: &[Y],
        mode: PolygonMode,
    ) -> Result<Vec<Vec<CellCoord>>>
    where
        X: AsRef<[f64]>,
        Y: AsRef<[f64]>,
    {
        check_len("yss", xss.len(), yss.len())?;
        let mut out = Vec::with_capacity(xss.len());
        for (xs, ys) in xss.iter().zip(yss) {
            check_len("polygon y vertices", xs.as_ref().len(), ys.as_ref().len())?;
        }
        for (xs, ys) in xss.iter().zip(yss) {
            if let Some(cells) = self.grid_polygon(xs.as_ref(), ys.as_ref(), mode)? {
                out.push(cells);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BackendKind;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    fn corner_gridder(n: usize, options: GridOptions) -> Gridder {
        let tx = Array2::from_shape_fn((n, n), |(_, j)| j as f64 * 10.0);
        let ty = Array2::from_shape_fn((n, n), |(i, _)| i as f64 * 10.0);
        Gridder::new(tx, ty, options).unwrap()
    }

    /// Center of cell `(row, col)` on a corner grid with spacing 10.
    fn center(row: usize, col: usize) -> (f64, f64) {
        (col as f64 * 10.0 + 5.0, row as f64 * 10.0 + 5.0)
    }

    #[test]
    fn points_keep_order_and_drop_misses() {
        let g = corner_gridder(4, GridOptions::new().with_max_distance(5.0));
        let cells = g.grid_points(&[6.0, 100.0, 33.0], &[6.0, 100.0, 14.0]).unwrap();
        assert_eq!(cells, vec![CellCoord::new(0, 0), CellCoord::new(1, 3)]);
        assert_eq!(g.grid_point(100.0, 100.0), None);
    }

    #[test]
    fn zero_length_line_increments_one_cell() {
        let g = corner_gridder(4, GridOptions::new().with_max_distance(5.0));
        let (x, y) = center(2, 1);
        let lines = g.grid_lines(&[x], &[y], &[x + 1.0], &[y - 1.0]).unwrap();
        assert_eq!(lines, vec![vec![CellCoord::new(2, 1)]]);

        let mut counts = g.make_counter_grid();
        for line in &lines {
            for cell in line {
                counts[cell.to_index()] += 1;
            }
        }
        assert_eq!(counts.sum(), 1);
        assert_eq!(counts[[2, 1]], 1);
    }

    #[test]
    fn line_cells_run_from_start_to_end() {
        let g = corner_gridder(6, GridOptions::default());
        let (sx, sy) = center(0, 0);
        let (ex, ey) = center(3, 5);
        let line = g.grid_line(sx, sy, ex, ey).unwrap();
        assert_eq!(line.first(), Some(&CellCoord::new(0, 0)));
        assert_eq!(line.last(), Some(&CellCoord::new(3, 5)));
        assert_eq!(line.len(), 6);
    }

    #[test]
    fn atomic_pairing_drops_whole_segment() {
        let g = corner_gridder(4, GridOptions::new().with_max_distance(5.0));
        let (bx, by) = center(0, 3);
        let (cx, cy) = center(3, 0);
        let (dx, dy) = center(3, 3);
        // The first segment starts off the grid; the second must still pair c -> d.
        let lines = g
            .grid_lines(&[-100.0, cx], &[-100.0, cy], &[bx, dx], &[by, dy])
            .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].first(), Some(&CellCoord::new(3, 0)));
        assert_eq!(lines[0].last(), Some(&CellCoord::new(3, 3)));
    }

    #[test]
    fn positional_pairing_reproduces_legacy_shift() {
        let options = GridOptions::new()
            .with_max_distance(5.0)
            .with_pairing(PairingPolicy::Positional);
        let g = corner_gridder(4, options);
        let (ax, ay) = center(0, 0);
        let (bx, by) = center(0, 3);
        let (cx, cy) = center(3, 0);
        let (dx, dy) = center(3, 3);

        // One start and one end dropped at different positions: the survivors
        // zip as a -> d, not a -> b.
        let lines = g
            .grid_lines(&[ax, -100.0], &[ay, -100.0], &[-100.0, dx], &[-100.0, dy])
            .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].first(), Some(&CellCoord::new(0, 0)));
        assert_eq!(lines[0].last(), Some(&CellCoord::new(3, 3)));

        // Unequal survivor counts cannot be paired at all.
        let err = g
            .grid_lines(&[ax, cx], &[ay, cy], &[bx, -100.0], &[by, -100.0])
            .unwrap_err();
        assert_eq!(err, GridError::UnpairedEndpoints { starts: 2, ends: 1 });
    }

    #[test]
    fn line_length_mismatch_is_an_error() {
        let g = corner_gridder(3, GridOptions::default());
        let err = g.grid_lines(&[1.0, 2.0], &[1.0, 2.0], &[1.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                what: "exs",
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn filled_polygon_covers_interior() {
        let g = corner_gridder(8, GridOptions::new().with_max_distance(8.0));
        let corners = [center(1, 1), center(1, 5), center(5, 5), center(5, 1)];
        let xs: Vec<f64> = corners.iter().map(|c| c.0).collect();
        let ys: Vec<f64> = corners.iter().map(|c| c.1).collect();

        let filled = g.grid_polygons(&[xs.clone()], &[ys.clone()], PolygonMode::Fill).unwrap();
        assert_eq!(filled.len(), 1);
        assert_eq!(filled[0].len(), 25);

        let outline = g
            .grid_polygons(&[xs.as_slice()], &[ys.as_slice()], PolygonMode::Perimeter)
            .unwrap();
        let filled_set: BTreeSet<_> = filled[0].iter().copied().collect();
        assert!(outline[0].iter().all(|c| filled_set.contains(c)));
        let outline_set: BTreeSet<_> = outline[0].iter().copied().collect();
        assert_eq!(outline_set.len(), 16);
        assert!(!outline_set.contains(&CellCoord::new(3, 3)));
    }

    #[test]
    fn degenerate_and_off_grid_polygons_are_skipped() {
        let g = corner_gridder(6, GridOptions::new().with_max_distance(5.0));
        let (ax, ay) = center(0, 0);
        let (bx, by) = center(4, 4);
        let (cx, cy) = center(0, 4);
        // All vertices in one cell.
        let tiny = (vec![ax, ax + 1.0, ax - 1.0], vec![ay, ay + 1.0, ay]);
        // One vertex off the grid.
        let partial = (vec![ax, bx, 900.0], vec![ay, by, 900.0]);
        // A proper triangle.
        let tri = (vec![ax, bx, cx], vec![ay, by, cy]);

        let xss = [tiny.0, partial.0.clone(), tri.0];
        let yss = [tiny.1, partial.1.clone(), tri.1];
        let polys = g.grid_polygons(&xss, &yss, PolygonMode::Fill).unwrap();
        assert_eq!(polys.len(), 1);
        assert!(polys[0].contains(&CellCoord::new(0, 4)));

        // Positional mode keeps the surviving vertices, which form only a segment.
        let legacy = corner_gridder(
            6,
            GridOptions::new()
                .with_max_distance(5.0)
                .with_pairing(PairingPolicy::Positional),
        );
        assert_eq!(legacy.grid_polygon(&partial.0, &partial.1, PolygonMode::Fill), Ok(None));
    }

    #[test]
    fn polygon_length_mismatch_is_an_error() {
        let g = corner_gridder(3, GridOptions::default());
        let xss = [vec![1.0, 2.0, 3.0]];
        let yss = [vec![1.0, 2.0]];
        assert!(matches!(
            g.grid_polygons(&xss, &yss, PolygonMode::Fill),
            Err(GridError::LengthMismatch { expected: 3, found: 2, .. })
        ));
        let no_ys: [Vec<f64>; 0] = [];
        assert!(g.grid_polygons(&xss, &no_ys, PolygonMode::Fill).is_err());
    }

    #[test]
    fn backends_produce_identical_results() {
        let xs: Vec<f64> = (0..40).map(|i| (i * 7 % 75) as f64 - 3.0).collect();
        let ys: Vec<f64> = (0..40).map(|i| (i * 11 % 70) as f64 + 1.5).collect();
        let reference = corner_gridder(8, GridOptions::new().with_backend(BackendKind::Linear))
            .grid_points(&xs, &ys)
            .unwrap();
        for backend in [BackendKind::KdTree, BackendKind::UniformGrid] {
            let g = corner_gridder(8, GridOptions::new().with_backend(backend));
            assert_eq!(g.grid_points(&xs, &ys).unwrap(), reference, "{backend:?}");
        }
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Gridder>();

        let g = Arc::new(corner_gridder(4, GridOptions::default()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let g = Arc::clone(&g);
                std::thread::spawn(move || {
                    let (x, y) = center(i, i);
                    g.grid_point(x, y)
                })
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), Some(CellCoord::new(i, i)));
        }
    }
}
