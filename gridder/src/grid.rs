// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid being mapped onto and the nearest-cell lookup over it.

use core::fmt::Debug;

use gridder_index::{FlatVec, KdTree, NearestBackend, Point2D, PointIndex, UniformGrid};
use gridder_raster::CellCoord;
use ndarray::{Array2, Zip, s};
use num_traits::Zero;

use crate::error::{GridError, Result, check_len};
use crate::options::{BackendKind, CellReference, GridOptions};

type DynBackend = Box<dyn NearestBackend<f64> + Send + Sync>;

/// A regular grid of cell centers with a nearest-cell index.
///
/// Built once from `tx`/`ty` coordinate arrays of shape `(rows, cols)`;
/// immutable afterwards, so it can be shared freely across threads.
pub struct GridIndex {
    centers_x: Array2<f64>,
    centers_y: Array2<f64>,
    max_distance: Option<f64>,
    options: GridOptions,
    index: PointIndex<f64, DynBackend>,
}

impl GridIndex {
    /// Build the index from cell coordinate arrays.
    ///
    /// With [`CellReference::Corner`] the arrays are shifted to cell centers
    /// first (see [`corner_to_center`]); the shifted copy is what every
    /// lookup uses.
    pub fn new(tx: Array2<f64>, ty: Array2<f64>, options: GridOptions) -> Result<Self> {
        let max_distance = options.resolved_max_distance()?;
        check_grid(&tx, &ty)?;
        let (rows, cols) = tx.dim();

        let (centers_x, centers_y) = match options.reference {
            CellReference::Center => (tx, ty),
            CellReference::Corner => shift_corners(&tx, &ty),
        };

        // Row-major flattening: slot `k` is cell `(k / cols, k % cols)`.
        let points: Vec<Point2D<f64>> = centers_x
            .iter()
            .zip(centers_y.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        let backend: DynBackend = match options.backend {
            BackendKind::KdTree => Box::new(KdTree::from_points(&points)),
            BackendKind::Linear => Box::new(FlatVec::from_points(&points)),
            BackendKind::UniformGrid => {
                let (cell_w, cell_h) = mean_spacing(&centers_x, &centers_y);
                Box::new(UniformGrid::from_points(&points, cell_w, cell_h))
            }
        };
        log::debug!(
            "grid index built: {rows}x{cols} cells, {:?} reference, {:?} backend, max distance {:?}",
            options.reference,
            options.backend,
            max_distance,
        );

        Ok(Self {
            centers_x,
            centers_y,
            max_distance,
            options,
            index: PointIndex::from_backend(backend),
        })
    }

    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.centers_x.dim()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false: a grid has at least 2×2 cells.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// X coordinates of the cell centers used for lookups.
    pub fn centers_x(&self) -> &Array2<f64> {
        &self.centers_x
    }

    /// Y coordinates of the cell centers used for lookups.
    pub fn centers_y(&self) -> &Array2<f64> {
        &self.centers_y
    }

    /// Effective snap cutoff; `None` when unbounded.
    pub fn max_distance(&self) -> Option<f64> {
        self.max_distance
    }

    /// What the input coordinates denoted.
    pub fn reference(&self) -> CellReference {
        self.options.reference
    }

    /// The options the index was built with.
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Allocate a zero-filled array with this grid's shape.
    pub fn make_empty_grid<T: Clone + Zero>(&self) -> Array2<T> {
        Array2::zeros(self.shape())
    }

    /// Cell for a row-major flat index.
    pub fn cell_of(&self, slot: usize) -> CellCoord {
        let (_, cols) = self.shape();
        CellCoord::new(slot / cols, slot % cols)
    }

    /// Nearest cell to `(x, y)`, if its center is within the cutoff.
    pub fn nearest_one(&self, x: f64, y: f64) -> Option<CellCoord> {
        self.index
            .nearest(x, y, self.max_distance)
            .map(|n| self.cell_of(n.slot))
    }

    /// Snap each point, keeping one entry per input (`None` where it did not snap).
    pub fn snap(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<Option<CellCoord>>> {
        check_len("ys", xs.len(), ys.len())?;
        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| self.nearest_one(x, y))
            .collect())
    }

    /// Snap each point and keep only the ones that matched, in input order.
    ///
    /// Points farther than the cutoff from every cell center are dropped
    /// silently; that is not an error.
    pub fn nearest(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<CellCoord>> {
        let snapped = self.snap(xs, ys)?;
        let total = snapped.len();
        let cells: Vec<CellCoord> = snapped.into_iter().flatten().collect();
        if cells.len() < total {
            log::trace!("{} of {total} points did not snap", total - cells.len());
        }
        Ok(cells)
    }
}

impl Debug for GridIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridIndex")
            .field("shape", &self.shape())
            .field("reference", &self.options.reference)
            .field("backend", &self.options.backend)
            .field("max_distance", &self.max_distance)
            .finish_non_exhaustive()
    }
}

/// Shift corner-referenced coordinates to cell centers.
///
/// Every x moves halfway toward its right-hand neighbor and every y halfway
/// toward the next row. The last column (row) has no such neighbor and is
/// pushed out by half of the final gap instead.
///
/// The arrays are validated the same way as in [`GridIndex::new`].
pub fn corner_to_center(tx: &Array2<f64>, ty: &Array2<f64>) -> Result<(Array2<f64>, Array2<f64>)> {
    check_grid(tx, ty)?;
    Ok(shift_corners(tx, ty))
}

/// Equal shapes, at least 2x2, all coordinates finite.
fn check_grid(tx: &Array2<f64>, ty: &Array2<f64>) -> Result<()> {
    if tx.dim() != ty.dim() {
        return Err(GridError::ShapeMismatch {
            tx: tx.dim(),
            ty: ty.dim(),
        });
    }
    let (rows, cols) = tx.dim();
    if rows < 2 || cols < 2 {
        return Err(GridError::GridTooSmall { rows, cols });
    }
    if let Some(((row, col), _)) = tx
        .indexed_iter()
        .chain(ty.indexed_iter())
        .find(|(_, v)| !v.is_finite())
    {
        return Err(GridError::NonFiniteGrid { row, col });
    }
    Ok(())
}

/// Unchecked centering; callers go through [`check_grid`] first.
fn shift_corners(tx: &Array2<f64>, ty: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    let (rows, cols) = tx.dim();
    let mut x = tx.clone();
    let mut y = ty.clone();

    Zip::from(x.slice_mut(s![.., ..cols - 1]))
        .and(tx.slice(s![.., ..cols - 1]))
        .and(tx.slice(s![.., 1..]))
        .for_each(|out, &a, &b| *out = a + (b - a) / 2.0);
    Zip::from(x.column_mut(cols - 1))
        .and(tx.column(cols - 1))
        .and(tx.column(cols - 2))
        .for_each(|out, &last, &prev| *out = last + (last - prev) / 2.0);

    Zip::from(y.slice_mut(s![..rows - 1, ..]))
        .and(ty.slice(s![..rows - 1, ..]))
        .and(ty.slice(s![1.., ..]))
        .for_each(|out, &a, &b| *out = a + (b - a) / 2.0);
    Zip::from(y.row_mut(rows - 1))
        .and(ty.row(rows - 1))
        .and(ty.row(rows - 2))
        .for_each(|out, &last, &prev| *out = last + (last - prev) / 2.0);

    (x, y)
}

/// Mean center spacing along each axis, used to size uniform-grid buckets.
fn mean_spacing(xs: &Array2<f64>, ys: &Array2<f64>) -> (f64, f64) {
    let (rows, cols) = xs.dim();
    let extent = |a: &Array2<f64>| {
        let (lo, hi) = a
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        hi - lo
    };
    let w = extent(xs) / (cols - 1) as f64;
    let h = extent(ys) / (rows - 1) as f64;
    let usable = |v: f64| v.is_finite() && v > 0.0;
    match (usable(w), usable(h)) {
        (true, true) => (w, h),
        (true, false) => (w, w),
        (false, true) => (h, h),
        (false, false) => (1.0, 1.0),
    }
}
