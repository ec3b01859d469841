// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accumulating gridded cells into an output array.

use std::collections::HashSet;
use std::ops::AddAssign;

use gridder_raster::CellCoord;
use ndarray::Array2;
use num_traits::One;

/// How repeated cells within one geometry are counted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HitCounting {
    /// Every occurrence adds one, so a perimeter that passes a vertex cell
    /// twice counts it twice.
    #[default]
    EveryHit,
    /// Each distinct cell adds at most one per geometry.
    OncePerGeometry,
}

/// Add one to `grid` at each cell and return how many increments were applied.
///
/// Cells outside the grid's shape are ignored.
///
/// ```
/// use gridder::{CellCoord, HitCounting, accumulate};
/// use ndarray::Array2;
///
/// let mut counts = Array2::<u32>::zeros((2, 2));
/// let cells = [CellCoord::new(0, 1), CellCoord::new(0, 1), CellCoord::new(5, 5)];
/// assert_eq!(accumulate(&mut counts, &cells, HitCounting::EveryHit), 2);
/// assert_eq!(counts[[0, 1]], 2);
/// ```
pub fn accumulate<T>(grid: &mut Array2<T>, cells: &[CellCoord], counting: HitCounting) -> usize
where
    T: One + AddAssign,
{
    let mut seen = HashSet::new();
    let mut applied = 0;
    for cell in cells {
        if counting == HitCounting::OncePerGeometry && !seen.insert(*cell) {
            continue;
        }
        if let Some(value) = grid.get_mut(cell.to_index()) {
            *value += T::one();
            applied += 1;
        }
    }
    applied
}

/// [`accumulate`] over a sequence of geometries, returning the total increments.
pub fn accumulate_all<T, I, C>(grid: &mut Array2<T>, geometries: I, counting: HitCounting) -> usize
where
    T: One + AddAssign,
    I: IntoIterator<Item = C>,
    C: AsRef<[CellCoord]>,
{
    geometries
        .into_iter()
        .map(|cells| accumulate(grid, cells.as_ref(), counting))
        .sum()
}
