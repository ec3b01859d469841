// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell coordinates shared by the rasterizers and the gridding facade.

/// A `(row, col)` index into a 2D grid.
///
/// Rows follow the grid's first axis (y), columns its second axis (x).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CellCoord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl CellCoord {
    /// Create a new cell coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The coordinate as an `[row, col]` array, the index form used by
    /// two-dimensional array crates.
    pub const fn to_index(self) -> [usize; 2] {
        [self.row, self.col]
    }
}

impl From<(usize, usize)> for CellCoord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<CellCoord> for (usize, usize) {
    fn from(c: CellCoord) -> Self {
        (c.row, c.col)
    }
}

// Cell indices are bounded by allocation sizes, so they always fit in i64.
#[inline]
pub(crate) fn signed(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

#[inline]
pub(crate) fn unsigned(v: i64) -> usize {
    usize::try_from(v).unwrap_or(0)
}
