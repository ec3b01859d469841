// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised at the API boundary.

use thiserror::Error;

/// Input-shape violations. These are the only hard failures: points that do
/// not snap and polygons that degenerate are reported as empty results.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum GridError {
    /// The x and y coordinate arrays have different shapes.
    #[error("tx has shape {tx:?} but ty has shape {ty:?}")]
    ShapeMismatch {
        /// Shape of the x coordinates.
        tx: (usize, usize),
        /// Shape of the y coordinates.
        ty: (usize, usize),
    },

    /// The centering transform needs a neighbor along each axis.
    #[error("grid must have at least 2 rows and 2 columns, got {rows}x{cols}")]
    GridTooSmall {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns supplied.
        cols: usize,
    },

    /// A grid coordinate is NaN or infinite.
    #[error("grid coordinate at row {row}, column {col} is not finite")]
    NonFiniteGrid {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },

    /// The maximum snap distance is negative or NaN.
    #[error("maximum snap distance must be a non-negative number, got {0}")]
    InvalidMaxDistance(f64),

    /// Parallel coordinate sequences differ in length.
    #[error("{what} has length {found}, expected {expected}")]
    LengthMismatch {
        /// Which sequence is out of step.
        what: &'static str,
        /// Length of the reference sequence.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// Positional pairing found different numbers of snapped starts and ends.
    #[error("{starts} start points snapped but {ends} end points did; positional pairing cannot match them")]
    UnpairedEndpoints {
        /// Start points that snapped.
        starts: usize,
        /// End points that snapped.
        ends: usize,
    },
}

/// Result type used throughout this crate.
pub type Result<T, E = GridError> = core::result::Result<T, E>;

/// Fail with [`GridError::LengthMismatch`] unless `found == expected`.
pub(crate) fn check_len(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(GridError::LengthMismatch {
            what,
            expected,
            found,
        })
    }
}
