// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridder: map points, lines, and polygons onto a regular 2D grid.
//!
//! A grid is described by two coordinate arrays `tx` and `ty` of the same
//! shape. Building a [`GridIndex`] derives the cell centers (when the
//! coordinates are cell corners) and indexes them for nearest-neighbor
//! search. A [`Gridder`] then snaps geometry vertices to cells and rasterizes
//! lines and polygons between them.
//!
//! - Points snap to the nearest cell center within an optional maximum distance.
//!   Points that do not snap are dropped, not reported as errors.
//! - Lines become the Bresenham cells between their snapped endpoints.
//! - Polygons are filled (even-odd rule plus outline) or outlined.
//!
//! Results are lists of [`CellCoord`]; [`accumulate`] adds them into an
//! output array.
//!
//! # Example
//!
//! ```rust
//! use gridder::{CellCoord, GridOptions, Gridder, HitCounting, accumulate};
//! use ndarray::Array2;
//!
//! // A 4x4 grid whose coordinates are the lower-left corners of 10x10 cells.
//! let tx = Array2::from_shape_fn((4, 4), |(_, j)| 10.0 * j as f64);
//! let ty = Array2::from_shape_fn((4, 4), |(i, _)| 10.0 * i as f64);
//! let gridder = Gridder::new(tx, ty, GridOptions::new().with_max_distance(5.0))?;
//!
//! assert_eq!(gridder.grid().centers_x()[[0, 0]], 5.0);
//!
//! let cells = gridder.grid_points(&[6.0, 100.0], &[6.0, 100.0])?;
//! assert_eq!(cells, vec![CellCoord::new(0, 0)]);
//!
//! let mut counts = gridder.make_counter_grid();
//! accumulate(&mut counts, &cells, HitCounting::EveryHit);
//! assert_eq!(counts.sum(), 1);
//! # Ok::<(), gridder::GridError>(())
//! ```
//!
//! ## Pairing
//!
//! By default each line or polygon is snapped as a unit and dropped when any
//! of its vertices fails to snap. [`PairingPolicy::Positional`] instead
//! filters start and end points independently and pairs the survivors by
//! position, matching results produced by older tooling.
//!
//! ## Logging
//!
//! Construction is logged at `debug` level and dropped geometry at `trace`
//! level through the [`log`] facade. No logger is installed by this crate.

mod accumulate;
mod error;
mod grid;
mod gridder;
mod options;
mod shapes;

pub use accumulate::{HitCounting, accumulate, accumulate_all};
pub use error::{GridError, Result};
pub use grid::{GridIndex, corner_to_center};
pub use gridder::Gridder;
pub use options::{BackendKind, CellReference, GridOptions, PairingPolicy, PolygonMode};

pub use gridder_raster::{CellCoord, Rasterizer, ScanlineRasterizer};
