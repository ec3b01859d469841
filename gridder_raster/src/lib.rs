// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridder Raster: rasterize lines and polygons onto integer grid cells.
//!
//! All inputs are [`CellCoord`]s, i.e. vertices that were already snapped to a
//! grid. The crate answers one question: which cells does the shape cover?
//!
//! - [`trace_line`]: Bresenham segment, both endpoints included, ordered start to end.
//! - [`fill_polygon`]: cells inside or on the outline of an implicitly closed ring.
//! - [`trace_perimeter`]: outline cells only, edge by edge, without de-duplication.
//!
//! The [`Rasterizer`] trait bundles the three so callers can plug in their own
//! algorithms; [`ScanlineRasterizer`] is the default.
//!
//! # Example
//!
//! ```rust
//! use gridder_raster::{CellCoord, fill_polygon, trace_perimeter};
//!
//! let square = [(0, 0), (0, 2), (2, 2), (2, 0)].map(CellCoord::from);
//!
//! assert_eq!(fill_polygon(&square).len(), 9);
//! // Four edges of three cells each; corners are shared by two edges.
//! assert_eq!(trace_perimeter(&square).len(), 12);
//! ```
//!
//! Degenerate rings (fewer than three distinct vertices) rasterize to an empty
//! list instead of failing. Collinear rings enclose nothing but still cover
//! their outline.

#![no_std]

extern crate alloc;

pub mod line;
pub mod polygon;
pub mod rasterizer;
pub mod types;

pub use line::trace_line;
pub use polygon::{fill_polygon, is_degenerate, trace_perimeter};
pub use rasterizer::{Rasterizer, ScanlineRasterizer};
pub use types::CellCoord;
