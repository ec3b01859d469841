// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridder Index: a static 2D point index answering nearest-neighbor queries.
//!
//! Gridder Index is the spatial search building block of the gridder workspace.
//!
//! - Bulk-build an index over a slice of points; slot `i` is the `i`th point.
//! - Query the nearest point, optionally bounded by a maximum distance.
//! - Equal-distance ties always resolve to the lowest slot.
//!
//! It is generic over the scalar type `T` and does not depend on any geometry crate.
//! Higher layers (like a regular grid of cell centers) flatten their coordinates and feed them here.
//!
//! Backends are pluggable via a simple trait so you can swap the search strategy without API churn.
//! The default backend is a flat vector (linear scan).
//!
//! # Example
//!
//! ```rust
//! use gridder_index::{Index, Point2D};
//!
//! let points = [
//!     Point2D::new(5.0, 5.0),
//!     Point2D::new(15.0, 5.0),
//!     Point2D::new(5.0, 15.0),
//! ];
//! let idx = Index::with_kdtree(&points);
//!
//! let hit = idx.nearest(13.0, 6.0, Some(5.0)).unwrap();
//! assert_eq!(hit.slot, 1);
//!
//! // Nothing within the cutoff.
//! assert!(idx.nearest(100.0, 100.0, Some(5.0)).is_none());
//! ```
//!
//! ## Choosing a backend
//!
//! - `FlatVec` (default): simplest and smallest, linear scans. Good for very small sets
//!   and as a reference answer in tests.
//! - `KdTree`: bulk-built 2-d tree with median splits and bounding-box pruning; good
//!   general-purpose choice, including lattices with many shared coordinates.
//! - `UniformGrid`: dense bucket grid searched in rings; great when points are spread
//!   evenly and the bucket size matches their spacing.
//!
//! ### Float semantics
//!
//! Indexed points must be finite. Queries with NaN or infinite coordinates never match.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod index;
pub mod types;

pub use backend::NearestBackend;
pub use backends::flatvec::FlatVec;
pub use backends::grid::UniformGrid;
pub use backends::kdtree::{KdTree, KdTreeF32, KdTreeF64};
pub use index::{Index, PointIndex};
pub use types::{Aabb2D, Neighbor, Point2D, Scalar};
