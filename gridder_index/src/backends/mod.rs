// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different search strategies.
//!
//! - `flatvec`: flat vector with linear scans (small, simple, the reference answer).
//! - `kdtree`: static 2-d tree (`T: Scalar`) with bounding-box pruning.
//! - `grid`: uniform bucket grid for f64 coordinates, searched in expanding rings.
//!
//! Pruning note
//! ------------
//! Both accelerated backends keep a running best candidate and skip a region
//! once a lower bound on its squared distance exceeds the best distance or the
//! query cutoff. The comparison is strict, so regions tied with the current
//! best are still visited and the lowest slot wins, matching `FlatVec`.

pub mod flatvec;
pub mod grid;
pub mod kdtree;

pub use grid::UniformGrid;
