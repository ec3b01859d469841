// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Index` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::marker::PhantomData;

use crate::backend::NearestBackend;
use crate::backends::flatvec::FlatVec;
use crate::backends::grid::UniformGrid;
use crate::backends::kdtree::KdTree;
use crate::types::{Neighbor, Point2D, Scalar};

/// A static point index parameterized by a nearest-neighbor backend.
///
/// Slot `i` of every result refers to `points[i]` of the slice the index was
/// built from.
pub struct PointIndex<T: Scalar, B: NearestBackend<T>> {
    backend: B,
    _t: PhantomData<T>,
}

impl<T: Scalar, B: NearestBackend<T>> PointIndex<T, B> {
    /// Wrap an already-built backend.
    pub fn from_backend(backend: B) -> Self {
        Self {
            backend,
            _t: PhantomData,
        }
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Whether the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Borrow the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Nearest indexed point to `(x, y)` no farther than `max_distance`.
    ///
    /// `None` for `max_distance` means unbounded. A point exactly at the cutoff
    /// matches. Non-finite queries never match.
    pub fn nearest(&self, x: T, y: T, max_distance: Option<T>) -> Option<Neighbor<T>> {
        if !T::is_finite(x) || !T::is_finite(y) {
            return None;
        }
        let max_distance2 = max_distance.map(|d| {
            let d = T::widen(d);
            d * d
        });
        self.backend.nearest(x, y, max_distance2)
    }

    /// Nearest neighbor for each query point, in query order.
    pub fn nearest_batch(
        &self,
        queries: &[Point2D<T>],
        max_distance: Option<T>,
    ) -> Vec<Option<Neighbor<T>>> {
        queries
            .iter()
            .map(|q| self.nearest(q.x, q.y, max_distance))
            .collect()
    }
}

impl<T: Scalar, B: NearestBackend<T> + Debug> Debug for PointIndex<T, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointIndex")
            .field("backend", &self.backend)
            .finish()
    }
}

/// Default index using a flat vector backend.
pub type Index<T> = PointIndex<T, FlatVec<T>>;

impl<T: Scalar> Index<T> {
    /// Create a linear-scan index over `points`.
    pub fn new(points: &[Point2D<T>]) -> Self {
        Self::from_backend(FlatVec::from_points(points))
    }

    /// Create a 2-d tree index over `points`.
    pub fn with_kdtree(points: &[Point2D<T>]) -> PointIndex<T, KdTree<T>> {
        PointIndex::from_backend(KdTree::from_points(points))
    }
}

impl Index<f64> {
    /// Create a uniform-grid index over `points` with the given bucket size.
    pub fn with_uniform_grid(
        points: &[Point2D<f64>],
        cell_w: f64,
        cell_h: f64,
    ) -> PointIndex<f64, UniformGrid> {
        PointIndex::from_backend(UniformGrid::from_points(points, cell_w, cell_h))
    }
}
