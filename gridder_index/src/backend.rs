// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for nearest-neighbor implementations.

use alloc::boxed::Box;

use crate::types::{Neighbor, Scalar};

/// Nearest-neighbor backend abstraction used by `PointIndex`.
///
/// Backends are bulk-built from a point slice; slot `i` is the position of the
/// point in that slice.
pub trait NearestBackend<T: Scalar> {
    /// Number of indexed points.
    fn len(&self) -> usize;

    /// Whether the backend holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the indexed point closest to `(x, y)`.
    ///
    /// Candidates farther than `max_distance2` (squared) are rejected. Equal
    /// distances resolve to the lowest slot.
    fn nearest(&self, x: T, y: T, max_distance2: Option<T::Acc>) -> Option<Neighbor<T>>;
}

impl<T: Scalar, B: NearestBackend<T> + ?Sized> NearestBackend<T> for Box<B> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn nearest(&self, x: T, y: T, max_distance2: Option<T::Acc>) -> Option<Neighbor<T>> {
        (**self).nearest(x, y, max_distance2)
    }
}
