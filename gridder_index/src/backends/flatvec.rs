// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::NearestBackend;
use crate::types::{Neighbor, Point2D, Scalar, distance2, within};

/// Flat vector backend with linear scans.
pub struct FlatVec<T: Scalar> {
    points: Vec<Point2D<T>>,
}

impl<T: Scalar> FlatVec<T> {
    /// Build from a slice of points.
    pub fn from_points(points: &[Point2D<T>]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }
}

impl<T: Scalar> Default for FlatVec<T> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<T: Scalar> Debug for FlatVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("points", &self.points.len())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> NearestBackend<T> for FlatVec<T> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn nearest(&self, x: T, y: T, max_distance2: Option<T::Acc>) -> Option<Neighbor<T>> {
        let q = Point2D::new(x, y);
        let mut best: Option<Neighbor<T>> = None;
        for (slot, p) in self.points.iter().enumerate() {
            let d2 = distance2(q, *p);
            if within(d2, max_distance2) && Neighbor::improves(best.as_ref(), slot, d2) {
                best = Some(Neighbor {
                    slot,
                    distance2: d2,
                });
            }
        }
        best
    }
}
