// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// A point in 2D.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point2D<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
}

impl<T> Point2D<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in 2D.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Minimum x
    pub min_x: T,
    /// Minimum y
    pub min_y: T,
    /// Maximum x
    pub max_x: T,
    /// Maximum y
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// A degenerate AABB covering a single point.
    pub const fn from_point(p: Point2D<T>) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Whether this AABB contains the point.
    pub fn contains_point(&self, x: T, y: T) -> bool {
        le(self.min_x, x) && le(self.min_y, y) && le(x, self.max_x) && le(y, self.max_y)
    }

    /// Return true if the AABB is inverted (no extent). Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        lt(self.max_x, self.min_x) || lt(self.max_y, self.min_y)
    }

    /// Smallest AABB covering both boxes.
    pub fn union(&self, other: &Self) -> Self {
        union_aabb(*self, *other)
    }

    /// Smallest AABB covering every point, or `None` for an empty slice.
    pub fn from_points(points: &[Point2D<T>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::from_point(*first), |acc, p| {
            acc.union(&Self::from_point(*p))
        }))
    }
}

impl<T: Scalar> Aabb2D<T> {
    /// Squared distance from the point to the closest point of this AABB.
    ///
    /// Zero when the point lies inside or on the boundary.
    pub fn distance2_to_point(&self, x: T, y: T) -> T::Acc {
        let dx = axis_gap(self.min_x, self.max_x, x);
        let dy = axis_gap(self.min_y, self.max_y, y);
        dx * dx + dy * dy
    }
}

fn axis_gap<T: Scalar>(min: T, max: T, v: T) -> T::Acc {
    if lt(v, min) {
        T::widen(min) - T::widen(v)
    } else if lt(max, v) {
        T::widen(v) - T::widen(max)
    } else {
        T::widen(T::zero())
    }
}

/// Numeric scalar abstraction for point coordinates.
///
/// Distances are accumulated in a widened type (f32→f64) so that squared
/// distances of nearby points compare reliably.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type suitable for squared distances.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Sub<Output = Self::Acc>
        + core::ops::Mul<Output = Self::Acc>
        + Debug;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Whether the value is neither NaN nor infinite.
    fn is_finite(v: Self) -> bool;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        v.is_finite()
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as f64
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        v.is_finite()
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }
}

/// Helper alias for the widened accumulator type associated with a scalar `T`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;

/// Squared Euclidean distance between two points, in the widened type.
#[inline]
pub fn distance2<T: Scalar>(a: Point2D<T>, b: Point2D<T>) -> T::Acc {
    let dx = T::widen(a.x) - T::widen(b.x);
    let dy = T::widen(a.y) - T::widen(b.y);
    dx * dx + dy * dy
}

/// Result of a nearest-neighbor query: the slot of the indexed point and its
/// squared distance to the query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor<T: Scalar> {
    /// Slot (insertion position) of the nearest indexed point.
    pub slot: usize,
    /// Squared distance from the query to that point.
    pub distance2: T::Acc,
}

impl<T: Scalar> Neighbor<T> {
    /// Whether a candidate at `distance2` with `slot` beats `current`.
    ///
    /// Equal distances resolve to the lower slot so every backend agrees.
    #[inline]
    pub(crate) fn improves(current: Option<&Self>, slot: usize, distance2: T::Acc) -> bool {
        match current {
            None => true,
            Some(best) => match distance2.partial_cmp(&best.distance2) {
                Some(Ordering::Less) => true,
                Some(Ordering::Equal) => slot < best.slot,
                _ => false,
            },
        }
    }
}

/// Whether `distance2` lies within the optional squared cutoff.
#[inline]
pub(crate) fn within<A: PartialOrd>(distance2: A, max_distance2: Option<A>) -> bool {
    match max_distance2 {
        None => true,
        Some(max) => le(distance2, max),
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}
pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

pub(crate) fn union_aabb<T: PartialOrd + Copy>(a: Aabb2D<T>, b: Aabb2D<T>) -> Aabb2D<T> {
    Aabb2D {
        min_x: min_t(a.min_x, b.min_x),
        min_y: min_t(a.min_y, b.min_y),
        max_x: max_t(a.max_x, b.max_x),
        max_y: max_t(a.max_y, b.max_y),
    }
}
