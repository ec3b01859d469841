// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction and gridding options.

use crate::error::{GridError, Result};

/// What the grid coordinates denote.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellReference {
    /// Coordinates are cell centers and are indexed as given.
    Center,
    /// Coordinates are the lower-left reference corner of each cell; centers
    /// are derived before indexing.
    #[default]
    Corner,
}

/// Nearest-neighbor backend used to snap points to cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Bulk-built 2-d tree.
    #[default]
    KdTree,
    /// Bucket grid sized from the mean cell spacing.
    UniformGrid,
    /// Linear scan over every cell.
    Linear,
}

/// How the endpoints or vertices of one geometry are matched after snapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PairingPolicy {
    /// Snap each geometry's coordinates together and drop the whole geometry
    /// if any of them fails to snap.
    #[default]
    Atomic,
    /// Filter each coordinate batch independently and pair the survivors by
    /// position. Reproduces results stored by older tooling; a dropped start
    /// or end point shifts every later segment.
    Positional,
}

/// Whether polygons are filled or only outlined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PolygonMode {
    /// Interior and outline cells.
    #[default]
    Fill,
    /// Outline cells only.
    Perimeter,
}

/// Options for building a [`GridIndex`](crate::GridIndex).
///
/// ```
/// use gridder::{BackendKind, GridOptions};
///
/// let options = GridOptions::new()
///     .with_max_distance(40_000.0)
///     .with_backend(BackendKind::UniformGrid);
/// assert_eq!(options.max_distance, Some(40_000.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GridOptions {
    /// Largest distance at which a point still snaps to a cell center.
    /// `None` (or `f64::INFINITY`) means unbounded.
    pub max_distance: Option<f64>,
    /// Whether the coordinates are cell centers or corners.
    pub reference: CellReference,
    /// Search backend.
    pub backend: BackendKind,
    /// Endpoint and vertex pairing for lines and polygons.
    pub pairing: PairingPolicy,
}

impl GridOptions {
    /// Default options: unbounded snapping, corner-referenced cells, 2-d tree,
    /// atomic pairing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum snap distance.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Mark the coordinates as cell centers (`true`) or corners (`false`).
    pub fn centered(mut self, centered: bool) -> Self {
        self.reference = if centered {
            CellReference::Center
        } else {
            CellReference::Corner
        };
        self
    }

    /// Set the cell reference explicitly.
    pub fn with_reference(mut self, reference: CellReference) -> Self {
        self.reference = reference;
        self
    }

    /// Set the search backend.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Set the pairing policy.
    pub fn with_pairing(mut self, pairing: PairingPolicy) -> Self {
        self.pairing = pairing;
        self
    }

    /// The cutoff to hand to the index, with infinity folded into `None`.
    pub(crate) fn resolved_max_distance(&self) -> Result<Option<f64>> {
        match self.max_distance {
            None => Ok(None),
            Some(d) if d.is_nan() || d < 0.0 => Err(GridError::InvalidMaxDistance(d)),
            Some(d) if d.is_infinite() => Ok(None),
            Some(d) => Ok(Some(d)),
        }
    }
}
