// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Broad classification of a [`PolygonError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was malformed: wrong coordinate count, too few vertices, or
    /// an empty batch.
    InvalidArgument,
    /// The call is not allowed in the polygon's current state.
    InvalidState,
}

/// Error returned by point construction and polygon lifecycle operations.
///
/// A failed operation never leaves its receiver partially updated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PolygonError {
    /// A point was built from a coordinate sequence whose length is not 2.
    CoordinateCount(usize),
    /// A polygon was constructed or closed with fewer than three vertices.
    TooFewVertices(usize),
    /// [`Polygon::add_vertices`](crate::Polygon::add_vertices) was given no vertices.
    EmptyVertexBatch,
    /// A bounding box was requested for an empty vertex sequence.
    NoVertices,
    /// The polygon is closed and can no longer be modified or closed again.
    AlreadyClosed,
}

impl PolygonError {
    /// Returns whether this error reports bad input or a bad state.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CoordinateCount(_)
            | Self::TooFewVertices(_)
            | Self::EmptyVertexBatch
            | Self::NoVertices => ErrorKind::InvalidArgument,
            Self::AlreadyClosed => ErrorKind::InvalidState,
        }
    }
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordinateCount(len) => {
                write!(f, "a point needs exactly two coordinates, got {len}")
            }
            Self::TooFewVertices(len) => {
                write!(f, "a closed polygon needs at least three vertices, got {len}")
            }
            Self::EmptyVertexBatch => f.write_str("at least one vertex must be provided"),
            Self::NoVertices => f.write_str("cannot bound an empty vertex sequence"),
            Self::AlreadyClosed => f.write_str("a closed polygon cannot be modified"),
        }
    }
}

impl core::error::Error for PolygonError {}
