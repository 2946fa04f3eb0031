// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::PolygonError;

/// Axis-aligned box tightly enclosing a vertex sequence.
///
/// Used as an O(1) broad-phase check before the exact winding-number test.
/// Unlike [`Rect::contains`], [`BoundingBox::contains`] treats both edges as
/// inclusive, so every vertex of the source sequence is inside its own box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Minimum `x` and minimum `y` over all vertices.
    pub min_vertex: Point,
    /// Maximum `x` and maximum `y` over all vertices.
    pub max_vertex: Point,
}

impl BoundingBox {
    /// Computes the bounding box of `vertices` in a single pass.
    ///
    /// Coordinates that are NaN never win a comparison and are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::NoVertices`] when `vertices` is empty.
    pub fn from_vertices(vertices: &[Point]) -> Result<Self, PolygonError> {
        if vertices.is_empty() {
            return Err(PolygonError::NoVertices);
        }
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for v in vertices {
            if v.x < min.x {
                min.x = v.x;
            }
            if v.y < min.y {
                min.y = v.y;
            }
            if max.x < v.x {
                max.x = v.x;
            }
            if max.y < v.y {
                max.y = v.y;
            }
        }
        Ok(Self {
            min_vertex: min,
            max_vertex: max,
        })
    }

    /// Returns `true` if `pt` lies inside the box or on its boundary.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.min_vertex.x <= pt.x
            && pt.x <= self.max_vertex.x
            && self.min_vertex.y <= pt.y
            && pt.y <= self.max_vertex.y
    }

    /// Width of the box.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_vertex.x - self.min_vertex.x
    }

    /// Height of the box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_vertex.y - self.min_vertex.y
    }

    /// Converts to a [`kurbo::Rect`] with the same corners.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.min_vertex, self.max_vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_scan_extremes() {
        let bbox = BoundingBox::from_vertices(&[
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(7.5, 0.5),
        ])
        .unwrap();
        assert_eq!(bbox.min_vertex, Point::new(-2.0, -1.0));
        assert_eq!(bbox.max_vertex, Point::new(7.5, 4.0));
        assert_eq!(bbox.width(), 9.5);
        assert_eq!(bbox.height(), 5.0);
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(
            BoundingBox::from_vertices(&[]),
            Err(PolygonError::NoVertices)
        );
    }

    #[test]
    fn contains_is_inclusive_on_every_edge() {
        let bbox =
            BoundingBox::from_vertices(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)]).unwrap();
        assert!(bbox.contains(Point::new(0.0, 0.0)));
        assert!(bbox.contains(Point::new(10.0, 10.0)));
        assert!(bbox.contains(Point::new(10.0, 0.0)));
        assert!(bbox.contains(Point::new(0.0, 5.0)));
        assert!(!bbox.contains(Point::new(10.000_001, 5.0)));
        assert!(!bbox.contains(Point::new(5.0, -0.000_001)));
        // `Rect::contains` would reject the max corner.
        assert!(!bbox.to_rect().contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn nan_coordinates_are_skipped() {
        let bbox = BoundingBox::from_vertices(&[
            Point::new(f64::NAN, 1.0),
            Point::new(2.0, f64::NAN),
            Point::new(4.0, 3.0),
        ])
        .unwrap();
        assert_eq!(bbox.min_vertex, Point::new(2.0, 1.0));
        assert_eq!(bbox.max_vertex, Point::new(4.0, 3.0));
    }
}
