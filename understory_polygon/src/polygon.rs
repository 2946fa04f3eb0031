// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use crate::{BoundingBox, PolygonError, classify};

/// An ordered ring of vertices with an open/closed lifecycle.
///
/// - An *open* polygon accepts more vertices and never contains any point.
/// - A *closed* polygon has at least three vertices, an immutable ring and a
///   bounding box computed exactly once when it was closed.
///
/// The last vertex is implicitly connected back to the first; callers should
/// not repeat the first vertex at the end.
///
/// `Id` is an optional caller-defined identifier carried alongside the
/// geometry (for example an area name or a database key). The polygon never
/// inspects it.
#[derive(Clone, Debug)]
pub struct Polygon<Id = ()> {
    id: Option<Id>,
    vertices: Vec<Point>,
    closed: bool,
    bbox: Option<BoundingBox>,
}

impl<Id> Default for Polygon<Id> {
    fn default() -> Self {
        Self::new_open()
    }
}

impl<Id> Polygon<Id> {
    /// Creates a closed polygon from at least three vertices.
    ///
    /// The vertices are copied; the bounding box is computed immediately.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::TooFewVertices`] when fewer than three
    /// vertices are given.
    pub fn new(id: Option<Id>, vertices: &[Point]) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }
        let bbox = BoundingBox::from_vertices(vertices)?;
        Ok(Self {
            id,
            vertices: vertices.to_vec(),
            closed: true,
            bbox: Some(bbox),
        })
    }

    /// Creates an empty open polygon with no identifier.
    #[must_use]
    pub fn new_open() -> Self {
        Self {
            id: None,
            vertices: Vec::new(),
            closed: false,
            bbox: None,
        }
    }

    /// Returns the identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    /// Replaces the identifier.
    ///
    /// The identifier is not geometry, so this is allowed in either state.
    pub fn set_id(&mut self, id: Option<Id>) {
        self.id = id;
    }

    /// Appends one vertex to an open polygon.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::AlreadyClosed`] if the polygon is closed.
    pub fn add_vertex(&mut self, vertex: Point) -> Result<(), PolygonError> {
        if self.closed {
            return Err(PolygonError::AlreadyClosed);
        }
        self.vertices.push(vertex);
        Ok(())
    }

    /// Appends a batch of vertices to an open polygon, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::AlreadyClosed`] if the polygon is closed, or
    /// [`PolygonError::EmptyVertexBatch`] if `vertices` is empty.
    pub fn add_vertices(&mut self, vertices: &[Point]) -> Result<(), PolygonError> {
        if self.closed {
            return Err(PolygonError::AlreadyClosed);
        }
        if vertices.is_empty() {
            return Err(PolygonError::EmptyVertexBatch);
        }
        self.vertices.extend_from_slice(vertices);
        Ok(())
    }

    /// Closes the polygon and computes its bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::AlreadyClosed`] if the polygon is already
    /// closed, or [`PolygonError::TooFewVertices`] if it has fewer than three
    /// vertices. On error the polygon stays as it was.
    pub fn close(&mut self) -> Result<(), PolygonError> {
        if self.closed {
            return Err(PolygonError::AlreadyClosed);
        }
        if self.vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(self.vertices.len()));
        }
        let bbox = BoundingBox::from_vertices(&self.vertices)?;
        self.bbox = Some(bbox);
        self.closed = true;
        Ok(())
    }

    /// Returns `true` once the polygon has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The vertices in ring order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if there are no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The bounding box, available once the polygon is closed.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bbox
    }

    /// Broad-phase check: is `pt` inside the bounding box (edges inclusive)?
    ///
    /// This is necessary but not sufficient for containment. Always `false`
    /// for an open polygon.
    #[must_use]
    pub fn is_point_in_bbox(&self, pt: Point) -> bool {
        match self.bbox {
            Some(bbox) if self.closed => bbox.contains(pt),
            _ => false,
        }
    }

    /// Exact check: does the ring wind around `pt` at least once?
    ///
    /// Always `false` for an open polygon.
    #[must_use]
    pub fn is_point_in_polygon(&self, pt: Point) -> bool {
        self.winding_number(pt) != 0
    }

    /// Winding number of the ring around `pt` (Dan Sunday's crossing form).
    ///
    /// Upward edge crossings with `pt` on their left count `+1`, downward
    /// crossings with `pt` on their right count `-1`. Crossings are half-open
    /// in `y` so a vertex lying on the scanline is counted once. Returns `0`
    /// for an open polygon.
    #[must_use]
    pub fn winding_number(&self, pt: Point) -> i32 {
        if !self.closed {
            return 0;
        }
        let mut wn = 0;
        let ring = self.vertices.iter().zip(self.vertices.iter().cycle().skip(1));
        for (&v0, &v1) in ring {
            if v0.y <= pt.y {
                if v1.y > pt.y && classify(pt, v0, v1) > 0 {
                    wn += 1;
                }
            } else if v1.y <= pt.y && classify(pt, v0, v1) < 0 {
                wn -= 1;
            }
        }
        wn
    }

    /// Builds an outline of the vertices, for debug drawing.
    ///
    /// Emits `MoveTo` for the first vertex, `LineTo` for every following one,
    /// and `ClosePath` only when the polygon is closed. An open polygon with
    /// no vertices produces an empty path.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut vertices = self.vertices.iter();
        let Some(&first) = vertices.next() else {
            return path;
        };
        path.move_to(first);
        for &v in vertices {
            path.line_to(v);
        }
        if self.closed {
            path.close_path();
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn square() -> Polygon<&'static str> {
        Polygon::new(
            Some("square"),
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn construction_closes_and_bounds() {
        let sq = square();
        assert!(sq.is_closed());
        assert_eq!(sq.len(), 4);
        assert_eq!(sq.id(), Some(&"square"));
        let bbox = sq.bounding_box().expect("closed polygon has a bbox");
        assert_eq!(bbox.min_vertex, Point::ZERO);
        assert_eq!(bbox.max_vertex, Point::new(10.0, 10.0));
    }

    #[test]
    fn two_vertices_rejected_three_accepted() {
        let two = Polygon::<()>::new(None, &[Point::ZERO, Point::new(1.0, 0.0)]);
        assert_eq!(two.unwrap_err(), PolygonError::TooFewVertices(2));

        let three = Polygon::<()>::new(
            None,
            &[Point::ZERO, Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
        )
        .unwrap();
        assert!(three.is_closed());
    }

    #[test]
    fn open_polygon_contains_nothing() {
        let mut open = Polygon::<()>::new_open();
        open.add_vertices(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ])
        .unwrap();
        assert!(!open.is_closed());
        assert!(open.bounding_box().is_none());
        assert!(!open.is_point_in_bbox(Point::new(8.0, 2.0)));
        assert!(!open.is_point_in_polygon(Point::new(8.0, 2.0)));
        assert_eq!(open.winding_number(Point::new(8.0, 2.0)), 0);
    }

    #[test]
    fn failed_close_leaves_polygon_open() {
        let mut open = Polygon::<()>::new_open();
        open.add_vertex(Point::ZERO).unwrap();
        open.add_vertex(Point::new(1.0, 1.0)).unwrap();
        assert_eq!(open.close(), Err(PolygonError::TooFewVertices(2)));
        assert!(!open.is_closed());
        assert!(open.bounding_box().is_none());

        // Still open, so it keeps accepting vertices.
        open.add_vertex(Point::new(0.0, 1.0)).unwrap();
        open.close().unwrap();
        assert!(open.is_closed());
    }

    #[test]
    fn closed_polygon_rejects_changes() {
        let mut sq = square();
        let before = sq.bounding_box();
        assert_eq!(
            sq.add_vertex(Point::new(20.0, 20.0)),
            Err(PolygonError::AlreadyClosed)
        );
        assert_eq!(
            sq.add_vertices(&[Point::new(20.0, 20.0)]),
            Err(PolygonError::AlreadyClosed)
        );
        assert_eq!(sq.close(), Err(PolygonError::AlreadyClosed));
        assert_eq!(sq.len(), 4);
        assert_eq!(sq.bounding_box(), before);
    }

    #[test]
    fn empty_batch_rejected() {
        let mut open = Polygon::<()>::new_open();
        assert_eq!(open.add_vertices(&[]), Err(PolygonError::EmptyVertexBatch));
        assert!(open.is_empty());
    }

    #[test]
    fn closed_batch_check_precedes_empty_check() {
        let mut sq = square();
        assert_eq!(sq.add_vertices(&[]), Err(PolygonError::AlreadyClosed));
    }

    #[test]
    fn square_containment() {
        let sq = square();
        assert!(sq.is_point_in_polygon(Point::new(5.0, 5.0)));
        assert!(!sq.is_point_in_polygon(Point::new(15.0, 5.0)));
        // Left edge is inside, right edge is outside under the half-open rule.
        assert!(sq.is_point_in_polygon(Point::new(0.0, 5.0)));
        assert!(!sq.is_point_in_polygon(Point::new(10.0, 5.0)));
    }

    #[test]
    fn orientation_sets_winding_sign() {
        let ccw = square();
        let mut rev: Vec<Point> = ccw.vertices().to_vec();
        rev.reverse();
        let cw = Polygon::<()>::new(None, &rev).unwrap();
        let center = Point::new(5.0, 5.0);
        assert_eq!(ccw.winding_number(center), 1);
        assert_eq!(cw.winding_number(center), -1);
        assert!(cw.is_point_in_polygon(center));
    }

    #[test]
    fn set_id_on_closed_polygon() {
        let mut sq = square();
        sq.set_id(Some("renamed"));
        assert_eq!(sq.id(), Some(&"renamed"));
        sq.set_id(None);
        assert!(sq.id().is_none());
    }

    #[test]
    fn path_of_closed_polygon() {
        let sq = square();
        let path = sq.to_path();
        let els = path.elements();
        assert_eq!(els.len(), 5);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(els[1], PathEl::LineTo(Point::new(10.0, 0.0)));
        assert_eq!(els[3], PathEl::LineTo(Point::new(0.0, 10.0)));
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn path_of_open_polygon() {
        let mut open = Polygon::<()>::new_open();
        assert!(open.to_path().elements().is_empty());

        open.add_vertices(&[Point::new(1.0, 1.0), Point::new(2.0, 3.0)])
            .unwrap();
        let path = open.to_path();
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(1.0, 1.0)),
                PathEl::LineTo(Point::new(2.0, 3.0)),
            ]
        );
    }
}
