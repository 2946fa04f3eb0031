// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use understory_polygon::Polygon;

use crate::CoordinateTransform;

/// Matching polygons of one query, in polygon-set order.
///
/// Most image maps have few overlapping areas, so a handful of matches are
/// stored inline.
pub type Matches<'a, Id> = SmallVec<[&'a Polygon<Id>; 4]>;

/// Result of a resolved image-map query.
#[derive(Debug)]
pub struct ImageMapHit<'a, Id> {
    /// The query point in logical space, or [`Point::ZERO`] when there was
    /// no valid target (empty polygon set, or outside the valid area).
    pub point: Point,
    /// Polygons containing [`point`](Self::point), in polygon-set order.
    pub polygons: Matches<'a, Id>,
}

impl<Id> ImageMapHit<'_, Id> {
    /// The sentinel result: zero point, no polygons.
    #[must_use]
    pub fn miss() -> Self {
        Self {
            point: Point::ZERO,
            polygons: SmallVec::new(),
        }
    }

    /// Returns `true` if no polygon matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// What a query produced.
#[derive(Debug)]
pub enum QueryOutcome<'a, Id> {
    /// The query did not run: the action was not a release, or nobody is
    /// listening for results.
    Ignored,
    /// The query ran; the hit may still be a miss.
    Resolved(ImageMapHit<'a, Id>),
}

impl<'a, Id> QueryOutcome<'a, Id> {
    /// Returns `true` for [`QueryOutcome::Ignored`].
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// Returns the hit, if the query ran.
    #[must_use]
    pub fn resolved(self) -> Option<ImageMapHit<'a, Id>> {
        match self {
            Self::Ignored => None,
            Self::Resolved(hit) => Some(hit),
        }
    }
}

/// Resolves a raw pixel coordinate against a polygon set.
///
/// 1. An empty polygon set is a miss; no transform work is done.
/// 2. A coordinate outside `valid_area` is a miss. Coordinates are truncated
///    toward zero first, then tested against the half-open rectangle, so
///    pixel `x1` (or `y1`) itself is outside.
/// 3. The coordinate is made relative to the area origin and mapped through
///    `transform` into logical space.
/// 4. Polygons are filtered by bounding box, then by winding number. The
///    order of `polygons` is preserved.
#[must_use]
pub fn hit_test<'a, Id>(
    polygons: &'a [Polygon<Id>],
    transform: &CoordinateTransform,
    valid_area: Rect,
    raw: Point,
) -> ImageMapHit<'a, Id> {
    if polygons.is_empty() {
        tracing::trace!("no polygons installed");
        return ImageMapHit::miss();
    }
    if !area_contains(valid_area, raw) {
        tracing::trace!(x = raw.x, y = raw.y, "outside the valid area");
        return ImageMapHit::miss();
    }

    let local = raw - valid_area.origin().to_vec2();
    let point = transform.apply(local);
    let matches: Matches<'a, Id> = polygons
        .iter()
        .filter(|polygon| polygon.is_point_in_bbox(point))
        .filter(|polygon| polygon.is_point_in_polygon(point))
        .collect();
    tracing::trace!(
        x = point.x,
        y = point.y,
        matches = matches.len(),
        "resolved image map query"
    );
    ImageMapHit {
        point,
        polygons: matches,
    }
}

fn area_contains(area: Rect, raw: Point) -> bool {
    if !raw.is_finite() {
        return false;
    }
    area.contains(Point::new(truncate(raw.x), truncate(raw.y)))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Pointer coordinates are tested as whole pixels, like the host's integer content rect."
)]
fn truncate(v: f64) -> f64 {
    v as i64 as f64
}
