// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point helpers on top of [`kurbo::Point`].

use kurbo::Point;

use crate::PolygonError;

/// Classifies `point` against the infinite directed line through `p0` and `p1`.
///
/// Returns the 2D cross product `(p1 - p0) × (point - p0)` truncated toward
/// zero:
/// - `> 0` when `point` is left of the line,
/// - `0` when it is on the line,
/// - `< 0` when it is right of the line.
///
/// "Left" is with respect to a y-up reading of the plane; in y-down screen
/// coordinates the sides swap visually but the winding test is unaffected.
///
/// Cross products with magnitude below one truncate to `0` and therefore
/// classify as collinear.
///
/// ```
/// use kurbo::Point;
/// use understory_polygon::classify;
///
/// let p0 = Point::new(0.0, 0.0);
/// let p1 = Point::new(10.0, 0.0);
/// assert!(classify(Point::new(5.0, 3.0), p0, p1) > 0);
/// assert_eq!(classify(Point::new(5.0, 0.0), p0, p1), 0);
/// assert!(classify(Point::new(5.0, -3.0), p0, p1) < 0);
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Truncation toward zero is the documented classification rule."
)]
pub fn classify(point: Point, p0: Point, p1: Point) -> i64 {
    let cross = (p1.x - p0.x) * (point.y - p0.y) - (point.x - p0.x) * (p1.y - p0.y);
    cross as i64
}

/// Builds a point from an ordered pair of numbers.
///
/// Any element type that widens losslessly into `f64` is accepted, so
/// `&[f64]`, `&[f32]`, `&[i32]` and friends all work.
///
/// # Errors
///
/// Returns [`PolygonError::CoordinateCount`] when `coords` does not hold
/// exactly two values.
///
/// ```
/// use kurbo::Point;
/// use understory_polygon::{point_from_slice, PolygonError};
///
/// assert_eq!(point_from_slice(&[1.5_f64, 2.5]), Ok(Point::new(1.5, 2.5)));
/// assert_eq!(point_from_slice(&[3_i32, 4]), Ok(Point::new(3.0, 4.0)));
/// assert_eq!(point_from_slice(&[0.0_f64]), Err(PolygonError::CoordinateCount(1)));
/// ```
pub fn point_from_slice<T>(coords: &[T]) -> Result<Point, PolygonError>
where
    T: Copy + Into<f64>,
{
    match *coords {
        [x, y] => Ok(Point::new(x.into(), y.into())),
        _ => Err(PolygonError::CoordinateCount(coords.len())),
    }
}

/// Builds a point from a single-precision coordinate pair.
#[must_use]
pub fn point_from_f32(coords: [f32; 2]) -> Point {
    Point::new(f64::from(coords[0]), f64::from(coords[1]))
}
