// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_polygon --heading-base-level=0

//! Understory Polygon: closed polygons with exact point containment.
//!
//! This crate provides the geometry half of image-map style hit testing: a
//! [`Polygon`] is an ordered ring of [`kurbo::Point`] vertices that, once
//! closed, answers "is this point inside me?" with Dan Sunday's winding
//! number test. It is intentionally decoupled from any view, transform or
//! event source; see `understory_image_map` for the pipeline that feeds it
//! pointer input.
//!
//! # Typical usage
//!
//! - Build polygons in logical coordinates, either closed at construction
//!   with [`Polygon::new`] or incrementally with [`Polygon::new_open`],
//!   [`Polygon::add_vertex`] and [`Polygon::close`].
//! - Cull with [`Polygon::is_point_in_bbox`] (O(1)), then confirm with
//!   [`Polygon::is_point_in_polygon`] (O(vertex count)).
//!
//! ```
//! use kurbo::Point;
//! use understory_polygon::Polygon;
//!
//! let square = Polygon::new(
//!     Some("square"),
//!     &[
//!         Point::new(0.0, 0.0),
//!         Point::new(10.0, 0.0),
//!         Point::new(10.0, 10.0),
//!         Point::new(0.0, 10.0),
//!     ],
//! )
//! .unwrap();
//!
//! let inside = Point::new(5.0, 5.0);
//! assert!(square.is_point_in_bbox(inside));
//! assert!(square.is_point_in_polygon(inside));
//! assert!(!square.is_point_in_polygon(Point::new(15.0, 5.0)));
//! ```
//!
//! ## Containment rule
//!
//! Containment uses the nonzero winding rule with a half-open crossing
//! convention on `y`: an edge counts as crossing the point's scanline when
//! it starts at or below it and ends strictly above it (or the reverse).
//! Points exactly on a non-horizontal edge are resolved by the sign of
//! [`classify`] for that edge, so a square's left edge is inside while its
//! right edge is outside. Self-intersecting rings are handled by the same
//! rule, which is why a doubly wound loop still contains its interior.
//!
//! ## Lifecycle
//!
//! A polygon is either *open* (vertices may still be appended, containment
//! tests always answer `false`) or *closed* (immutable ring of at least three
//! vertices, bounding box computed once). Misuse is reported through
//! [`PolygonError`], whose [`ErrorKind`] separates malformed arguments from
//! calls made in the wrong state.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bbox;
mod error;
mod point;
mod polygon;

pub use bbox::BoundingBox;
pub use error::{ErrorKind, PolygonError};
pub use point::{classify, point_from_f32, point_from_slice};
pub use polygon::Polygon;
