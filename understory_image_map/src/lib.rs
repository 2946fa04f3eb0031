// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_map --heading-base-level=0

//! Understory Image Map: which polygons of an image did the pointer land on?
//!
//! ## Overview
//!
//! An image map is a picture with a set of polygonal areas authored in
//! logical (density-independent) image coordinates. This crate turns a
//! pointer release, reported in view pixels, into:
//! - the release point in logical coordinates, and
//! - the ordered list of [`Polygon`](understory_polygon::Polygon)s containing it.
//!
//! It does not draw anything and does not route events. The host measures
//! its view, reports pointer events, and decides what a hit means.
//!
//! ## Pipeline
//!
//! [`hit_test`] is the pure core, and [`ImageMap`] wraps it with state:
//!
//! 1. Only releases ([`PointerAction::is_release`]) are looked up, and only
//!    while a receiver is registered. Anything else is
//!    [`QueryOutcome::Ignored`].
//! 2. An empty polygon set, or a release outside the valid area, is a miss:
//!    [`Point::ZERO`](kurbo::Point::ZERO) with no polygons.
//! 3. The release is made relative to the valid area and mapped through the
//!    [`CoordinateTransform`] into logical space.
//! 4. Polygons are culled by bounding box, then confirmed by winding number.
//!    Matches keep polygon-set order.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_image_map::{ImageMap, PointerAction};
//! use understory_polygon::Polygon;
//!
//! let triangle = Polygon::new(
//!     Some("roof"),
//!     &[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 10.0)],
//! )
//! .unwrap();
//!
//! let mut map: ImageMap<&'static str> = ImageMap::new();
//! map.set_polygons([triangle]);
//! map.set_valid_area(Rect::new(0.0, 0.0, 100.0, 100.0));
//! map.set_receiver(|_: &(), point: Point, polygons: &[&Polygon<&'static str>]| {
//!     assert_eq!(point, Point::new(5.0, 2.0));
//!     assert_eq!(polygons[0].id(), Some(&"roof"));
//! });
//!
//! assert!(map.handle_pointer(&(), Point::new(5.0, 2.0), PointerAction::Up));
//! ```
//!
//! ## Layout
//!
//! Hosts that fit the image into a padded view can describe that with a
//! [`ContentLayout`] and call [`ImageMap::apply_layout`]. It derives the
//! valid area from the padding, the touch transform from the inverted image
//! transform and the [`DisplayDensity`], and the path transform used by
//! [`ImageMap::debug_paths`] to draw outlines over the image. A singular
//! image transform silently degrades to the identity.
//!
//! ## Logging
//!
//! Short-circuits and results are reported through [`tracing`] at `trace`
//! level; layout changes and transform fallbacks at `debug` level. No
//! subscriber is installed by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod hit;
mod image_map;
mod layout;
mod transform;

pub use action::PointerAction;
pub use hit::{ImageMapHit, Matches, QueryOutcome, hit_test};
pub use image_map::{ImageMap, ImageMapReceiver};
pub use layout::{ContentLayout, DisplayDensity};
pub use transform::{CoordinateTransform, SINGULAR_DETERMINANT};
