// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, BezPath, Point, Rect};
use understory_polygon::Polygon;

use crate::{ContentLayout, CoordinateTransform, PointerAction, QueryOutcome, hit_test};

/// Consumer of image-map query results.
///
/// Implemented for every `FnMut(&E, Point, &[&Polygon<Id>])`, so a closure
/// is usually enough.
pub trait ImageMapReceiver<Id, E> {
    /// Called once per resolved pointer release.
    ///
    /// - `event` is the host's event token, passed through untouched.
    /// - `point` is the logical-space query point, or [`Point::ZERO`] when
    ///   the map has no polygons or the release was outside the valid area.
    /// - `polygons` are the polygons containing `point`, in set order; empty
    ///   when nothing matched.
    fn on_image_map_clicked(&mut self, event: &E, point: Point, polygons: &[&Polygon<Id>]);
}

impl<Id, E, F> ImageMapReceiver<Id, E> for F
where
    F: FnMut(&E, Point, &[&Polygon<Id>]),
{
    fn on_image_map_clicked(&mut self, event: &E, point: Point, polygons: &[&Polygon<Id>]) {
        self(event, point, polygons);
    }
}

/// Polygon hit testing over an image, driven by pointer releases.
///
/// `ImageMap` owns the session state of one image map:
/// - the polygon set, in logical coordinates, replaced wholesale,
/// - the touch transform (content pixels → logical units),
/// - the valid area (content rectangle in view pixels),
/// - the path transform and visibility flag for debug outlines,
/// - an optional [`ImageMapReceiver`].
///
/// `Id` is the polygon identifier type and `E` the host's event token type.
///
/// The polygon set is held behind an [`Arc`]; [`polygon_set`](Self::polygon_set)
/// hands out the current snapshot, which stays valid and unchanged across
/// later calls to [`set_polygons`](Self::set_polygons).
pub struct ImageMap<Id, E = ()> {
    polygons: Arc<[Polygon<Id>]>,
    touch_transform: CoordinateTransform,
    path_transform: Affine,
    valid_area: Rect,
    path_visible: bool,
    receiver: Option<Box<dyn ImageMapReceiver<Id, E>>>,
}

impl<Id: fmt::Debug, E> fmt::Debug for ImageMap<Id, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageMap")
            .field("polygons", &self.polygons)
            .field("touch_transform", &self.touch_transform)
            .field("path_transform", &self.path_transform)
            .field("valid_area", &self.valid_area)
            .field("path_visible", &self.path_visible)
            .field("receiver", &self.receiver.is_some())
            .finish()
    }
}

impl<Id, E> Default for ImageMap<Id, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id, E> ImageMap<Id, E> {
    /// Creates an image map with no polygons, identity transforms, an empty
    /// valid area and no receiver.
    ///
    /// Until a valid area is set (directly or through
    /// [`apply_layout`](Self::apply_layout)), every query on a non-empty set
    /// is a miss.
    #[must_use]
    pub fn new() -> Self {
        Self {
            polygons: Arc::from(Vec::new()),
            touch_transform: CoordinateTransform::IDENTITY,
            path_transform: Affine::IDENTITY,
            valid_area: Rect::ZERO,
            path_visible: false,
            receiver: None,
        }
    }

    /// Replaces the polygon set. An empty iterator clears it.
    pub fn set_polygons<I>(&mut self, polygons: I)
    where
        I: IntoIterator<Item = Polygon<Id>>,
    {
        self.polygons = polygons.into_iter().collect();
    }

    /// Removes every polygon.
    pub fn clear_polygons(&mut self) {
        self.polygons = Arc::from(Vec::new());
    }

    /// The current polygon set.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon<Id>] {
        &self.polygons
    }

    /// A shared handle to the current polygon set.
    #[must_use]
    pub fn polygon_set(&self) -> Arc<[Polygon<Id>]> {
        Arc::clone(&self.polygons)
    }

    /// Replaces the touch transform (content pixels → logical units).
    pub fn set_transform(&mut self, transform: CoordinateTransform) {
        self.touch_transform = transform;
    }

    /// The current touch transform.
    #[must_use]
    pub fn transform(&self) -> CoordinateTransform {
        self.touch_transform
    }

    /// Replaces the valid area, in view pixels.
    pub fn set_valid_area(&mut self, area: Rect) {
        self.valid_area = area;
    }

    /// The current valid area, in view pixels.
    #[must_use]
    pub fn valid_area(&self) -> Rect {
        self.valid_area
    }

    /// Installs the valid area, touch transform and path transform derived
    /// from a host layout pass.
    pub fn apply_layout(&mut self, layout: &ContentLayout) {
        self.valid_area = layout.valid_area();
        self.touch_transform = layout.touch_transform();
        self.path_transform = layout.path_transform();
        tracing::debug!(
            x0 = self.valid_area.x0,
            y0 = self.valid_area.y0,
            x1 = self.valid_area.x1,
            y1 = self.valid_area.y1,
            identity = self.touch_transform.is_identity(),
            "applied image map layout"
        );
    }

    /// Registers the result receiver, replacing any previous one.
    pub fn set_receiver<R>(&mut self, receiver: R)
    where
        R: ImageMapReceiver<Id, E> + 'static,
    {
        self.receiver = Some(Box::new(receiver));
    }

    /// Unregisters the result receiver. Queries are ignored afterwards.
    pub fn clear_receiver(&mut self) {
        self.receiver = None;
    }

    /// Returns `true` if a receiver is registered.
    #[must_use]
    pub fn has_receiver(&self) -> bool {
        self.receiver.is_some()
    }

    /// Runs a query without notifying the receiver.
    ///
    /// Returns [`QueryOutcome::Ignored`] when `action` is not a release or no
    /// receiver is registered; neither the polygons nor the transform are
    /// consulted in that case. Otherwise returns the [`hit_test`] result.
    #[must_use]
    pub fn query(&self, raw: Point, action: PointerAction) -> QueryOutcome<'_, Id> {
        if !self.should_query(action) {
            return QueryOutcome::Ignored;
        }
        QueryOutcome::Resolved(hit_test(
            &self.polygons,
            &self.touch_transform,
            self.valid_area,
            raw,
        ))
    }

    /// Handles one pointer event from the host.
    ///
    /// On a release with a registered receiver, resolves `raw` and invokes
    /// the receiver exactly once with `event`, the logical point and the
    /// matches. Returns whether the receiver was invoked.
    pub fn handle_pointer(&mut self, event: &E, raw: Point, action: PointerAction) -> bool {
        if !self.should_query(action) {
            return false;
        }
        let Some(receiver) = self.receiver.as_mut() else {
            return false;
        };
        let hit = hit_test(&self.polygons, &self.touch_transform, self.valid_area, raw);
        receiver.on_image_map_clicked(event, hit.point, &hit.polygons);
        true
    }

    fn should_query(&self, action: PointerAction) -> bool {
        if !action.is_release() {
            tracing::trace!(?action, "ignoring non-release pointer action");
            return false;
        }
        if self.receiver.is_none() {
            tracing::trace!("no receiver registered, skipping query");
            return false;
        }
        true
    }

    /// Shows or hides debug outlines.
    pub fn set_path_visible(&mut self, visible: bool) {
        self.path_visible = visible;
    }

    /// Returns `true` if debug outlines are enabled.
    #[must_use]
    pub fn is_path_visible(&self) -> bool {
        self.path_visible
    }

    /// The logical → content pixel transform used for debug outlines.
    #[must_use]
    pub fn path_transform(&self) -> Affine {
        self.path_transform
    }

    /// Replaces the logical → content pixel transform used for debug
    /// outlines.
    pub fn set_path_transform(&mut self, transform: Affine) {
        self.path_transform = transform;
    }

    /// Outlines of every polygon in content pixels, in set order.
    ///
    /// Empty unless outlines are visible and the set is non-empty. Building
    /// the paths allocates per polygon, so callers should only ask when they
    /// are about to draw.
    #[must_use]
    pub fn debug_paths(&self) -> Vec<BezPath> {
        if !self.path_visible {
            return Vec::new();
        }
        self.polygons
            .iter()
            .map(|polygon| {
                let mut path = polygon.to_path();
                path.apply_affine(self.path_transform);
                path
            })
            .collect()
    }
}
