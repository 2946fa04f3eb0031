// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Insets, Rect, Size};

use crate::CoordinateTransform;

/// Display density of the host surface, in dots per inch per axis.
///
/// Logical units are density-independent: one logical unit is one pixel on a
/// [`DEFAULT_DPI`](Self::DEFAULT_DPI) display. Reading these values from the
/// platform is the host's job.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisplayDensity {
    /// Horizontal dots per inch.
    pub x_dpi: f64,
    /// Vertical dots per inch.
    pub y_dpi: f64,
}

impl DisplayDensity {
    /// Density at which one logical unit equals one pixel.
    pub const DEFAULT_DPI: f64 = 160.0;

    /// Creates a density with distinct horizontal and vertical dpi.
    #[must_use]
    pub const fn new(x_dpi: f64, y_dpi: f64) -> Self {
        Self { x_dpi, y_dpi }
    }

    /// Creates a density with the same dpi on both axes.
    #[must_use]
    pub const fn uniform(dpi: f64) -> Self {
        Self::new(dpi, dpi)
    }

    /// Factors converting pixels into logical units, `(sx, sy)`.
    #[must_use]
    pub fn logical_scale(&self) -> (f64, f64) {
        (
            Self::DEFAULT_DPI / self.x_dpi,
            Self::DEFAULT_DPI / self.y_dpi,
        )
    }

    /// Factors converting logical units into pixels, `(sx, sy)`.
    #[must_use]
    pub fn pixel_scale(&self) -> (f64, f64) {
        (
            self.x_dpi / Self::DEFAULT_DPI,
            self.y_dpi / Self::DEFAULT_DPI,
        )
    }
}

impl Default for DisplayDensity {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_DPI)
    }
}

/// Geometry of the view hosting an image map, as measured by the host.
///
/// An [`ImageMap`](crate::ImageMap) derives its valid area and both of its
/// transforms from this in [`apply_layout`](crate::ImageMap::apply_layout).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContentLayout {
    /// Size of the view in pixels.
    pub size: Size,
    /// Padding between the view edges and the image content, in pixels.
    pub padding: Insets,
    /// Maps image (logical, density-scaled) coordinates into content pixels,
    /// as computed by the host's image fitting.
    pub image_transform: Affine,
    /// Density used to convert between pixels and logical units.
    pub density: DisplayDensity,
}

impl Default for ContentLayout {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            padding: Insets::ZERO,
            image_transform: Affine::IDENTITY,
            density: DisplayDensity::default(),
        }
    }
}

impl ContentLayout {
    /// Creates a layout with no padding, identity image transform and
    /// default density.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the image transform.
    #[must_use]
    pub fn with_image_transform(mut self, image_transform: Affine) -> Self {
        self.image_transform = image_transform;
        self
    }

    /// Sets the display density.
    #[must_use]
    pub fn with_density(mut self, density: DisplayDensity) -> Self {
        self.density = density;
        self
    }

    /// The content rectangle in view pixels: the view bounds minus padding.
    #[must_use]
    pub fn valid_area(&self) -> Rect {
        Rect::new(
            self.padding.x0,
            self.padding.y0,
            self.size.width - self.padding.x1,
            self.size.height - self.padding.y1,
        )
    }

    /// Content pixels → logical units: the inverted image transform followed
    /// by the density scale.
    #[must_use]
    pub fn touch_transform(&self) -> CoordinateTransform {
        let (sx, sy) = self.density.logical_scale();
        CoordinateTransform::invert_or_identity(self.image_transform).then_scale(sx, sy)
    }

    /// Logical units → content pixels, for drawing polygon outlines over the
    /// image.
    #[must_use]
    pub fn path_transform(&self) -> Affine {
        let (sx, sy) = self.density.pixel_scale();
        self.image_transform * Affine::scale_non_uniform(sx, sy)
    }
}
