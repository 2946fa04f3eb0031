// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

/// Determinants at or below this magnitude are treated as singular.
///
/// This is `(1/4096)^3`, the "nearly zero" tolerance cubed that common 2D
/// matrix libraries use when deciding whether an inverse exists.
pub const SINGULAR_DETERMINANT: f64 = 1.0 / (4096.0 * 4096.0 * 4096.0);

/// Affine map from input (pixel) space into logical space.
///
/// Starts as the identity. The identity is detected exactly and applied as a
/// pass-through, so an identity transform never introduces rounding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordinateTransform(Affine);

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CoordinateTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Returns the identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Wraps an affine that already maps input space into logical space.
    #[must_use]
    pub const fn new(affine: Affine) -> Self {
        Self(affine)
    }

    /// Inverts `source` (a logical → input mapping), falling back to the
    /// identity when `source` is singular.
    ///
    /// A degenerate upstream image scale must not break hit testing, so no
    /// error is reported; the fallback is logged at `debug` level.
    #[must_use]
    pub fn invert_or_identity(source: Affine) -> Self {
        let det = source.determinant();
        if !det.is_finite() || (-SINGULAR_DETERMINANT..=SINGULAR_DETERMINANT).contains(&det) {
            tracing::debug!(det, "transform is not invertible, using identity");
            return Self::IDENTITY;
        }
        let inverse = source.inverse();
        if !inverse.is_finite() {
            tracing::debug!(det, "inverse transform is not finite, using identity");
            return Self::IDENTITY;
        }
        Self(inverse)
    }

    /// Returns the inverse of this transform, or the identity when singular.
    #[must_use]
    pub fn inverse_or_identity(&self) -> Self {
        Self::invert_or_identity(self.0)
    }

    /// Appends a non-uniform scale applied after the current mapping.
    ///
    /// This is how a pixel → density-independent unit factor is folded in.
    #[must_use]
    pub fn then_scale(self, sx: f64, sy: f64) -> Self {
        Self(Affine::scale_non_uniform(sx, sy) * self.0)
    }

    /// Returns `true` if this is exactly the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.0 == Affine::IDENTITY
    }

    /// Maps `pt` through the transform.
    ///
    /// When [`is_identity`](Self::is_identity) holds, `pt` is returned as-is.
    #[must_use]
    pub fn apply(&self, pt: Point) -> Point {
        if self.is_identity() {
            pt
        } else {
            self.0 * pt
        }
    }

    /// The underlying affine.
    #[must_use]
    pub const fn affine(&self) -> Affine {
        self.0
    }
}

impl From<Affine> for CoordinateTransform {
    fn from(affine: Affine) -> Self {
        Self::new(affine)
    }
}
