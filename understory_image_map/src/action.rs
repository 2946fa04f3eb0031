// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Discrete pointer action reported by the host alongside a coordinate.
///
/// Only releases trigger a lookup; see [`is_release`](Self::is_release).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// The primary pointer went down.
    Down,
    /// A pointer moved while down.
    Move,
    /// The primary pointer was released, ending the gesture.
    Up,
    /// An additional pointer went down during a multi-pointer gesture.
    PointerDown,
    /// An additional pointer was released during a multi-pointer gesture.
    PointerUp,
    /// The gesture was aborted by the host.
    Cancel,
    /// Anything else (hover, scroll, outside-window notifications, ...).
    Other,
}

impl PointerAction {
    /// Returns `true` for [`Up`](Self::Up) and [`PointerUp`](Self::PointerUp).
    ///
    /// A cancelled gesture is not a release.
    #[must_use]
    pub const fn is_release(self) -> bool {
        matches!(self, Self::Up | Self::PointerUp)
    }
}
