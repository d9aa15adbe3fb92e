// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fully-visible-vertically predicate.
//!
//! Element geometry arrives as a [`Rect`] in viewport coordinates: the origin
//! is the top-left corner of the visible region, `y0` is the element's top
//! edge and `y1` its bottom edge. Only the vertical extent is considered.

use kurbo::Rect;

/// The visible region of the document, reduced to what the predicate needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Height of the visible region in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// A viewport with no height. Nothing with positive extent fits in it.
    pub const EMPTY: Self = Self { height: 0.0 };

    /// Creates a viewport of the given height.
    #[inline]
    #[must_use]
    pub const fn new(height: f64) -> Self {
        Self { height }
    }
}

/// Returns `true` iff `bounds` lies entirely within the vertical extent of
/// `viewport`.
///
/// The test is `top >= 0 && bottom <= viewport.height`. An element that is
/// only partially scrolled into view, or one taller than the viewport, is
/// not in view. Horizontal position is ignored.
///
/// Geometry is taken as given. A detached element usually reports an
/// all-zero rect, which passes against any non-negative height; NaN edges
/// never pass.
#[inline]
#[must_use]
pub fn is_in_viewport(bounds: Rect, viewport: Viewport) -> bool {
    bounds.y0 >= 0.0 && bounds.y1 <= viewport.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(top: f64, bottom: f64) -> Rect {
        Rect::new(0.0, top, 100.0, bottom)
    }

    #[test]
    fn fully_inside_is_visible() {
        let vp = Viewport::new(800.0);
        assert!(is_in_viewport(vertical(100.0, 300.0), vp));
    }

    #[test]
    fn edges_are_inclusive() {
        let vp = Viewport::new(800.0);
        assert!(is_in_viewport(vertical(0.0, 800.0), vp));
    }

    #[test]
    fn top_above_viewport_is_not_visible() {
        let vp = Viewport::new(800.0);
        assert!(!is_in_viewport(vertical(-50.0, 700.0), vp));
        assert!(!is_in_viewport(vertical(-0.5, 10.0), vp));
    }

    #[test]
    fn bottom_below_viewport_is_not_visible() {
        let vp = Viewport::new(800.0);
        assert!(!is_in_viewport(vertical(750.0, 820.0), vp));
    }

    #[test]
    fn taller_than_viewport_is_never_visible() {
        let vp = Viewport::new(800.0);
        assert!(!is_in_viewport(vertical(0.0, 801.0), vp));
        assert!(!is_in_viewport(vertical(-10.0, 900.0), vp));
    }

    #[test]
    fn horizontal_position_is_ignored() {
        let vp = Viewport::new(800.0);
        let far_right = Rect::new(5_000.0, 10.0, 5_200.0, 20.0);
        let far_left = Rect::new(-5_000.0, 10.0, -4_800.0, 20.0);
        assert!(is_in_viewport(far_right, vp));
        assert!(is_in_viewport(far_left, vp));
    }

    #[test]
    fn degenerate_geometry_is_taken_as_given() {
        assert!(is_in_viewport(Rect::ZERO, Viewport::new(800.0)));
        assert!(is_in_viewport(Rect::ZERO, Viewport::EMPTY));
        assert!(!is_in_viewport(vertical(1.0, 2.0), Viewport::EMPTY));
    }

    #[test]
    fn nan_edges_are_not_visible() {
        let vp = Viewport::new(800.0);
        assert!(!is_in_viewport(vertical(f64::NAN, 10.0), vp));
        assert!(!is_in_viewport(vertical(10.0, f64::NAN), vp));
    }
}
