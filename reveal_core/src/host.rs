// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! The update pass never owns elements. It borrows a [`RevealHost`] for the
//! duration of one pass, asks it for the viewport and the current candidate
//! set, and reads and writes each candidate through [`Revealable`].
//!
//! # Crate boundaries
//!
//! `reveal_core` owns the predicate, the pass, and this contract. Backend
//! crates (e.g. `reveal_backend_web`) implement it over a live document and
//! own the trigger bindings that decide *when* a pass runs.

use kurbo::Rect;

use crate::viewport::Viewport;

/// Whether an element carries the marker.
///
/// The only transition is `Unmarked -> Marked`; nothing in this crate ever
/// moves an element back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkState {
    /// No marker yet.
    Unmarked,
    /// Marker present; the element has been seen fully in view at least once.
    Marked,
}

impl MarkState {
    /// Maps a raw "has marker" flag to a state.
    #[inline]
    #[must_use]
    pub const fn from_marked(marked: bool) -> Self {
        if marked { Self::Marked } else { Self::Unmarked }
    }

    /// Returns `true` for [`MarkState::Marked`].
    #[inline]
    #[must_use]
    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Marked)
    }

    /// The state after a check that found the element `in_view`.
    #[inline]
    #[must_use]
    pub const fn after_check(self, in_view: bool) -> Self {
        if in_view { Self::Marked } else { self }
    }
}

/// One candidate element as seen by the update pass.
///
/// Methods take `&self`: platform element handles are typically shared
/// references into a tree owned by the host, and marking is a write through
/// that handle.
pub trait Revealable {
    /// Reads the element's current bounding box in viewport coordinates.
    ///
    /// Called at most once per element per pass.
    fn bounds(&self) -> Rect;

    /// Returns `true` if the marker is already present.
    fn is_marked(&self) -> bool;

    /// Adds the marker. Adding an already-present marker must be a no-op.
    fn mark(&self);

    /// Convenience wrapper over [`is_marked`](Self::is_marked).
    #[inline]
    fn mark_state(&self) -> MarkState {
        MarkState::from_marked(self.is_marked())
    }
}

/// The environment an update pass runs against.
pub trait RevealHost {
    /// Element handle yielded by [`candidates`](Self::candidates).
    ///
    /// May borrow from the host (in-memory trees) or be an owned handle
    /// (DOM references).
    type Element<'a>: Revealable
    where
        Self: 'a;

    /// Reads the current viewport.
    fn viewport(&self) -> Viewport;

    /// Returns every element currently matching the candidate selector.
    ///
    /// Must re-query on each call; membership is never retained between
    /// passes. An empty iterator is a valid answer.
    fn candidates(&self) -> impl Iterator<Item = Self::Element<'_>> + '_;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_view_marks() {
        assert_eq!(MarkState::Unmarked.after_check(true), MarkState::Marked);
    }

    #[test]
    fn check_out_of_view_keeps_state() {
        assert_eq!(MarkState::Unmarked.after_check(false), MarkState::Unmarked);
        assert_eq!(MarkState::Marked.after_check(false), MarkState::Marked);
    }

    #[test]
    fn marked_is_absorbing() {
        for in_view in [false, true] {
            assert!(MarkState::Marked.after_check(in_view).is_marked());
        }
    }

    #[test]
    fn from_marked_round_trips_flag() {
        assert_eq!(MarkState::from_marked(true), MarkState::Marked);
        assert_eq!(MarkState::from_marked(false), MarkState::Unmarked);
    }
}
