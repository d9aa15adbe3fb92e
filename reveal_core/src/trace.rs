// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for update passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! update pass calls as it runs. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::host::MarkState;
use crate::update::{Pass, PassSummary, Trigger};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once at the start of a pass, after the viewport has been read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassBeginEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// What caused the pass.
    pub trigger: Trigger,
    /// Host timestamp in microseconds.
    pub timestamp_us: u64,
    /// Viewport height used for every check in this pass.
    pub viewport_height: f64,
}

impl PassBeginEvent {
    /// Creates a `PassBeginEvent` from a [`Pass`] and the viewport height
    /// read for it.
    #[must_use]
    pub fn new(pass: &Pass, viewport_height: f64) -> Self {
        Self {
            pass_index: pass.index,
            trigger: pass.trigger,
            timestamp_us: pass.timestamp_us,
            viewport_height,
        }
    }
}

/// Emitted for every candidate after the predicate has been evaluated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementCheckedEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// Position of the element in the candidate traversal.
    pub element_index: u32,
    /// Top edge in viewport coordinates.
    pub top: f64,
    /// Bottom edge in viewport coordinates.
    pub bottom: f64,
    /// Result of the predicate.
    pub in_view: bool,
    /// Marker state before this check.
    pub prior: MarkState,
}

/// Emitted when a check moves an element from unmarked to marked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementMarkedEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// Position of the element in the candidate traversal.
    pub element_index: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from update passes.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a pass begins.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called after each candidate is checked.
    fn on_element_checked(&mut self, e: &ElementCheckedEvent) {
        _ = e;
    }

    /// Called when a candidate gains the marker.
    fn on_element_marked(&mut self, e: &ElementMarkedEvent) {
        _ = e;
    }

    /// Called with the pass totals once every candidate has been visited.
    fn on_pass_end(&mut self, s: &PassSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ElementCheckedEvent`].
    #[inline]
    pub fn element_checked(&mut self, e: &ElementCheckedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_element_checked(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ElementMarkedEvent`].
    #[inline]
    pub fn element_marked(&mut self, e: &ElementMarkedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_element_marked(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassSummary`].
    #[inline]
    pub fn pass_end(&mut self, s: &PassSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_pass_end(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct Counting {
        begins: u32,
        checked: Vec<u32>,
        marked: Vec<u32>,
        ends: u32,
    }

    impl TraceSink for Counting {
        fn on_pass_begin(&mut self, _: &PassBeginEvent) {
            self.begins += 1;
        }
        fn on_element_checked(&mut self, e: &ElementCheckedEvent) {
            self.checked.push(e.element_index);
        }
        fn on_element_marked(&mut self, e: &ElementMarkedEvent) {
            self.marked.push(e.element_index);
        }
        fn on_pass_end(&mut self, _: &PassSummary) {
            self.ends += 1;
        }
    }

    fn sample_pass() -> Pass {
        Pass {
            index: 3,
            trigger: Trigger::Scroll,
            timestamp_us: 16_000,
        }
    }

    #[test]
    fn pass_begin_event_new() {
        let evt = PassBeginEvent::new(&sample_pass(), 800.0);
        assert_eq!(evt.pass_index, 3);
        assert_eq!(evt.trigger, Trigger::Scroll);
        assert_eq!(evt.timestamp_us, 16_000);
        assert_eq!(evt.viewport_height, 800.0);
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_pass_begin(&PassBeginEvent::new(&sample_pass(), 1.0));
        sink.on_element_marked(&ElementMarkedEvent {
            pass_index: 0,
            element_index: 0,
        });
        sink.on_pass_end(&PassSummary::default());
    }

    #[test]
    fn tracer_none_is_silent() {
        let mut tracer = Tracer::none();
        tracer.pass_begin(&PassBeginEvent::new(&sample_pass(), 1.0));
        tracer.pass_end(&PassSummary::default());
    }

    #[test]
    fn tracer_dispatch_follows_feature() {
        let mut sink = Counting::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.pass_begin(&PassBeginEvent::new(&sample_pass(), 800.0));
            tracer.element_checked(&ElementCheckedEvent {
                pass_index: 3,
                element_index: 0,
                top: 10.0,
                bottom: 20.0,
                in_view: true,
                prior: MarkState::Unmarked,
            });
            tracer.element_marked(&ElementMarkedEvent {
                pass_index: 3,
                element_index: 0,
            });
            tracer.pass_end(&PassSummary::default());
        }

        if cfg!(feature = "trace") {
            assert_eq!(sink.begins, 1);
            assert_eq!(sink.checked, [0]);
            assert_eq!(sink.marked, [0]);
            assert_eq!(sink.ends, 1);
        } else {
            assert_eq!(sink.begins, 0);
            assert!(sink.checked.is_empty());
            assert!(sink.marked.is_empty());
            assert_eq!(sink.ends, 0);
        }
    }
}
