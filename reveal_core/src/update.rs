// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single update pass over the current candidate set.
//!
//! [`check_visibility`] is the whole behavior: read the viewport, walk the
//! host's candidates, and mark every one that is fully in view. Passes are
//! independent and stateless; the only thing that persists between them is
//! the marker on the elements themselves, which is only ever added.
//!
//! Triggers are not coalesced. Every scroll signal the host delivers runs a
//! full pass.

use crate::host::{Revealable, RevealHost};
use crate::trace::{ElementCheckedEvent, ElementMarkedEvent, PassBeginEvent, Tracer};
use crate::viewport::is_in_viewport;

/// What caused a pass to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The document finished loading (or had already finished when the
    /// bindings were attached).
    Ready,
    /// The window scrolled.
    Scroll,
    /// Requested directly by application code.
    Manual,
}

impl Trigger {
    /// Short lowercase label for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Scroll => "scroll",
            Self::Manual => "manual",
        }
    }
}

/// Identifies one pass for tracing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pass {
    /// Monotonically increasing pass counter assigned by the caller.
    pub index: u64,
    /// What caused the pass.
    pub trigger: Trigger,
    /// Host timestamp in microseconds, or 0 if the caller has no clock.
    pub timestamp_us: u64,
}

impl Pass {
    /// A pass with no timestamp.
    #[must_use]
    pub const fn new(index: u64, trigger: Trigger) -> Self {
        Self {
            index,
            trigger,
            timestamp_us: 0,
        }
    }
}

/// Totals for one pass.
///
/// Purely diagnostic; nothing in the pass depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Pass counter.
    pub pass_index: u64,
    /// Number of candidates visited.
    pub candidates: u32,
    /// Candidates that were fully in view, marked or not.
    pub in_view: u32,
    /// Candidates that moved from unmarked to marked in this pass.
    pub newly_marked: u32,
}

/// Runs one update pass against `host`.
///
/// The viewport is read once. Each candidate's bounds are read once and
/// tested with [`is_in_viewport`]; those in view receive the marker unless
/// they already carry it. Elements out of view are left alone, so a marker
/// set by an earlier pass survives. An empty candidate set is a no-op.
pub fn check_visibility<H: RevealHost>(
    host: &H,
    pass: Pass,
    tracer: &mut Tracer<'_>,
) -> PassSummary {
    let viewport = host.viewport();
    tracer.pass_begin(&PassBeginEvent::new(&pass, viewport.height));

    let mut summary = PassSummary {
        pass_index: pass.index,
        ..PassSummary::default()
    };

    for element in host.candidates() {
        let element_index = summary.candidates;
        summary.candidates = summary.candidates.saturating_add(1);

        let bounds = element.bounds();
        let in_view = is_in_viewport(bounds, viewport);
        let prior = element.mark_state();

        tracer.element_checked(&ElementCheckedEvent {
            pass_index: pass.index,
            element_index,
            top: bounds.y0,
            bottom: bounds.y1,
            in_view,
            prior,
        });

        if !in_view {
            continue;
        }
        summary.in_view = summary.in_view.saturating_add(1);

        if !prior.is_marked() {
            element.mark();
            summary.newly_marked = summary.newly_marked.saturating_add(1);
            tracer.element_marked(&ElementMarkedEvent {
                pass_index: pass.index,
                element_index,
            });
        }
    }

    tracer.pass_end(&summary);
    summary
}
