// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! `Vec<RecordedEvent>`, in the order the pass emitted them.

use reveal_core::trace::{ElementCheckedEvent, ElementMarkedEvent, PassBeginEvent, TraceSink};
use reveal_core::update::PassSummary;

/// One recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_pass_begin`].
    PassBegin(PassBeginEvent),
    /// See [`TraceSink::on_element_checked`].
    ElementChecked(ElementCheckedEvent),
    /// See [`TraceSink::on_element_marked`].
    ElementMarked(ElementMarkedEvent),
    /// See [`TraceSink::on_pass_end`].
    PassEnd(PassSummary),
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
    /// Drop [`RecordedEvent::ElementChecked`] events to reduce memory on long
    /// scroll sessions.
    skip_checks: bool,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that keeps pass and mark events only.
    #[must_use]
    pub fn without_checks() -> Self {
        Self {
            events: Vec::new(),
            skip_checks: true,
        }
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the summaries of every completed pass.
    pub fn summaries(&self) -> impl Iterator<Item = &PassSummary> {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::PassEnd(s) => Some(s),
            _ => None,
        })
    }
}

impl TraceSink for RecorderSink {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        self.events.push(RecordedEvent::PassBegin(*e));
    }

    fn on_element_checked(&mut self, e: &ElementCheckedEvent) {
        if !self.skip_checks {
            self.events.push(RecordedEvent::ElementChecked(*e));
        }
    }

    fn on_element_marked(&mut self, e: &ElementMarkedEvent) {
        self.events.push(RecordedEvent::ElementMarked(*e));
    }

    fn on_pass_end(&mut self, s: &PassSummary) {
        self.events.push(RecordedEvent::PassEnd(*s));
    }
}
