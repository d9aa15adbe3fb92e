// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use reveal_core::host::MarkState;
use reveal_core::trace::{ElementCheckedEvent, ElementMarkedEvent, PassBeginEvent, TraceSink};
use reveal_core::update::PassSummary;

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    /// Emit a line for every checked element, not just marks and passes.
    verbose: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            verbose: false,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            verbose: false,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            verbose: false,
        }
    }

    /// Also print a line for every element check.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn state_name(state: MarkState) -> &'static str {
    match state {
        MarkState::Unmarked => "unmarked",
        MarkState::Marked => "marked",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] pass={} trigger={} at {}µs viewport={:.1}px",
            e.pass_index,
            e.trigger.as_str(),
            e.timestamp_us,
            e.viewport_height,
        );
    }

    fn on_element_checked(&mut self, e: &ElementCheckedEvent) {
        if !self.verbose {
            return;
        }
        let verdict = if e.in_view { "in-view" } else { "out" };
        let _ = writeln!(
            self.writer,
            "[check] pass={} element={} top={:.1} bottom={:.1} {verdict} was={}",
            e.pass_index,
            e.element_index,
            e.top,
            e.bottom,
            state_name(e.prior),
        );
    }

    fn on_element_marked(&mut self, e: &ElementMarkedEvent) {
        let _ = writeln!(
            self.writer,
            "[mark] pass={} element={}",
            e.pass_index, e.element_index,
        );
    }

    fn on_pass_end(&mut self, s: &PassSummary) {
        let _ = writeln!(
            self.writer,
            "[pass:end] pass={} candidates={} in_view={} newly_marked={}",
            s.pass_index, s.candidates, s.in_view, s.newly_marked,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_core::update::{Pass, Trigger};

    fn checked(in_view: bool) -> ElementCheckedEvent {
        ElementCheckedEvent {
            pass_index: 2,
            element_index: 5,
            top: 100.0,
            bottom: 300.0,
            in_view,
            prior: MarkState::Unmarked,
        }
    }

    #[test]
    fn pretty_print_pass_begin() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        let pass = Pass {
            index: 2,
            trigger: Trigger::Scroll,
            timestamp_us: 16_000,
        };
        sink.on_pass_begin(&PassBeginEvent::new(&pass, 800.0));
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("[pass:begin]"), "got: {output}");
        assert!(output.contains("trigger=scroll"), "got: {output}");
        assert!(output.contains("viewport=800.0px"), "got: {output}");
    }

    #[test]
    fn checks_are_quiet_unless_verbose() {
        let mut quiet = PrettyPrintSink::with_writer(Vec::<u8>::new());
        quiet.on_element_checked(&checked(true));
        assert!(quiet.into_inner().is_empty());

        let mut loud = PrettyPrintSink::with_writer(Vec::<u8>::new()).verbose(true);
        loud.on_element_checked(&checked(false));
        let output = String::from_utf8(loud.into_inner()).unwrap();
        assert!(output.contains("element=5"), "got: {output}");
        assert!(output.contains(" out "), "got: {output}");
        assert!(output.contains("was=unmarked"), "got: {output}");
    }

    #[test]
    fn pretty_print_summary() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_pass_end(&PassSummary {
            pass_index: 4,
            candidates: 3,
            in_view: 2,
            newly_marked: 1,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "[pass:end] pass=4 candidates=3 in_view=2 newly_marked=1\n"
        );
    }
}
