// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads events recorded by a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes
//! [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use reveal_core::update::Trigger;

use crate::recorder::RecordedEvent;

/// Chrome trace thread id used for passes of each trigger.
fn trigger_track(trigger: Trigger) -> u32 {
    match trigger {
        Trigger::Ready => 0,
        Trigger::Scroll => 1,
        Trigger::Manual => 2,
    }
}

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Passes carry a single host timestamp, so every event of a pass is placed
/// at the timestamp of its `PassBegin`. Each pass becomes a `B`/`E` pair on
/// the track (`tid`) of its trigger; checks and marks are instant events
/// inside it.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::new();
    let mut pass_ts: u64 = 0;
    let mut pass_trigger = Trigger::Manual;

    for recorded in events {
        match recorded {
            RecordedEvent::PassBegin(e) => {
                pass_ts = e.timestamp_us;
                pass_trigger = e.trigger;
                out.push(json!({
                    "ph": "B",
                    "name": "Pass",
                    "cat": pass_trigger.as_str(),
                    "ts": pass_ts,
                    "pid": 0,
                    "tid": trigger_track(pass_trigger),
                    "args": {
                        "pass_index": e.pass_index,
                        "viewport_height": e.viewport_height,
                    }
                }));
            }
            RecordedEvent::ElementChecked(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Check",
                    "cat": pass_trigger.as_str(),
                    "ts": pass_ts,
                    "pid": 0,
                    "tid": trigger_track(pass_trigger),
                    "s": "t",
                    "args": {
                        "pass_index": e.pass_index,
                        "element_index": e.element_index,
                        "top": e.top,
                        "bottom": e.bottom,
                        "in_view": e.in_view,
                        "prior": format!("{:?}", e.prior),
                    }
                }));
            }
            RecordedEvent::ElementMarked(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Mark",
                    "cat": pass_trigger.as_str(),
                    "ts": pass_ts,
                    "pid": 0,
                    "tid": trigger_track(pass_trigger),
                    "s": "t",
                    "args": {
                        "pass_index": e.pass_index,
                        "element_index": e.element_index,
                    }
                }));
            }
            RecordedEvent::PassEnd(s) => {
                out.push(json!({
                    "ph": "E",
                    "name": "Pass",
                    "cat": pass_trigger.as_str(),
                    "ts": pass_ts,
                    "pid": 0,
                    "tid": trigger_track(pass_trigger),
                    "args": {
                        "pass_index": s.pass_index,
                        "candidates": s.candidates,
                        "in_view": s.in_view,
                        "newly_marked": s.newly_marked,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}
