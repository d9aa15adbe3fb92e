// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: `.info__content` sections gain the `visible` class once they
//! have been fully inside the viewport, and `index.html`'s stylesheet fades
//! them in.
//!
//! Build with: `wasm-pack build --target web demos/reveal_page`
//!
//! Then serve `demos/reveal_page/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::format;

use wasm_bindgen::prelude::*;

use reveal_backend_web::{RevealConfig, ScrollReveal};
use reveal_core::trace::{ElementMarkedEvent, TraceSink};
use reveal_core::update::PassSummary;

/// Logs marks and non-empty pass totals to the browser console.
#[derive(Debug, Default)]
struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn on_element_marked(&mut self, e: &ElementMarkedEvent) {
        web_sys::console::log_1(
            &format!("[mark] pass={} element={}", e.pass_index, e.element_index).into(),
        );
    }

    fn on_pass_end(&mut self, s: &PassSummary) {
        if s.newly_marked == 0 {
            return;
        }
        web_sys::console::log_1(
            &format!(
                "[pass:end] pass={} candidates={} newly_marked={}",
                s.pass_index, s.candidates, s.newly_marked
            )
            .into(),
        );
    }
}

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let reveal = ScrollReveal::attach(window, RevealConfig::DEFAULT)?;
    reveal.set_trace_sink(alloc::boxed::Box::new(ConsoleSink));

    // The listeners live for the lifetime of the page.
    core::mem::forget(reveal);
    Ok(())
}
