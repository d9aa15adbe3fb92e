// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for reveal.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomRevealHost`]: candidate lookup, geometry reads, and marking over a
//!   live `Document`
//! - [`ScrollReveal`]: the window `scroll` and document `DOMContentLoaded`
//!   bindings that run an update pass on every signal

#![no_std]

extern crate alloc;

mod binding;
mod clock;
mod dom;

pub use binding::ScrollReveal;
pub use clock::now_us;
pub use dom::{DomCandidate, DomRevealHost, is_in_viewport};
pub use reveal_core::config::RevealConfig;
pub use reveal_core::update::{PassSummary, Trigger};
