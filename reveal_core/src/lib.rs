// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport visibility checks and one-way reveal marking.
//!
//! `reveal_core` decides which candidate elements sit fully inside the
//! vertical extent of the viewport and flags them with a marker so that an
//! external stylesheet can run a reveal transition. It is `no_std`
//! compatible and knows nothing about any particular document model:
//! platform backends implement the [`host`] traits over their live element
//! tree.
//!
//! # Architecture
//!
//! ```text
//!   Backend trigger (scroll / ready / manual)
//!       │
//!       ▼
//!   Pass ──► check_visibility() ──► RevealHost::candidates()
//!                 │                        │
//!                 │                        ▼
//!                 │            is_in_viewport(bounds, viewport)
//!                 │                        │
//!                 ▼                        ▼
//!            PassSummary           Revealable::mark()
//! ```
//!
//! **[`viewport`]** — The fully-visible-vertically predicate.
//!
//! **[`host`]** — [`Revealable`](host::Revealable) and
//! [`RevealHost`](host::RevealHost), the seam backends implement, plus the
//! per-element [`MarkState`](host::MarkState).
//!
//! **[`update`]** — A single update pass over the current candidate set.
//!
//! **[`config`]** — Selector and marker class names shared with the markup
//! and stylesheet layers.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! pass instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod host;
pub mod trace;
pub mod update;
pub mod viewport;
