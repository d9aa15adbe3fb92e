// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate lookup and marking over a live `Document`.
//!
//! [`DomRevealHost`] implements [`RevealHost`] by running
//! `querySelectorAll` on every pass and reading `window.innerHeight` as the
//! viewport. Each match is wrapped in a [`DomCandidate`] whose geometry comes
//! from `getBoundingClientRect()` and whose marker is a class in its
//! `classList`.

use kurbo::Rect;
use reveal_core::config::RevealConfig;
use reveal_core::host::{RevealHost, Revealable};
use reveal_core::viewport::{self, Viewport};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, NodeList, Window};

/// Reads the viewport height from `window.innerHeight`.
fn read_viewport(window: &Window) -> Viewport {
    viewport_from_inner_height(window.inner_height())
}

/// Maps the result of an `innerHeight` read to a [`Viewport`].
///
/// A thrown read or a non-numeric value yields [`Viewport::EMPTY`].
fn viewport_from_inner_height(height: Result<JsValue, JsValue>) -> Viewport {
    height
        .ok()
        .and_then(|h| h.as_f64())
        .map_or(Viewport::EMPTY, Viewport::new)
}

/// Reads an element's `getBoundingClientRect()` as a [`Rect`].
fn read_bounds(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

/// Returns `true` iff `element` is fully within the vertical extent of
/// `window`'s viewport.
///
/// One live geometry read; no side effects.
#[must_use]
pub fn is_in_viewport(element: &Element, window: &Window) -> bool {
    viewport::is_in_viewport(read_bounds(element), read_viewport(window))
}

/// A [`RevealHost`] over a browser document.
pub struct DomRevealHost {
    window: Window,
    document: Document,
    config: RevealConfig,
}

impl core::fmt::Debug for DomRevealHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomRevealHost")
            .field("window", &"Window")
            .field("document", &"Document")
            .field("config", &self.config)
            .finish()
    }
}

impl DomRevealHost {
    /// Creates a host over `document`, reading the viewport from `window`.
    #[must_use]
    pub fn new(window: Window, document: Document, config: RevealConfig) -> Self {
        Self {
            window,
            document,
            config,
        }
    }

    /// Returns the window scroll and viewport reads come from.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the document candidates are queried from.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the selector and marker class in use.
    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Runs `querySelectorAll` with the configured selector.
    ///
    /// An invalid selector throws in the browser; that is treated as an empty
    /// candidate set.
    fn query(&self) -> Option<NodeList> {
        self.document.query_selector_all(self.config.selector).ok()
    }
}

impl RevealHost for DomRevealHost {
    type Element<'a> = DomCandidate;

    fn viewport(&self) -> Viewport {
        read_viewport(&self.window)
    }

    fn candidates(&self) -> impl Iterator<Item = Self::Element<'_>> + '_ {
        let nodes = self.query();
        let len = nodes.as_ref().map_or(0, NodeList::length);
        let marker_class = self.config.marker_class;
        (0..len)
            .filter_map(move |i| nodes.as_ref()?.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(move |element| DomCandidate {
                element,
                marker_class,
            })
    }
}

/// One element matched by the candidate selector.
#[derive(Clone)]
pub struct DomCandidate {
    element: Element,
    marker_class: &'static str,
}

impl core::fmt::Debug for DomCandidate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomCandidate")
            .field("element", &"Element")
            .field("marker_class", &self.marker_class)
            .finish()
    }
}

impl DomCandidate {
    /// Returns the underlying element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Revealable for DomCandidate {
    fn bounds(&self) -> Rect {
        read_bounds(&self.element)
    }

    fn is_marked(&self) -> bool {
        self.element.class_list().contains(self.marker_class)
    }

    fn mark(&self) {
        // `classList.add` only throws for empty or whitespace-bearing tokens.
        let _ = self.element.class_list().add_1(self.marker_class);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn place(document: &Document, class: &str, top: i32, height: i32) -> Element {
        let el = document.create_element("div").unwrap();
        el.set_class_name(class);
        el.set_attribute(
            "style",
            &alloc::format!("position:fixed;left:0;top:{top}px;height:{height}px;width:10px"),
        )
        .unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    fn host_for(config: RevealConfig) -> DomRevealHost {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        DomRevealHost::new(window, document, config)
    }

    #[wasm_bindgen_test]
    fn failed_inner_height_read_is_empty_viewport() {
        assert_eq!(viewport_from_inner_height(Err(JsValue::NULL)), Viewport::EMPTY);
        assert_eq!(
            viewport_from_inner_height(Ok(JsValue::from_str("tall"))),
            Viewport::EMPTY
        );
        assert_eq!(
            viewport_from_inner_height(Ok(JsValue::from_f64(640.0))),
            Viewport::new(640.0)
        );
    }

    #[wasm_bindgen_test]
    fn invalid_selector_has_no_candidates() {
        let host = host_for(RevealConfig::new("[[", "visible"));
        assert_eq!(host.config().selector, "[[");
        assert_eq!(host.candidates().count(), 0);
    }

    #[wasm_bindgen_test]
    fn candidates_follow_document_order_and_membership() {
        let host = host_for(RevealConfig::new(".dom-order", "seen"));
        let document = host.document().clone();
        let first = place(&document, "dom-order", 10, 20);
        let second = place(&document, "dom-order", 40, 20);

        let found: Vec<Element> = host.candidates().map(|c| c.element().clone()).collect();
        assert_eq!(found, [first.clone(), second.clone()]);

        // Membership is re-read on every call.
        second.remove();
        assert_eq!(host.candidates().count(), 1);
        first.remove();
        assert_eq!(host.candidates().count(), 0);
    }

    #[wasm_bindgen_test]
    fn marking_is_an_idempotent_class_add() {
        let host = host_for(RevealConfig::new(".dom-mark", "seen"));
        let el = place(host.document(), "dom-mark", 10, 20);

        let candidate = host.candidates().next().unwrap();
        assert!(!candidate.is_marked());
        candidate.mark();
        candidate.mark();
        assert!(candidate.is_marked());
        assert_eq!(el.class_name(), "dom-mark seen");
        el.remove();
    }

    #[wasm_bindgen_test]
    fn live_element_predicate() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let inside = place(&document, "dom-live", 10, 20);
        let above = place(&document, "dom-live", -50, 100);

        assert!(is_in_viewport(&inside, &window));
        assert!(!is_in_viewport(&above, &window));
        inside.remove();
        above.remove();
    }
}
