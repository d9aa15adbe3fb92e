// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window `scroll` and document `DOMContentLoaded` bindings.
//!
//! [`ScrollReveal`] registers one closure per signal. Each closure runs a full
//! [`check_visibility`] pass synchronously and returns; nothing is queued,
//! debounced, or deferred. The browser's single-threaded event dispatch means
//! passes never overlap.
//!
//! [`check_visibility`]: reveal_core::update::check_visibility

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, Window};

use reveal_core::config::RevealConfig;
use reveal_core::trace::{TraceSink, Tracer};
use reveal_core::update::{Pass, PassSummary, Trigger, check_visibility};

use crate::clock::now_us;
use crate::dom::DomRevealHost;

const SCROLL_EVENT: &str = "scroll";
const READY_EVENT: &str = "DOMContentLoaded";

type EventClosure = Closure<dyn FnMut()>;

/// Runs an update pass on every window `scroll` and on document ready.
///
/// Create with [`ScrollReveal::attach`]. The listeners stay registered until
/// the `ScrollReveal` is dropped; a page that wants them for its whole
/// lifetime can `core::mem::forget` it.
pub struct ScrollReveal {
    inner: Rc<RevealInner>,
}

struct RevealInner {
    host: DomRevealHost,

    /// Monotonically increasing pass counter (becomes `Pass::index`).
    pass_counter: Cell<u64>,

    /// Optional diagnostics sink for every pass.
    sink: RefCell<Option<Box<dyn TraceSink>>>,

    /// The JS closure registered for `scroll` on the window.
    scroll: RefCell<Option<EventClosure>>,

    /// The JS closure registered for `DOMContentLoaded` on the document.
    ready: RefCell<Option<EventClosure>>,
}

impl RevealInner {
    fn run_pass(&self, trigger: Trigger) -> PassSummary {
        let index = self.pass_counter.get();
        self.pass_counter.set(index + 1);

        let pass = Pass {
            index,
            trigger,
            timestamp_us: now_us(),
        };

        let mut sink = self.sink.borrow_mut();
        let mut tracer = match sink.as_deref_mut() {
            Some(sink) => Tracer::new(sink),
            None => Tracer::none(),
        };
        check_visibility(&self.host, pass, &mut tracer)
    }

    fn closure_for(self: &Rc<Self>, trigger: Trigger) -> EventClosure {
        let inner = Rc::clone(self);
        Closure::wrap(Box::new(move || {
            inner.run_pass(trigger);
        }) as Box<dyn FnMut()>)
    }

    fn listen(
        target: &EventTarget,
        event: &str,
        slot: &RefCell<Option<EventClosure>>,
        closure: EventClosure,
    ) -> Result<(), JsValue> {
        let result =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        // Stored even on failure so `Drop` frees it with the rest.
        *slot.borrow_mut() = Some(closure);
        result
    }

    fn unlisten(target: &EventTarget, event: &str, slot: &RefCell<Option<EventClosure>>) {
        if let Some(closure) = slot.borrow_mut().take() {
            let _ =
                target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

impl ScrollReveal {
    /// Registers the `scroll` and `DOMContentLoaded` listeners.
    ///
    /// If the document has already left the `loading` state, the ready pass
    /// runs before this returns, since `DOMContentLoaded` will not fire again.
    ///
    /// # Errors
    ///
    /// Returns the thrown value if `window` has no document or if either
    /// listener cannot be registered. Anything already registered is removed
    /// again before returning.
    pub fn attach(window: Window, config: RevealConfig) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let already_loaded = document.ready_state() != "loading";

        let reveal = Self {
            inner: Rc::new(RevealInner {
                host: DomRevealHost::new(window, document, config),
                pass_counter: Cell::new(0),
                sink: RefCell::new(None),
                scroll: RefCell::new(None),
                ready: RefCell::new(None),
            }),
        };

        // On error `reveal` drops here, which unregisters and frees both
        // closures.
        let inner = &reveal.inner;
        RevealInner::listen(
            inner.host.window(),
            SCROLL_EVENT,
            &inner.scroll,
            inner.closure_for(Trigger::Scroll),
        )?;
        RevealInner::listen(
            inner.host.document(),
            READY_EVENT,
            &inner.ready,
            inner.closure_for(Trigger::Ready),
        )?;

        if already_loaded {
            inner.run_pass(Trigger::Ready);
        }
        Ok(reveal)
    }

    /// Attaches to the global window with [`RevealConfig::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns an error outside a browser window context, or anything
    /// [`attach`](Self::attach) returns.
    pub fn attach_default() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        Self::attach(window, RevealConfig::DEFAULT)
    }

    /// Runs a [`Trigger::Manual`] pass immediately.
    ///
    /// Useful after inserting new candidates without scrolling.
    pub fn check_now(&self) -> PassSummary {
        self.inner.run_pass(Trigger::Manual)
    }

    /// Installs a sink that receives trace events from every later pass.
    ///
    /// Events are only delivered when the `trace` feature is enabled.
    pub fn set_trace_sink(&self, sink: Box<dyn TraceSink>) {
        *self.inner.sink.borrow_mut() = Some(sink);
    }

    /// Removes and returns the installed sink, if any.
    pub fn take_trace_sink(&self) -> Option<Box<dyn TraceSink>> {
        self.inner.sink.borrow_mut().take()
    }

    /// Returns the number of passes run so far.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.inner.pass_counter.get()
    }

    /// Returns the underlying host.
    #[must_use]
    pub fn host(&self) -> &DomRevealHost {
        &self.inner.host
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        let inner = &self.inner;
        // Dropping the closures also drops their `Rc` clones of `inner`.
        RevealInner::unlisten(inner.host.window(), SCROLL_EVENT, &inner.scroll);
        RevealInner::unlisten(inner.host.document(), READY_EVENT, &inner.ready);
    }
}

impl core::fmt::Debug for ScrollReveal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollReveal")
            .field("host", &self.inner.host)
            .field("passes", &self.inner.pass_counter.get())
            .field("scroll_bound", &self.inner.scroll.borrow().is_some())
            .field("ready_bound", &self.inner.ready.borrow().is_some())
            .finish_non_exhaustive()
    }
}
