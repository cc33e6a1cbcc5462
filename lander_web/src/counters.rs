// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Count-up numbers, started when they scroll into view and animated on
//! animation frames.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use lander_page::{AnimatedCounter, COUNTER_VISIBILITY_THRESHOLD, CounterSpec};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::AttachError;
use crate::dom;

struct CounterDom {
    element: HtmlElement,
    counter: AnimatedCounter,
}

struct CountersState {
    window: Window,
    counters: Vec<CounterDom>,
    frame_pending: bool,
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(window: &Window, slot: &RefCell<Option<Closure<dyn FnMut(f64)>>>) -> bool {
    let slot = slot.borrow();
    let Some(callback) = slot.as_ref() else {
        return false;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(?err, "requestAnimationFrame failed");
            false
        }
    }
}

impl CountersState {
    /// Starts every counter whose element is among `visible`.
    fn start_visible(&mut self, visible: &[web_sys::Element]) -> bool {
        let now = dom::now_ms(&self.window);
        let mut started = false;
        for entry in &mut self.counters {
            let shown = visible
                .iter()
                .any(|target| entry.element.is_same_node(Some(target.as_ref())));
            if shown && entry.counter.start(now) {
                dom::set_class(&entry.element, "counted", true);
                dom::set_class(&entry.element, "counting", true);
                started = true;
            }
        }
        started
    }

    /// Paints one frame. Returns `true` while any counter is still running.
    fn frame(&mut self, now: f64) -> bool {
        let mut running = false;
        for entry in &mut self.counters {
            let Some(text) = entry.counter.frame(now) else {
                continue;
            };
            entry.element.set_text_content(Some(&text));
            if entry.counter.is_finished() {
                dom::set_class(&entry.element, "counting", false);
                dom::set_class(&entry.element, "count-complete", true);
            } else {
                running = true;
            }
        }
        running
    }
}

/// Observes `[data-count]` elements and animates them once each.
pub(crate) struct CountersBinding {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    _frame: FrameSlot,
}

impl std::fmt::Debug for CountersBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountersBinding").finish_non_exhaustive()
    }
}

impl CountersBinding {
    /// Observes the page's counters. Elements whose `data-count` is not a
    /// number are left alone.
    pub(crate) fn attach(window: &Window, document: &Document) -> Result<Option<Self>, AttachError> {
        let counters: Vec<CounterDom> = dom::query_all_doc(document, "[data-count]")
            .into_iter()
            .filter_map(|element| {
                let data = element.dataset();
                let spec = CounterSpec::from_attributes(
                    &data.get("count")?,
                    data.get("prefix").as_deref(),
                    data.get("suffix").as_deref(),
                )?;
                Some(CounterDom {
                    element,
                    counter: AnimatedCounter::new(spec),
                })
            })
            .collect();
        if counters.is_empty() {
            return Ok(None);
        }
        let elements: Vec<HtmlElement> = counters.iter().map(|c| c.element.clone()).collect();
        let state = Rc::new(RefCell::new(CountersState {
            window: window.clone(),
            counters,
            frame_pending: false,
        }));

        let slot: FrameSlot = Rc::new(RefCell::new(None));
        {
            let state = state.clone();
            let weak: Weak<RefCell<_>> = Rc::downgrade(&slot);
            *slot.borrow_mut() = Some(Closure::new(move |now: f64| {
                let mut inner = state.borrow_mut();
                let running = inner.frame(now);
                let continued = running
                    && weak
                        .upgrade()
                        .is_some_and(|slot| request_frame(&inner.window, &slot));
                inner.frame_pending = continued;
            }));
        }

        let on_intersect = {
            let state = state.clone();
            let weak = Rc::downgrade(&slot);
            Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, _observer| {
                    let visible: Vec<web_sys::Element> = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .filter(IntersectionObserverEntry::is_intersecting)
                        .map(|entry| entry.target())
                        .collect();
                    let mut inner = state.borrow_mut();
                    if !inner.start_visible(&visible) || inner.frame_pending {
                        return;
                    }
                    let requested = weak
                        .upgrade()
                        .is_some_and(|slot| request_frame(&inner.window, &slot));
                    inner.frame_pending = requested;
                },
            )
        };
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(COUNTER_VISIBILITY_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )?;
        for element in &elements {
            observer.observe(element);
        }
        tracing::debug!(count = elements.len(), "counters observed");
        Ok(Some(Self {
            observer,
            _on_intersect: on_intersect,
            _frame: slot,
        }))
    }
}

impl Drop for CountersBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
