// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thin helpers over `web-sys`: lookups, class and style writes, and RAII
//! handles for listeners and timers.

use kurbo::Rect;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window,
};

use crate::AttachError;

pub(crate) fn window() -> Result<Window, AttachError> {
    web_sys::window().ok_or(AttachError::MissingElement("window"))
}

pub(crate) fn document() -> Result<Document, AttachError> {
    window()?
        .document()
        .ok_or(AttachError::MissingElement("document"))
}

/// Viewport width in CSS pixels.
pub(crate) fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Viewport height in CSS pixels.
pub(crate) fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// First match of `selector` under `root`, as an [`HtmlElement`].
pub(crate) fn query(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into().ok())
}

/// First match of `selector` in the document.
pub(crate) fn query_doc(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into().ok())
}

/// All matches of `selector` under `root`, in document order.
pub(crate) fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(|list| collect_nodes(&list))
        .unwrap_or_default()
}

/// All matches of `selector` in the document, in document order.
pub(crate) fn query_all_doc(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .query_selector_all(selector)
        .map(|list| collect_nodes(&list))
        .unwrap_or_default()
}

fn collect_nodes(list: &web_sys::NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into().ok())
        .collect()
}

/// Element with `id`, as an [`HtmlElement`].
pub(crate) fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into().ok())
}

/// Sets or clears `class` on `element`.
pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        tracing::trace!(?err, class, "class toggle failed");
    }
}

/// Sets one inline style property. Empty values remove the property.
pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let style = element.style();
    let written = if value.is_empty() {
        style.remove_property(property).map(drop)
    } else {
        style.set_property(property, value)
    };
    if let Err(err) = written {
        tracing::trace!(?err, property, "style write failed");
    }
}

/// Bounding box of `element` in viewport coordinates.
pub(crate) fn client_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

/// Millisecond clock for animation timing.
pub(crate) fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map_or_else(js_sys::Date::now, |p| p.now())
}

/// Runs `f` once after `delay_ms`. The callback is owned by the browser.
pub(crate) fn set_timeout(window: &Window, delay_ms: u32, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(err) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        tracing::warn!(?err, "setTimeout failed");
    }
}

/// An event listener that is removed when dropped.
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Listens for `event` on `target`.
    pub(crate) fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, AttachError> {
        Self::with_passive(target, event, false, callback)
    }

    /// Listens for `event` on `target` without ever calling `preventDefault`,
    /// which keeps touch scrolling smooth.
    pub(crate) fn passive(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, AttachError> {
        Self::with_passive(target, event, true, callback)
    }

    fn with_passive(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, AttachError> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

/// A `setInterval` timer that is cleared when dropped.
pub(crate) struct Interval {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Calls `callback` every `period_ms`.
    pub(crate) fn new(
        window: &Window,
        period_ms: u64,
        callback: impl FnMut() + 'static,
    ) -> Result<Self, AttachError> {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let period = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period,
        )?;
        Ok(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

impl std::fmt::Debug for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
