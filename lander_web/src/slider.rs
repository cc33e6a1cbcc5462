// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM binding for the full-width accommodation [`WrapSlider`].

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use lander_carousel::WrapSlider;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::AttachError;
use crate::carousel::touch_x;
use crate::dom::{self, Listener};

const SLIDER_ID: &str = "accommodationSlider";
const SLIDE: &str = ".accommodation-slide";
const DOT: &str = ".accommodation-nav__dot";
const ARROW_PREVIOUS: &str = ".accommodation-nav__arrow--prev";
const ARROW_NEXT: &str = ".accommodation-nav__arrow--next";

struct SliderDom {
    slider: WrapSlider,
    container: HtmlElement,
    dots: Vec<HtmlElement>,
}

impl SliderDom {
    fn render(&self) {
        dom::set_style(&self.container, "transform", &self.slider.container_transform());
        let flags = self.slider.dots(self.dots.len());
        for (dot, flag) in self.dots.iter().zip(flags) {
            dom::set_class(dot, "active", flag.is_active());
        }
    }

    fn apply(&mut self, f: impl FnOnce(&mut WrapSlider)) {
        f(&mut self.slider);
        self.render();
    }
}

/// The accommodation slider and its listeners.
#[derive(Default)]
pub(crate) struct SliderBinding {
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for SliderBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderBinding")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SliderBinding {
    /// Wires the slider if the page has one.
    ///
    /// Navigation arrows and dots live outside the slider container, so they
    /// are looked up in the whole document.
    pub(crate) fn attach(document: &Document) -> Result<Option<Self>, AttachError> {
        let Some(container) = dom::by_id(document, SLIDER_ID) else {
            return Ok(None);
        };
        let slide_count = dom::query_all(&container, SLIDE).len();
        let dots = dom::query_all_doc(document, DOT);
        let state = Rc::new(RefCell::new(SliderDom {
            slider: WrapSlider::new(slide_count),
            container: container.clone(),
            dots: dots.clone(),
        }));
        state.borrow().render();

        let mut listeners = Vec::new();
        if let Some(arrow) = dom::query_doc(document, ARROW_PREVIOUS) {
            let state = state.clone();
            listeners.push(Listener::new(&arrow, "click", move |_| {
                state.borrow_mut().apply(WrapSlider::previous);
            })?);
        }
        if let Some(arrow) = dom::query_doc(document, ARROW_NEXT) {
            let state = state.clone();
            listeners.push(Listener::new(&arrow, "click", move |_| {
                state.borrow_mut().apply(WrapSlider::next);
            })?);
        }
        for (index, dot) in dots.iter().enumerate() {
            let state = state.clone();
            let index = isize::try_from(index).unwrap_or(isize::MAX);
            listeners.push(Listener::new(dot, "click", move |_| {
                state.borrow_mut().apply(|s| s.go_to(index));
            })?);
        }
        {
            let state = state.clone();
            listeners.push(Listener::passive(&container, "touchstart", move |event| {
                if let Some(x) = touch_x(event.unchecked_ref()) {
                    state.borrow_mut().slider.on_touch_start(Point::new(x, 0.0));
                }
            })?);
        }
        {
            let state = state.clone();
            listeners.push(Listener::passive(&container, "touchend", move |event| {
                let Some(x) = touch_x(event.unchecked_ref()) else {
                    return;
                };
                let mut inner = state.borrow_mut();
                if inner.slider.on_touch_end(Point::new(x, 0.0)).is_some() {
                    inner.render();
                }
            })?);
        }
        tracing::debug!(slide_count, "accommodation slider attached");
        Ok(Some(Self { listeners }))
    }
}
