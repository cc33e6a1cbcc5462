// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM binding for [`Carousel`].

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use lander_carousel::{Carousel, CarouselConfig};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, TouchEvent, Window};

use crate::AttachError;
use crate::dom::{self, Interval, Listener};

const TRACK: &str = ".carousel__track";
const SLIDE: &str = ".carousel__slide";
const DOT: &str = ".carousel__dot";
const ARROW_PREVIOUS: &str = ".carousel__arrow--left";
const ARROW_NEXT: &str = ".carousel__arrow--right";

struct CarouselDom {
    carousel: Carousel,
    track: HtmlElement,
    dots: Vec<HtmlElement>,
}

impl CarouselDom {
    fn render(&self) {
        dom::set_style(&self.track, "transform", &self.carousel.track_transform());
        let flags = self.carousel.dots(self.dots.len());
        for (dot, flag) in self.dots.iter().zip(flags) {
            dom::set_class(dot, "active", flag.is_active());
            dom::set_style(dot, "display", if flag.is_shown() { "" } else { "none" });
        }
    }
}

type Shared = Rc<RefCell<CarouselDom>>;

/// Runs `f` on the carousel and repaints if it reports a change.
fn update(state: &Shared, f: impl FnOnce(&mut Carousel) -> bool) {
    let mut inner = state.borrow_mut();
    if f(&mut inner.carousel) {
        inner.render();
    }
}

/// Handles a dot click. Returns `true` if the index changed.
fn on_dot_click(carousel: &mut Carousel, index: usize) -> bool {
    let before = carousel.current_index();
    carousel.go_to(index) != before
}

/// Handles a `touchstart` at horizontal position `x`.
fn on_touch_start(carousel: &mut Carousel, x: f64) {
    carousel.on_touch_start(Point::new(x, 0.0));
}

/// Handles a `touchend` at horizontal position `x`. A recognized swipe moves
/// one step; returns `true` if the index changed.
fn on_touch_end(carousel: &mut Carousel, x: f64) -> bool {
    let before = carousel.current_index();
    carousel.on_touch_end(Point::new(x, 0.0)).is_some() && carousel.current_index() != before
}

/// A carousel wired to its container.
///
/// Dropping the binding removes every listener and cancels autoplay.
pub(crate) struct CarouselBinding {
    state: Shared,
    window: Window,
    listeners: Vec<Listener>,
    autoplay: Option<Interval>,
}

impl std::fmt::Debug for CarouselBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselBinding")
            .field("current_index", &self.state.borrow().carousel.current_index())
            .field("listeners", &self.listeners.len())
            .field("autoplay", &self.autoplay.is_some())
            .finish_non_exhaustive()
    }
}

impl CarouselBinding {
    /// Builds a carousel over `container` and wires arrows, dots, touch, and
    /// resize. Starts autoplay if the config asks for it.
    pub(crate) fn attach(
        window: &Window,
        container: &HtmlElement,
        config: &CarouselConfig,
    ) -> Result<Self, AttachError> {
        let track = dom::query(container, TRACK).ok_or(AttachError::MissingElement(TRACK))?;
        let slide_count = dom::query_all(container, SLIDE).len();
        let dots = dom::query_all(container, DOT);
        let carousel = Carousel::new(slide_count, config, dom::viewport_width(window))?;
        let wants_autoplay = carousel.config().autoplay();

        let state = Rc::new(RefCell::new(CarouselDom {
            carousel,
            track,
            dots,
        }));
        state.borrow().render();

        let mut listeners = Vec::new();
        if let Some(arrow) = dom::query(container, ARROW_NEXT) {
            let state = state.clone();
            listeners.push(Listener::new(&arrow, "click", move |_| {
                update(&state, Carousel::next);
            })?);
        }
        if let Some(arrow) = dom::query(container, ARROW_PREVIOUS) {
            let state = state.clone();
            listeners.push(Listener::new(&arrow, "click", move |_| {
                update(&state, Carousel::previous);
            })?);
        }
        let dot_elements = state.borrow().dots.clone();
        for (index, dot) in dot_elements.iter().enumerate() {
            let state = state.clone();
            listeners.push(Listener::new(dot, "click", move |_| {
                update(&state, |c| on_dot_click(c, index));
            })?);
        }
        {
            let state = state.clone();
            listeners.push(Listener::passive(container, "touchstart", move |event| {
                if let Some(x) = touch_x(event.unchecked_ref()) {
                    on_touch_start(&mut state.borrow_mut().carousel, x);
                }
            })?);
        }
        {
            let state = state.clone();
            listeners.push(Listener::passive(container, "touchend", move |event| {
                if let Some(x) = touch_x(event.unchecked_ref()) {
                    update(&state, |c| on_touch_end(c, x));
                }
            })?);
        }
        {
            let state = state.clone();
            listeners.push(Listener::passive(container, "touchcancel", move |_| {
                state.borrow_mut().carousel.on_touch_cancel();
            })?);
        }
        {
            let state = state.clone();
            let resize_window = window.clone();
            listeners.push(Listener::new(window, "resize", move |_| {
                let width = dom::viewport_width(&resize_window);
                // Always repaint; the CSS slide width may have changed.
                let mut inner = state.borrow_mut();
                inner.carousel.on_resize(width);
                inner.render();
            })?);
        }

        let mut binding = Self {
            state,
            window: window.clone(),
            listeners,
            autoplay: None,
        };
        if wants_autoplay {
            binding.start_autoplay()?;
        }
        tracing::debug!(slide_count, "carousel attached");
        Ok(binding)
    }

    pub(crate) fn next(&self) {
        update(&self.state, Carousel::next);
    }

    pub(crate) fn previous(&self) {
        update(&self.state, Carousel::previous);
    }

    pub(crate) fn go_to(&self, index: usize) -> usize {
        let mut inner = self.state.borrow_mut();
        let applied = inner.carousel.go_to(index);
        inner.render();
        applied
    }

    pub(crate) fn current_index(&self) -> usize {
        self.state.borrow().carousel.current_index()
    }

    /// Starts the recurring advance. Restarting replaces the running timer.
    pub(crate) fn start_autoplay(&mut self) -> Result<(), AttachError> {
        let period = self.state.borrow().carousel.autoplay_interval_ms();
        let now = dom::now_ms(&self.window);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "performance.now() is a small positive millisecond count"
        )]
        let now = now as u64;
        self.state.borrow_mut().carousel.start_autoplay(now);
        let state = self.state.clone();
        // Dropping the previous interval clears it.
        self.autoplay = Some(Interval::new(&self.window, period, move || {
            update(&state, |c| c.is_autoplay_active() && c.next());
        })?);
        Ok(())
    }

    /// Cancels the recurring advance. Safe to call repeatedly.
    pub(crate) fn stop_autoplay(&mut self) -> bool {
        self.autoplay = None;
        self.state.borrow_mut().carousel.stop_autoplay()
    }

    /// Cancels autoplay and removes all listeners.
    pub(crate) fn destroy(&mut self) {
        self.stop_autoplay();
        self.listeners.clear();
    }
}

impl Drop for CarouselBinding {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Horizontal position of the first changed touch point. `changedTouches`
/// holds the lifted finger on `touchend`, where `touches` is already empty.
pub(crate) fn touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| f64::from(touch.client_x()))
}

/// A carousel controlled from JavaScript.
#[wasm_bindgen]
#[derive(Debug)]
pub struct CarouselHandle {
    binding: Option<CarouselBinding>,
}

#[wasm_bindgen]
impl CarouselHandle {
    /// Attaches a carousel to `container`.
    ///
    /// `config_json` is a `CarouselConfig` object in JSON; omitted keys take
    /// their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, config_json: Option<String>) -> Result<Self, JsValue> {
        let config = match config_json {
            Some(json) => serde_json::from_str(&json).map_err(AttachError::from)?,
            None => CarouselConfig::default(),
        };
        let binding = CarouselBinding::attach(&dom::window()?, &container, &config)?;
        Ok(Self {
            binding: Some(binding),
        })
    }

    /// Shows the next position.
    pub fn next(&self) {
        if let Some(binding) = &self.binding {
            binding.next();
        }
    }

    /// Shows the previous position.
    pub fn previous(&self) {
        if let Some(binding) = &self.binding {
            binding.previous();
        }
    }

    /// Jumps to `index`, clamped to the last position. Returns the index
    /// shown.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: usize) -> usize {
        self.binding.as_ref().map_or(0, |b| b.go_to(index))
    }

    /// The position currently shown.
    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.binding.as_ref().map_or(0, CarouselBinding::current_index)
    }

    /// Starts autoplay with the configured interval.
    #[wasm_bindgen(js_name = startAutoplay)]
    pub fn start_autoplay(&mut self) -> Result<(), JsValue> {
        if let Some(binding) = &mut self.binding {
            binding.start_autoplay()?;
        }
        Ok(())
    }

    /// Stops autoplay.
    #[wasm_bindgen(js_name = stopAutoplay)]
    pub fn stop_autoplay(&mut self) {
        if let Some(binding) = &mut self.binding {
            binding.stop_autoplay();
        }
    }

    /// Detaches the carousel. Further calls do nothing.
    pub fn destroy(&mut self) {
        self.binding = None;
    }
}

#[cfg(test)]
mod tests {
    use lander_carousel::{Carousel, CarouselConfig};

    use super::{on_dot_click, on_touch_end, on_touch_start};

    fn festival_carousel(looping: bool) -> Carousel {
        let config = CarouselConfig::responsive(3, 2, 1).with_loop(looping);
        Carousel::new(6, &config, 1200.0).unwrap()
    }

    #[test]
    fn one_swipe_moves_one_step() {
        let mut carousel = festival_carousel(false);
        on_touch_start(&mut carousel, 400.0);
        assert!(on_touch_end(&mut carousel, 320.0));
        assert_eq!(carousel.current_index(), 1);

        on_touch_start(&mut carousel, 200.0);
        assert!(on_touch_end(&mut carousel, 300.0));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn short_drag_changes_nothing() {
        let mut carousel = festival_carousel(false);
        on_touch_start(&mut carousel, 400.0);
        assert!(!on_touch_end(&mut carousel, 370.0));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn swipe_on_two_position_loop_changes_slide() {
        // Four slides, three visible: positions 0 and 1 only.
        let config = CarouselConfig::responsive(3, 2, 1).with_loop(true);
        let mut carousel = Carousel::new(4, &config, 1200.0).unwrap();
        assert_eq!(carousel.max_index(), 1);
        on_touch_start(&mut carousel, 400.0);
        assert!(on_touch_end(&mut carousel, 300.0));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn swipe_at_the_end_reports_no_change() {
        let mut carousel = festival_carousel(false);
        carousel.go_to(3);
        on_touch_start(&mut carousel, 400.0);
        assert!(!on_touch_end(&mut carousel, 300.0));
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn dot_clicks_report_changes() {
        let mut carousel = festival_carousel(false);
        assert!(on_dot_click(&mut carousel, 2));
        assert_eq!(carousel.current_index(), 2);
        assert!(!on_dot_click(&mut carousel, 2));
        assert!(on_dot_click(&mut carousel, 9));
        assert_eq!(carousel.current_index(), 3);
    }
}
