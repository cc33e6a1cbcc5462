// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM binding for the event [`Countdown`].

use lander_page::{COUNTDOWN_TICK_MS, Countdown, CountdownField, FLIP_DURATION_MS, FlipTracker};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use crate::AttachError;
use crate::dom::{self, Interval};

const CONTAINER_ID: &str = "countdown";

struct CountdownDom {
    countdown: Countdown,
    flips: FlipTracker,
    window: Window,
    container: Option<HtmlElement>,
    fields: [Option<HtmlElement>; 4],
}

impl CountdownDom {
    fn tick(&mut self) {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Date.now() is an integral millisecond count"
        )]
        let now = js_sys::Date::now() as i64;
        let Some(parts) = self.countdown.at(now) else {
            if let Some(container) = &self.container {
                dom::set_style(container, "display", "none");
            }
            return;
        };
        if let Some(container) = &self.container {
            dom::set_style(container, "display", "");
        }
        let flips = self.flips.update(&parts);
        for (field, element) in CountdownField::ALL.into_iter().zip(&self.fields) {
            let Some(element) = element else {
                continue;
            };
            if !flips.flips(field) {
                continue;
            }
            dom::set_class(element, "flip", true);
            element.set_inner_text(&parts.text(field));
            let element = element.clone();
            dom::set_timeout(&self.window, FLIP_DURATION_MS, move || {
                dom::set_class(&element, "flip", false);
            });
        }
    }
}

/// Ticks the countdown once a second.
#[derive(Debug)]
pub(crate) struct CountdownBinding {
    _interval: Interval,
}

impl CountdownBinding {
    /// Starts the countdown if the page shows one, rendering the first tick
    /// immediately.
    ///
    /// `target` is any date string the browser's `Date` accepts.
    pub(crate) fn attach(
        window: &Window,
        document: &Document,
        target: &str,
    ) -> Result<Option<Self>, AttachError> {
        let fields = CountdownField::ALL.map(|field| dom::by_id(document, field.element_id()));
        if fields[0].is_none() {
            return Ok(None);
        }
        let target_ms = js_sys::Date::new(&JsValue::from_str(target)).get_time();
        if !target_ms.is_finite() {
            return Err(AttachError::Config(format!("invalid countdown target {target:?}")));
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "a parsed date is an integral millisecond count"
        )]
        let target_ms = target_ms as i64;
        let mut state = CountdownDom {
            countdown: Countdown::new(target_ms),
            flips: FlipTracker::new(),
            window: window.clone(),
            container: dom::by_id(document, CONTAINER_ID),
            fields,
        };
        state.tick();
        let interval = Interval::new(window, u64::from(COUNTDOWN_TICK_MS), move || state.tick())?;
        tracing::debug!(target_ms, "countdown attached");
        Ok(Some(Self {
            _interval: interval,
        }))
    }
}
