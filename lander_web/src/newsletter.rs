// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Newsletter form acknowledgement.

use std::cell::RefCell;
use std::rc::Rc;

use lander_page::{NewsletterButton, SUBSCRIBED_RESET_MS};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlFormElement, Window};

use crate::AttachError;
use crate::dom::{self, Listener};

struct NewsletterDom {
    state: NewsletterButton,
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
}

/// The `#newsletterForm` submit handler.
pub(crate) struct NewsletterBinding {
    _listener: Listener,
}

impl std::fmt::Debug for NewsletterBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterBinding").finish_non_exhaustive()
    }
}

impl NewsletterBinding {
    /// Intercepts submits of the newsletter form, if the page has one.
    pub(crate) fn attach(window: &Window, document: &Document) -> Result<Option<Self>, AttachError> {
        let Some(form) = document
            .get_element_by_id("newsletterForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            return Ok(None);
        };
        let button = form
            .query_selector("button")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let state = Rc::new(RefCell::new(NewsletterDom {
            state: NewsletterButton::new(),
            form: form.clone(),
            button,
        }));

        let window = window.clone();
        let listener = Listener::new(&form, "submit", move |event| {
            event.prevent_default();
            let mut inner = state.borrow_mut();
            let Some(button) = inner.button.clone() else {
                return;
            };
            let current = button.text_content().unwrap_or_default();
            if !inner.state.submit(&current) {
                return;
            }
            button.set_text_content(inner.state.label());
            button.set_disabled(inner.state.is_disabled());
            tracing::debug!("newsletter submit acknowledged");

            let state = state.clone();
            dom::set_timeout(&window, SUBSCRIBED_RESET_MS, move || {
                let mut inner = state.borrow_mut();
                if let Some(label) = inner.state.reset() {
                    button.set_text_content(Some(&label));
                    button.set_disabled(false);
                    inner.form.reset();
                }
            });
        })?;
        Ok(Some(Self {
            _listener: listener,
        }))
    }
}
