// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Language buttons and translated text.

use std::cell::RefCell;
use std::rc::Rc;

use lander_page::{Language, LanguageState, Translations};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::AttachError;
use crate::dom::{self, Listener};

const BUTTONS: &str = ".lang-btn, .floating-lang__btn";

/// Reads the translations stored under `key_of(lang)` in `element`'s dataset.
fn translations(element: &HtmlElement, key_of: fn(Language) -> &'static str) -> Translations {
    let data = element.dataset();
    let found: Vec<(&str, String)> = Language::ALL
        .into_iter()
        .filter_map(|lang| Some((lang.code(), data.get(key_of(lang))?)))
        .collect();
    Translations::from_dataset(found.iter().map(|(code, text)| (*code, text.as_str())))
}

struct LanguageDom {
    state: LanguageState,
    buttons: Vec<HtmlElement>,
    texts: Vec<(HtmlElement, Translations)>,
    placeholders: Vec<(HtmlInputElement, Translations)>,
}

impl LanguageDom {
    fn render(&self) {
        let current = self.state.current();
        for button in &self.buttons {
            let code = button.dataset().get("lang").unwrap_or_default();
            dom::set_class(button, "active", self.state.is_active(&code));
        }
        for (element, translations) in &self.texts {
            if let Some(text) = translations.get(current) {
                element.set_text_content(Some(text));
            }
        }
        for (input, translations) in &self.placeholders {
            if let Some(text) = translations.get(current) {
                input.set_placeholder(text);
            }
        }
    }
}

/// Language buttons and every element that carries translations.
pub(crate) struct LanguageBinding {
    _listeners: Vec<Listener>,
}

impl std::fmt::Debug for LanguageBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageBinding").finish_non_exhaustive()
    }
}

impl LanguageBinding {
    /// Caches the page's translations and wires the language buttons.
    ///
    /// The markup is written in English; any other `initial` language is
    /// applied right away.
    pub(crate) fn attach(document: &Document, initial: Language) -> Result<Self, AttachError> {
        let buttons = dom::query_all_doc(document, BUTTONS);
        let texts = dom::query_all_doc(document, "[data-en]")
            .into_iter()
            .map(|element| {
                let translations = translations(&element, Language::code);
                (element, translations)
            })
            .collect();
        let placeholders = dom::query_all_doc(document, "[data-placeholder-en]")
            .into_iter()
            .filter_map(|element| {
                let translations = translations(&element, Language::placeholder_key);
                Some((element.dyn_into::<HtmlInputElement>().ok()?, translations))
            })
            .collect();

        let mut page = LanguageDom {
            state: LanguageState::default(),
            buttons: buttons.clone(),
            texts,
            placeholders,
        };
        if page.state.switch(initial) {
            page.render();
        }
        let state = Rc::new(RefCell::new(page));

        let mut listeners = Vec::new();
        for button in &buttons {
            let state = state.clone();
            let target = button.clone();
            listeners.push(Listener::new(button, "click", move |_| {
                let code = target.dataset().get("lang").unwrap_or_default();
                let lang = match code.parse::<Language>() {
                    Ok(lang) => lang,
                    Err(err) => {
                        tracing::warn!(%err, "language button ignored");
                        return;
                    }
                };
                let mut inner = state.borrow_mut();
                if inner.state.switch(lang) {
                    inner.render();
                }
            })?);
        }
        Ok(Self {
            _listeners: listeners,
        })
    }
}
