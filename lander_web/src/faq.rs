// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM binding for [`FaqAccordion`].

use std::cell::RefCell;
use std::rc::Rc;

use lander_page::FaqAccordion;
use web_sys::{Document, HtmlElement};

use crate::AttachError;
use crate::dom::{self, Listener};

struct FaqDom {
    faq: FaqAccordion,
    items: Vec<HtmlElement>,
}

/// Category headers and question buttons of the FAQ section.
pub(crate) struct FaqBinding {
    _listeners: Vec<Listener>,
}

impl std::fmt::Debug for FaqBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaqBinding").finish_non_exhaustive()
    }
}

impl FaqBinding {
    /// Wires every `.faq__category` and `.faq__item` on the page. Returns
    /// `None` when there are neither.
    pub(crate) fn attach(document: &Document) -> Result<Option<Self>, AttachError> {
        let categories = dom::query_all_doc(document, ".faq__category");
        let items = dom::query_all_doc(document, ".faq__item");
        if categories.is_empty() && items.is_empty() {
            return Ok(None);
        }

        let mut faq = FaqAccordion::new();
        for _ in &categories {
            faq.add_category();
        }
        for item in &items {
            let category = item
                .closest(".faq__category")
                .ok()
                .flatten()
                .and_then(|parent| {
                    categories
                        .iter()
                        .position(|c| c.is_same_node(Some(parent.as_ref())))
                });
            faq.add_item(category);
        }
        let state = Rc::new(RefCell::new(FaqDom {
            faq,
            items: items.clone(),
        }));

        let mut listeners = Vec::new();
        for (index, category) in categories.iter().enumerate() {
            let Some(title) = dom::query(category, ".faq__category-title") else {
                continue;
            };
            let state = state.clone();
            let category = category.clone();
            listeners.push(Listener::new(&title, "click", move |_| {
                if let Some(open) = state.borrow_mut().faq.toggle_category(index) {
                    dom::set_class(&category, "is-open", open);
                }
            })?);
        }
        for (index, item) in items.iter().enumerate() {
            let Some(question) = dom::query(item, ".faq__question") else {
                continue;
            };
            let state = state.clone();
            listeners.push(Listener::new(&question, "click", move |_| {
                let mut inner = state.borrow_mut();
                for changed in inner.faq.toggle_item(index) {
                    let open = inner.faq.is_item_open(changed);
                    if let Some(element) = inner.items.get(changed) {
                        dom::set_class(element, "is-open", open);
                    }
                }
            })?);
        }
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
