// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM binding for [`MobileMenu`].

use std::cell::RefCell;
use std::rc::Rc;

use lander_page::{MenuView, MobileMenu};
use web_sys::{Document, HtmlElement};

use crate::AttachError;
use crate::dom::{self, Listener};

struct MenuDom {
    menu: MobileMenu,
    burger: HtmlElement,
    panel: HtmlElement,
    body: Option<HtmlElement>,
}

impl MenuDom {
    fn render(&self, view: MenuView) {
        dom::set_class(&self.panel, "is-active", view.active);
        dom::set_class(&self.burger, "is-active", view.active);
        let _ = self.burger.set_attribute("aria-expanded", view.aria_expanded);
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", view.body_overflow);
        }
    }
}

/// Burger button, menu panel, and the links that close it.
pub(crate) struct MenuBinding {
    _listeners: Vec<Listener>,
}

impl std::fmt::Debug for MenuBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuBinding").finish_non_exhaustive()
    }
}

impl MenuBinding {
    /// Wires the menu if the page has both a burger and a menu panel.
    pub(crate) fn attach(document: &Document) -> Result<Option<Self>, AttachError> {
        let (Some(burger), Some(panel)) = (
            dom::query_doc(document, ".burger"),
            dom::query_doc(document, ".mobile-menu"),
        ) else {
            return Ok(None);
        };
        let state = Rc::new(RefCell::new(MenuDom {
            menu: MobileMenu::new(),
            burger: burger.clone(),
            panel,
            body: document.body(),
        }));

        let mut listeners = Vec::new();
        {
            let state = state.clone();
            listeners.push(Listener::new(&burger, "click", move |_| {
                let mut inner = state.borrow_mut();
                let view = inner.menu.toggle();
                inner.render(view);
            })?);
        }
        for link in dom::query_all_doc(document, ".mobile-menu__link") {
            let state = state.clone();
            listeners.push(Listener::new(&link, "click", move |_| {
                let mut inner = state.borrow_mut();
                let view = inner.menu.close();
                inner.render(view);
            })?);
        }
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
