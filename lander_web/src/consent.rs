// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cookie consent banner backed by `localStorage`.

use std::cell::RefCell;
use std::rc::Rc;

use lander_page::{CONSENT_SHOW_DELAY_MS, CONSENT_STORAGE_KEY, CookieConsent};
use web_sys::{Document, HtmlElement, Storage, Window};

use crate::AttachError;
use crate::dom::{self, Listener};

struct ConsentDom {
    consent: CookieConsent,
    banner: Option<HtmlElement>,
    storage: Option<Storage>,
}

/// The consent banner and its accept button.
pub(crate) struct ConsentBinding {
    _listener: Option<Listener>,
}

impl std::fmt::Debug for ConsentBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsentBinding").finish_non_exhaustive()
    }
}

impl ConsentBinding {
    /// Schedules the banner for visitors who have not consented and wires
    /// the accept button.
    ///
    /// Without `localStorage` (private browsing, disabled storage) the banner
    /// still works but consent only lasts for the page view.
    pub(crate) fn attach(window: &Window, document: &Document) -> Result<Self, AttachError> {
        let storage = window.local_storage().ok().flatten();
        let stored = storage
            .as_ref()
            .and_then(|s| s.get_item(CONSENT_STORAGE_KEY).ok().flatten());
        let state = Rc::new(RefCell::new(ConsentDom {
            consent: CookieConsent::new(stored.as_deref()),
            banner: dom::by_id(document, "cookieConsent"),
            storage,
        }));

        let prompt = {
            let inner = state.borrow();
            inner.banner.is_some() && inner.consent.should_prompt()
        };
        if prompt {
            let state = state.clone();
            dom::set_timeout(window, CONSENT_SHOW_DELAY_MS, move || {
                let mut inner = state.borrow_mut();
                if inner.consent.show()
                    && let Some(banner) = &inner.banner
                {
                    dom::set_class(banner, "is-visible", true);
                }
            });
        }

        let listener = match dom::by_id(document, "cookieAccept") {
            Some(button) => Some(Listener::new(&button, "click", move |_| {
                let mut inner = state.borrow_mut();
                let value = inner.consent.accept();
                if let Some(storage) = &inner.storage
                    && let Err(err) = storage.set_item(CONSENT_STORAGE_KEY, value)
                {
                    tracing::warn!(?err, "could not persist cookie consent");
                }
                if let Some(banner) = &inner.banner {
                    dom::set_class(banner, "is-visible", false);
                }
            })?),
            None => None,
        };
        Ok(Self {
            _listener: listener,
        })
    }
}
