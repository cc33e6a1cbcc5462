// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wires every component the page contains.

use std::cell::RefCell;

use web_sys::{Document, Window};

use crate::carousel::CarouselBinding;
use crate::consent::ConsentBinding;
use crate::countdown::CountdownBinding;
use crate::counters::CountersBinding;
use crate::faq::FaqBinding;
use crate::language::LanguageBinding;
use crate::menu::MenuBinding;
use crate::newsletter::NewsletterBinding;
use crate::scroll::ScrollEffects;
use crate::slider::SliderBinding;
use crate::{AttachError, PageConfig, dom};

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Logs a failed attachment and carries on without the component.
fn optional<T>(component: &'static str, result: Result<Option<T>, AttachError>) -> Option<T> {
    match result {
        Ok(binding) => binding,
        Err(err) => {
            tracing::warn!(component, %err, "component not attached");
            None
        }
    }
}

/// Every binding on the page. Dropping it detaches them all.
pub(crate) struct Page {
    carousels: Vec<CarouselBinding>,
    slider: Option<SliderBinding>,
    scroll: Option<ScrollEffects>,
    menu: Option<MenuBinding>,
    countdown: Option<CountdownBinding>,
    counters: Option<CountersBinding>,
    language: Option<LanguageBinding>,
    faq: Option<FaqBinding>,
    consent: Option<ConsentBinding>,
    newsletter: Option<NewsletterBinding>,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("carousels", &self.carousels)
            .field("slider", &self.slider)
            .field("scroll", &self.scroll)
            .field("menu", &self.menu)
            .field("countdown", &self.countdown)
            .field("counters", &self.counters)
            .field("language", &self.language)
            .field("faq", &self.faq)
            .field("consent", &self.consent)
            .field("newsletter", &self.newsletter)
            .finish()
    }
}

impl Page {
    /// Attaches every component found in `document`.
    ///
    /// A component that fails to attach is logged and left out; the rest of
    /// the page still works.
    pub(crate) fn attach(window: &Window, document: &Document, config: &PageConfig) -> Self {
        let carousels = config
            .carousels
            .iter()
            .filter_map(|(id, carousel)| {
                let container = dom::by_id(document, id)?;
                CarouselBinding::attach(window, &container, carousel)
                    .inspect_err(|err| tracing::warn!(%id, %err, "carousel not attached"))
                    .ok()
            })
            .collect();
        let page = Self {
            carousels,
            slider: optional("slider", SliderBinding::attach(document)),
            scroll: optional(
                "scroll",
                ScrollEffects::attach(window, document, config.scroll.clone()).map(Some),
            ),
            menu: optional("menu", MenuBinding::attach(document)),
            countdown: optional(
                "countdown",
                CountdownBinding::attach(window, document, &config.countdown_target),
            ),
            counters: optional("counters", CountersBinding::attach(window, document)),
            language: optional(
                "language",
                LanguageBinding::attach(document, config.language).map(Some),
            ),
            faq: optional("faq", FaqBinding::attach(document)),
            consent: optional("consent", ConsentBinding::attach(window, document).map(Some)),
            newsletter: optional("newsletter", NewsletterBinding::attach(window, document)),
        };
        tracing::info!(carousels = page.carousels.len(), "page attached");
        page
    }

    /// Attaches the page and keeps it alive for the rest of the session,
    /// replacing any page attached before.
    pub(crate) fn install(window: &Window, document: &Document, config: &PageConfig) {
        // Detach the old page first so no element is bound twice.
        let previous = PAGE.with(|slot| slot.borrow_mut().take());
        drop(previous);
        let page = Self::attach(window, document, config);
        PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    }
}
