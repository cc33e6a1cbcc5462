// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven effects, throttled to one update per animation frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lander_scroll::{
    FocusFade, FooterReveal, HeaderToneTracker, HeaderWipe, RevealSet, ScrollConfig, SectionBand,
    SectionKind, ToneClass, back_to_top_visible, cta_transition, floating_language_hidden,
    footer_class, indicator_line_percent, progress_class, progress_tip_y, scroll_percent,
};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::AttachError;
use crate::dom::{self, Listener};

/// Elements the effects write to. Every one is optional.
struct Chrome {
    header: Option<HtmlElement>,
    header_layers: Vec<HtmlElement>,
    ticket_buttons: Vec<HtmlElement>,
    burger: Option<HtmlElement>,
    sticky_footer: Option<HtmlElement>,
    sticky_footer_bg: Option<HtmlElement>,
    hero: Option<HtmlElement>,
    hero_cta: Option<HtmlElement>,
    hero_cta_button: Option<HtmlElement>,
    indicator_line: Option<HtmlElement>,
    progress: Option<HtmlElement>,
    back_to_top: Option<HtmlElement>,
    floating_language: Option<HtmlElement>,
}

impl Chrome {
    fn collect(document: &Document) -> Self {
        let header = dom::query_doc(document, ".header");
        let (ticket_buttons, burger) = match &header {
            Some(header) => (
                dom::query_all(header, ".btn--tickets, .btn--tickets-orange"),
                dom::query(header, ".burger"),
            ),
            None => (Vec::new(), None),
        };
        let header_layers = [".header__bg", ".header__elements--default"]
            .into_iter()
            .filter_map(|selector| dom::query_doc(document, selector))
            .collect();
        Self {
            header,
            header_layers,
            ticket_buttons,
            burger,
            sticky_footer: dom::by_id(document, "stickyFooter"),
            sticky_footer_bg: dom::query_doc(document, ".sticky-footer__bg"),
            hero: dom::query_doc(document, ".hero"),
            hero_cta: dom::query_doc(document, ".hero__cta"),
            hero_cta_button: dom::query_doc(document, ".hero__cta .btn--hero"),
            indicator_line: dom::query_doc(document, ".scroll-indicator__line"),
            progress: dom::by_id(document, "scrollProgress"),
            back_to_top: dom::by_id(document, "backToTop"),
            floating_language: dom::by_id(document, "floatingLang"),
        }
    }
}

struct ScrollState {
    window: Window,
    document: Document,
    config: ScrollConfig,
    chrome: Chrome,
    /// `.section` elements: revealed and focus-faded.
    sections: Vec<HtmlElement>,
    reveal: RevealSet,
    /// Sections, hero, and footer with their kinds, for tone sampling.
    bands: Vec<(HtmlElement, SectionKind)>,
    header_tone: HeaderToneTracker,
}

impl ScrollState {
    fn update(&mut self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let width = dom::viewport_width(&self.window);
        let height = dom::viewport_height(&self.window);
        let bands: Vec<SectionBand> = self
            .bands
            .iter()
            .map(|(element, kind)| SectionBand::new(dom::client_rect(element), *kind))
            .collect();

        let wipe = HeaderWipe::at(scroll_y, &self.config);

        self.update_sections(height);
        self.update_header(scroll_y, &wipe, width, &bands);
        self.update_footer(&wipe, width, height, &bands);
        self.update_progress(scroll_y, height, &bands);

        if let Some(line) = &self.chrome.indicator_line {
            let percent = indicator_line_percent(scroll_y, self.config.indicator_range);
            dom::set_style(line, "--line-progress", &format!("{percent}%"));
        }
        if let Some(button) = &self.chrome.back_to_top {
            dom::set_class(
                button,
                "is-visible",
                back_to_top_visible(scroll_y, self.config.back_to_top_after),
            );
        }
        if let (Some(floating), Some(hero)) = (&self.chrome.floating_language, &self.chrome.hero) {
            let hidden = floating_language_hidden(
                dom::client_rect(hero).y1,
                self.config.floating_language_hide_below,
            );
            dom::set_class(floating, "is-hidden", hidden);
        }
    }

    fn update_sections(&mut self, viewport_height: f64) {
        let sections = &self.sections;
        let rects: Vec<_> = sections.iter().map(|s| dom::client_rect(s)).collect();
        self.reveal.update(
            rects.iter().map(|r| r.y0),
            viewport_height,
            self.config.reveal_ratio,
            |index| dom::set_class(&sections[index], "is-visible", true),
        );
        for (section, rect) in sections.iter().zip(&rects) {
            let focus = FocusFade::for_section(*rect, viewport_height, self.config.header_height);
            dom::set_style(section, "--focus-glow", &focus.glow.to_string());
            dom::set_style(section, "--fade-out", &focus.fade_out.to_string());
            dom::set_class(section, "is-focused", focus.focused);
        }
    }

    fn update_header(
        &mut self,
        scroll_y: f64,
        wipe: &HeaderWipe,
        viewport_width: f64,
        bands: &[SectionBand],
    ) {
        for layer in &self.chrome.header_layers {
            dom::set_style(layer, "clip-path", &wipe.clip_path);
        }
        let Some(header) = &self.chrome.header else {
            return;
        };
        let tone = self.header_tone.update(
            scroll_y,
            wipe.progress,
            bands,
            viewport_width,
            self.config.header_height,
        );
        dom::set_class(header, "is-scrolled", tone.scrolled);
        for class in ToneClass::ALL {
            dom::set_class(header, class.as_str(), tone.class == Some(class));
        }
        if let Some(fill) = wipe.ticket_fill_percent {
            let color = if wipe.ticket_text_dark {
                "var(--color-bg-dark)"
            } else {
                "#ffffff"
            };
            for button in &self.chrome.ticket_buttons {
                dom::set_style(button, "--btn-fill", &format!("{fill}%"));
                dom::set_style(button, "color", color);
            }
            if let Some(burger) = &self.chrome.burger {
                let color = if wipe.burger_accent {
                    "var(--color-accent)"
                } else {
                    "var(--color-primary-dark)"
                };
                dom::set_style(burger, "color", color);
            }
        }
    }

    fn update_footer(
        &self,
        wipe: &HeaderWipe,
        viewport_width: f64,
        viewport_height: f64,
        bands: &[SectionBand],
    ) {
        // The hero CTA hands off to the footer when present; otherwise the
        // footer mirrors the header wipe.
        let reveal = match &self.chrome.hero_cta {
            Some(cta) => {
                let handoff = cta_transition(dom::client_rect(cta).y0, &self.config);
                if let Some(button) = &self.chrome.hero_cta_button {
                    match &handoff {
                        Some(handoff) => {
                            dom::set_style(button, "opacity", &handoff.opacity.to_string());
                            dom::set_style(button, "transform", &handoff.transform);
                            let events = if handoff.interactive { "auto" } else { "none" };
                            dom::set_style(button, "pointer-events", events);
                        }
                        None => {
                            for property in ["opacity", "transform", "pointer-events"] {
                                dom::set_style(button, property, "");
                            }
                        }
                    }
                }
                handoff.map_or_else(FooterReveal::hidden, |handoff| handoff.footer)
            }
            None => FooterReveal::from_wipe(wipe.progress),
        };
        if let Some(bg) = &self.chrome.sticky_footer_bg {
            dom::set_style(bg, "clip-path", &reveal.clip_path);
        }
        let Some(footer) = &self.chrome.sticky_footer else {
            return;
        };
        dom::set_class(footer, "is-visible", reveal.visible);
        let class = footer_class(
            bands,
            viewport_width,
            viewport_height,
            self.config.footer_sample_inset,
        );
        for candidate in [ToneClass::OnLight, ToneClass::OnDark] {
            dom::set_class(footer, candidate.as_str(), class == Some(candidate));
        }
    }

    fn update_progress(&self, scroll_y: f64, viewport_height: f64, bands: &[SectionBand]) {
        let Some(bar) = &self.chrome.progress else {
            return;
        };
        let document_height = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        let percent = scroll_percent(scroll_y, document_height, viewport_height);
        dom::set_style(bar, "height", &format!("{percent}%"));
        let class = progress_class(bands, progress_tip_y(percent, viewport_height));
        for candidate in [ToneClass::OnYellow, ToneClass::OnDark] {
            dom::set_class(bar, candidate.as_str(), class == Some(candidate));
        }
    }
}

/// Scroll effects for the whole page.
pub(crate) struct ScrollEffects {
    _frame: Rc<Closure<dyn FnMut()>>,
    _listeners: Vec<Listener>,
}

impl std::fmt::Debug for ScrollEffects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollEffects").finish_non_exhaustive()
    }
}

impl ScrollEffects {
    /// Collects the page's elements, paints the initial state, and starts
    /// listening for scrolls.
    pub(crate) fn attach(
        window: &Window,
        document: &Document,
        config: ScrollConfig,
    ) -> Result<Self, AttachError> {
        let sections = dom::query_all_doc(document, ".section");
        let bands = dom::query_all_doc(document, ".section, .hero, .footer")
            .into_iter()
            .map(|element| {
                let classes = element.class_name();
                let kind = SectionKind::from_classes(classes.split_whitespace());
                (element, kind)
            })
            .collect();
        let state = Rc::new(RefCell::new(ScrollState {
            window: window.clone(),
            document: document.clone(),
            config,
            chrome: Chrome::collect(document),
            reveal: RevealSet::new(sections.len()),
            sections,
            bands,
            header_tone: HeaderToneTracker::new(),
        }));
        state.borrow_mut().update();

        let ticking = Rc::new(Cell::new(false));
        let frame = {
            let state = state.clone();
            let ticking = ticking.clone();
            Rc::new(Closure::<dyn FnMut()>::new(move || {
                ticking.set(false);
                state.borrow_mut().update();
            }))
        };

        let mut listeners = Vec::new();
        {
            let frame = frame.clone();
            let frame_window = window.clone();
            listeners.push(Listener::passive(window, "scroll", move |_| {
                if ticking.replace(true) {
                    return;
                }
                let callback: &Closure<dyn FnMut()> = &frame;
                let requested =
                    frame_window.request_animation_frame(callback.as_ref().unchecked_ref());
                if let Err(err) = requested {
                    tracing::warn!(?err, "requestAnimationFrame failed");
                    ticking.set(false);
                }
            })?);
        }
        let back_to_top = state.borrow().chrome.back_to_top.clone();
        if let Some(button) = back_to_top {
            let click_window = window.clone();
            listeners.push(Listener::new(&button, "click", move |_| {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                click_window.scroll_to_with_scroll_to_options(&options);
            })?);
        }
        Ok(Self {
            _frame: frame,
            _listeners: listeners,
        })
    }
}
