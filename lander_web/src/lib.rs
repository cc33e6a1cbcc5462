// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lander Web: browser bindings for the festival landing page.
//!
//! Loading the module attaches everything the page contains: the carousels
//! named in [`PageConfig`], the accommodation slider, scroll effects, the
//! mobile menu, the countdown, count-up numbers, language switching, the FAQ
//! accordion, cookie consent, and the newsletter form. Components whose
//! elements are missing are skipped.
//!
//! The page reads its configuration from a JSON script tag:
//!
//! ```html
//! <script type="application/json" id="lander-config">
//!   { "carousels": { "hypeCarousel": { "slidesVisibleDesktop": 3, "loop": true } } }
//! </script>
//! ```
//!
//! Scripts can also drive a carousel directly through [`CarouselHandle`].
//!
//! All state machines live in `lander_carousel`, `lander_scroll`, and
//! `lander_page`; this crate only reads the DOM and writes their results back.
//!
//! ## Features
//!
//! - `console_error_panic_hook` (default): report panics in the browser
//!   console.

mod carousel;
mod config;
mod consent;
mod countdown;
mod counters;
mod dom;
mod error;
mod faq;
mod language;
mod logging;
mod menu;
mod newsletter;
mod page;
mod scroll;
mod slider;

use wasm_bindgen::prelude::*;

pub use carousel::CarouselHandle;
pub use config::{CONFIG_ELEMENT_ID, DEFAULT_COUNTDOWN_TARGET, PageConfig};
pub use error::AttachError;

use page::Page;

/// Module entry point: installs the panic hook and console logging, then
/// attaches the page once the document has been parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(|| {
            if let Err(err) = attach_page() {
                tracing::error!(?err, "page not attached");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
        return Ok(());
    }
    attach_page()
}

/// Attaches (or re-attaches) every component of the current document.
///
/// Call this after replacing the page's markup; listeners bound to the old
/// markup are removed first.
#[wasm_bindgen(js_name = attachPage)]
pub fn attach_page() -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;
    let config = PageConfig::load(&document);
    Page::install(&window, &document, &config);
    Ok(())
}
