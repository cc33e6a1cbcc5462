// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lander Page: state for the landing page's smaller widgets.
//!
//! - [`Countdown`] and [`FlipTracker`]: time left until the event, with the
//!   fields that changed since the previous tick.
//! - [`AnimatedCounter`]: numbers that count up with [`ease_out_expo`] when
//!   they scroll into view.
//! - [`Language`], [`LanguageState`], [`Translations`]: the language toggle.
//! - [`FaqAccordion`]: categories and questions.
//! - [`MobileMenu`], [`CookieConsent`], [`NewsletterButton`].
//!
//! Timers and DOM access stay with the host; these types only decide what to
//! show next.
//!
//! ```rust
//! use lander_page::{Countdown, CountdownField, FlipTracker};
//!
//! let day = 86_400_000;
//! let countdown = Countdown::new(3 * day);
//! let mut flips = FlipTracker::new();
//!
//! let parts = countdown.at(day / 2).unwrap();
//! assert_eq!(parts.text(CountdownField::Days), "02");
//! assert_eq!(parts.text(CountdownField::Hours), "12");
//! assert!(flips.update(&parts).flips(CountdownField::Seconds));
//!
//! assert!(countdown.at(3 * day).is_none());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`, used for float math.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Deserialize` for [`Language`] and [`CounterSpec`].
//! - `tracing`: emits `debug` events on language switches and FAQ toggles.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod consent;
mod countdown;
mod counter;
mod faq;
mod language;
mod menu;
mod newsletter;

pub use consent::{CONSENT_ACCEPTED, CONSENT_SHOW_DELAY_MS, CONSENT_STORAGE_KEY, CookieConsent};
pub use countdown::{
    COUNTDOWN_TICK_MS, Countdown, CountdownField, CountdownParts, FLIP_DURATION_MS, FlipSet,
    FlipTracker,
};
pub use counter::{
    AnimatedCounter, COUNTER_DURATION_MS, COUNTER_VISIBILITY_THRESHOLD, CounterFrame, CounterSpec,
    counter_frame, ease_out_expo,
};
pub use faq::{FaqAccordion, FaqChanges};
pub use language::{Language, LanguageState, Translations, UnknownLanguage};
pub use menu::{MenuView, MobileMenu};
pub use newsletter::{NewsletterButton, SUBSCRIBED_LABEL, SUBSCRIBED_RESET_MS};
