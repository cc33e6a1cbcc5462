// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lander Scroll: scroll-driven visual effects as pure projections.
//!
//! Every function here maps explicit scroll signals (scroll offset, viewport
//! size, element rectangles) to the values a host writes into the DOM:
//!
//! - [`HeaderWipe`], [`FooterReveal`]: the header background wiping away and
//!   the sticky footer appearing as it does.
//! - [`RevealSet`], [`FocusFade`]: per-section reveal-on-scroll and the focus
//!   glow that fades to black as a section leaves under the header.
//! - [`CtaHandoff`]: the hero call-to-action handing off to the sticky footer.
//! - [`scroll_percent`], [`indicator_line_percent`], [`back_to_top_visible`],
//!   [`floating_language_hidden`]: progress bar and small toggles.
//! - [`HeaderToneTracker`], [`footer_class`], [`progress_class`]: contrast
//!   classes for fixed chrome, sampled from [`SectionBand`]s.
//!
//! Geometry defaults live in [`ScrollConfig`].
//!
//! ```rust
//! use lander_scroll::{HeaderPhase, HeaderWipe, ScrollConfig, scroll_percent};
//!
//! let config = ScrollConfig::default();
//! let header = HeaderWipe::at(75.0, &config);
//! assert_eq!(header.phase, HeaderPhase::Wiping);
//! assert_eq!(header.clip_path, "inset(0 0 50% 0)");
//!
//! assert_eq!(scroll_percent(600.0, 2000.0, 800.0), 50.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Deserialize` for [`ScrollConfig`].
//! - `tracing`: emits `debug` events when the header tone changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod indicators;
mod section;
mod surface;
mod wipe;

pub use config::ScrollConfig;
pub use indicators::{
    back_to_top_visible, floating_language_hidden, indicator_line_percent, progress_tip_y,
    scroll_percent,
};
pub use section::{FOCUSED_GLOW, FocusFade, MAX_FADE_OUT, MAX_GLOW, RevealSet, should_reveal};
pub use surface::{
    HeaderTone, HeaderToneTracker, SectionBand, SectionKind, Surface, ToneClass, footer_class,
    progress_class, section_at,
};
pub use wipe::{CtaHandoff, FooterReveal, HeaderPhase, HeaderWipe, cta_transition, wipe_progress};
