// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lander Carousel: renderer-agnostic carousel and slider state.
//!
//! This crate models the sliding-window viewers of a landing page as plain
//! state machines:
//!
//! - [`CarouselConfig`] / [`ValidConfig`]: per-breakpoint slide counts, looping,
//!   and autoplay, validated once at construction.
//! - [`Breakpoint`]: the mobile/tablet/desktop classification of a viewport
//!   width (`<= 768`, `<= 900`, wider).
//! - [`Carousel`]: the controller. It keeps `current_index` within
//!   `0..=max_index`, where `max_index = slide_count - visible_count` (floored at
//!   zero), and projects its state to a track offset and [`DotFlags`].
//! - [`SwipeState`]: a two-sample horizontal swipe recognizer with a 50-unit
//!   threshold.
//! - [`AutoplaySchedule`]: a timestamp-driven recurring advance owned by one
//!   carousel.
//! - [`WrapSlider`]: a one-slide-wide slider that wraps in both directions.
//!
//! This crate deliberately does **not** know about the DOM or any UI toolkit.
//! Host frameworks are responsible for:
//!
//! - Counting slides and dots and reading the viewport width.
//! - Forwarding clicks, touches, resizes, and timer ticks.
//! - Applying [`Carousel::track_transform`] and the dot flags to their elements.
//!
//! ## Minimal example
//!
//! ```rust
//! use lander_carousel::{Carousel, CarouselConfig, DotFlags};
//!
//! // Seven slides, three visible on desktop, two on tablet, one on mobile.
//! let config = CarouselConfig::responsive(3, 2, 1).with_loop(false);
//! let mut carousel = Carousel::new(7, &config, 1280.0).unwrap();
//!
//! carousel.next();
//! let view = carousel.view(7);
//! assert_eq!(view.dots.iter().filter(|d| d.is_shown()).count(), 5);
//! assert_eq!(view.dots[1], DotFlags::ACTIVE);
//!
//! // The viewport shrinks to a phone: one slide per position now.
//! carousel.on_resize(375.0);
//! assert_eq!(carousel.max_index(), 6);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Deserialize` for [`CarouselConfig`] (camelCase keys,
//!   `loop` for [`CarouselConfig::looping`]).
//! - `tracing`: emits `debug` events when a carousel or slider moves.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod autoplay;
mod carousel;
mod config;
mod dots;
mod slider;
mod swipe;

pub use autoplay::AutoplaySchedule;
pub use carousel::{Carousel, CarouselView};
pub use config::{
    Breakpoint, CarouselConfig, ConfigError, DEFAULT_AUTOPLAY_INTERVAL_MS, MOBILE_MAX_WIDTH,
    TABLET_MAX_WIDTH, ValidConfig,
};
pub use dots::{DotFlags, DotStates, dot_states};
pub use slider::WrapSlider;
pub use swipe::{DEFAULT_SWIPE_THRESHOLD, SwipeDirection, SwipeState, classify};
