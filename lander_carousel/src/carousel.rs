// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: a responsive sliding window over a dense slide strip.

use alloc::format;
use alloc::string::String;
use core::num::NonZeroUsize;

use kurbo::Point;

use crate::{
    AutoplaySchedule, Breakpoint, CarouselConfig, ConfigError, DotStates, SwipeDirection,
    SwipeState, ValidConfig, dot_states,
};

/// Snapshot of everything a host needs to paint a carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselView {
    /// Horizontal translation of the track, in percent of the track width.
    pub offset_percent: f64,
    /// Flags for each indicator dot the host owns.
    pub dots: DotStates,
}

/// Controller for a carousel over `slide_count` slides.
///
/// This type:
/// - derives how many slides are visible from the viewport width and config,
/// - keeps `current_index` within `0..=max_index` after every operation,
/// - owns its swipe recognizer and autoplay schedule,
/// - projects its state to a track offset and dot flags.
///
/// It does *not* touch any rendering surface. Construction has no side
/// effects; hosts attach listeners and start autoplay explicitly.
///
/// ```
/// use lander_carousel::{Carousel, CarouselConfig};
///
/// let config = CarouselConfig::responsive(3, 2, 1);
/// let mut carousel = Carousel::new(6, &config, 1200.0).unwrap();
/// assert_eq!(carousel.visible_count(), 3);
/// assert_eq!(carousel.max_index(), 3);
///
/// for _ in 0..3 {
///     carousel.next();
/// }
/// assert_eq!(carousel.current_index(), 3);
/// assert_eq!(carousel.offset_percent(), -100.0);
///
/// // Looping wraps back to the start.
/// carousel.next();
/// assert_eq!(carousel.current_index(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Carousel {
    config: ValidConfig,
    slide_count: usize,
    breakpoint: Breakpoint,
    visible_count: NonZeroUsize,
    max_index: usize,
    current_index: usize,
    swipe: SwipeState,
    autoplay: AutoplaySchedule,
}

impl Carousel {
    /// Validates `config` and builds a carousel for the given viewport width.
    pub fn new(
        slide_count: usize,
        config: &CarouselConfig,
        viewport_width: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_valid_config(
            slide_count,
            config.validate()?,
            viewport_width,
        ))
    }

    /// Builds a carousel from an already validated config.
    #[must_use]
    pub fn with_valid_config(slide_count: usize, config: ValidConfig, viewport_width: f64) -> Self {
        let breakpoint = Breakpoint::for_width(viewport_width);
        let visible_count = visible_for(&config, breakpoint, slide_count);
        Self {
            config,
            slide_count,
            breakpoint,
            visible_count,
            max_index: slide_count.saturating_sub(visible_count.get()),
            current_index: 0,
            swipe: SwipeState::new(),
            autoplay: AutoplaySchedule::new(config.autoplay_interval_ms()),
        }
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidConfig {
        &self.config
    }

    /// Number of slides in the strip.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Breakpoint of the most recent viewport width.
    #[must_use]
    pub const fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Number of slides shown at once; never zero and never more than
    /// `max(slide_count, 1)`.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count.get()
    }

    /// Highest valid index.
    #[must_use]
    pub const fn max_index(&self) -> usize {
        self.max_index
    }

    /// Index of the first visible slide.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of reachable positions, which is also the number of dots shown.
    #[must_use]
    pub const fn position_count(&self) -> usize {
        self.max_index + 1
    }

    /// Advances one position, wrapping to `0` past the end when looping.
    ///
    /// Returns `true` if the index changed.
    pub fn next(&mut self) -> bool {
        let index = if self.config.looping() {
            (self.current_index + 1) % (self.max_index + 1)
        } else {
            (self.current_index + 1).min(self.max_index)
        };
        self.set_index(index)
    }

    /// Goes back one position, wrapping to `max_index` before the start when
    /// looping.
    ///
    /// Returns `true` if the index changed.
    pub fn previous(&mut self) -> bool {
        let index = if self.current_index == 0 {
            if self.config.looping() {
                self.max_index
            } else {
                0
            }
        } else {
            self.current_index - 1
        };
        self.set_index(index)
    }

    /// Jumps to `index`, clamped into `0..=max_index`.
    ///
    /// Returns the index that was applied.
    pub fn go_to(&mut self, index: usize) -> usize {
        let index = index.min(self.max_index);
        self.set_index(index);
        index
    }

    /// Re-derives the visible count for a new viewport width and clamps the
    /// current index into the new range.
    ///
    /// Returns `true` if anything observable changed.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        let breakpoint = Breakpoint::for_width(viewport_width);
        let visible_count = visible_for(&self.config, breakpoint, self.slide_count);
        let max_index = self.slide_count.saturating_sub(visible_count.get());
        let changed = visible_count != self.visible_count || max_index != self.max_index;
        self.breakpoint = breakpoint;
        self.visible_count = visible_count;
        self.max_index = max_index;
        let clamped = self.current_index.min(max_index);
        self.set_index(clamped) || changed
    }

    /// Forwards a `touchstart` position.
    pub fn on_touch_start(&mut self, position: Point) {
        self.swipe.on_touch_start(position);
    }

    /// Forwards a `touchend` position and navigates if it completes a swipe.
    ///
    /// Returns the recognized direction, if any. The step has already been
    /// taken; do not pass the direction to [`Self::apply_swipe`] as well.
    pub fn on_touch_end(&mut self, position: Point) -> Option<SwipeDirection> {
        let direction = self.swipe.on_touch_end(position)?;
        self.apply_swipe(direction);
        Some(direction)
    }

    /// Drops a pending touch.
    pub fn on_touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Navigates one step in the swipe direction.
    ///
    /// Returns `true` if the index changed.
    pub fn apply_swipe(&mut self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Previous => self.previous(),
        }
    }

    /// Starts autoplay at host time `now` (milliseconds).
    pub fn start_autoplay(&mut self, now: u64) {
        self.autoplay.start(now);
        #[cfg(feature = "tracing")]
        tracing::debug!(interval_ms = self.autoplay.interval_ms(), "carousel autoplay started");
    }

    /// Stops autoplay. Safe to call repeatedly.
    ///
    /// Returns `true` if autoplay was running.
    pub fn stop_autoplay(&mut self) -> bool {
        self.autoplay.stop()
    }

    /// Returns `true` while autoplay is running.
    #[must_use]
    pub const fn is_autoplay_active(&self) -> bool {
        self.autoplay.is_active()
    }

    /// The autoplay period in milliseconds.
    #[must_use]
    pub const fn autoplay_interval_ms(&self) -> u64 {
        self.autoplay.interval_ms()
    }

    /// Advances if an autoplay period has elapsed at `now`.
    ///
    /// Returns `true` if the index changed.
    pub fn tick(&mut self, now: u64) -> bool {
        self.autoplay.poll(now) && self.next()
    }

    /// Horizontal track offset in percent: `-current_index * 100 / visible_count`.
    #[must_use]
    pub fn offset_percent(&self) -> f64 {
        if self.current_index == 0 {
            return 0.0;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Slide counts are far below 2^52"
        )]
        let (index, visible) = (self.current_index as f64, self.visible_count.get() as f64);
        -(index * 100.0) / visible
    }

    /// CSS `transform` value for the track.
    #[must_use]
    pub fn track_transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }

    /// Flags for `dot_count` indicator dots.
    #[must_use]
    pub fn dots(&self, dot_count: usize) -> DotStates {
        dot_states(dot_count, self.position_count(), self.current_index)
    }

    /// Full paint snapshot for a host with `dot_count` dots.
    #[must_use]
    pub fn view(&self, dot_count: usize) -> CarouselView {
        CarouselView {
            offset_percent: self.offset_percent(),
            dots: self.dots(dot_count),
        }
    }

    fn set_index(&mut self, index: usize) -> bool {
        debug_assert!(
            index <= self.max_index,
            "carousel index {index} exceeds max index {}",
            self.max_index
        );
        if index == self.current_index {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = self.current_index, to = index, "carousel moved");
        self.current_index = index;
        true
    }
}

fn visible_for(config: &ValidConfig, breakpoint: Breakpoint, slide_count: usize) -> NonZeroUsize {
    let configured = config.slides_visible(breakpoint);
    match NonZeroUsize::new(slide_count) {
        Some(count) => configured.min(count),
        None => NonZeroUsize::MIN,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use pretty_assertions::assert_eq;

    use super::{Carousel, CarouselView};
    use crate::{Breakpoint, CarouselConfig, DotFlags, SwipeDirection};

    fn carousel(slides: usize, config: CarouselConfig, width: f64) -> Carousel {
        Carousel::new(slides, &config, width).unwrap()
    }

    #[test]
    fn looping_scenario_from_desktop() {
        let mut c = carousel(6, CarouselConfig::responsive(3, 2, 1), 1200.0);
        assert_eq!(c.breakpoint(), Breakpoint::Desktop);
        assert_eq!(c.visible_count(), 3);
        assert_eq!(c.max_index(), 3);
        assert_eq!(c.offset_percent(), 0.0);

        for _ in 0..3 {
            assert!(c.next());
        }
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.offset_percent(), -100.0);
        assert_eq!(c.track_transform(), "translateX(-100%)");

        assert!(c.next());
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.track_transform(), "translateX(0%)");
    }

    #[test]
    fn previous_wraps_to_max_when_looping() {
        let mut c = carousel(6, CarouselConfig::responsive(3, 2, 1), 1200.0);
        assert!(c.previous());
        assert_eq!(c.current_index(), 3);
        assert!(c.previous());
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn non_looping_saturates_at_both_ends() {
        let config = CarouselConfig::responsive(2, 2, 1).with_loop(false);
        let mut c = carousel(5, config, 1200.0);
        assert_eq!(c.max_index(), 3);

        assert!(!c.previous());
        assert_eq!(c.current_index(), 0);

        for _ in 0..10 {
            c.next();
        }
        assert_eq!(c.current_index(), 3);
        assert!(!c.next());
    }

    #[test]
    fn go_to_clamps_past_the_end() {
        let mut c = carousel(7, CarouselConfig::responsive(3, 2, 1), 1200.0);
        assert_eq!(c.go_to(2), 2);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.go_to(6), 4);
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn breakpoints_select_counts() {
        let config = CarouselConfig::responsive(3, 2, 1);
        assert_eq!(carousel(6, config.clone(), 500.0).visible_count(), 1);
        assert_eq!(carousel(6, config.clone(), 800.0).visible_count(), 2);
        assert_eq!(carousel(6, config, 1000.0).visible_count(), 3);
    }

    #[test]
    fn resize_clamps_index_and_is_idempotent() {
        let mut c = carousel(6, CarouselConfig::responsive(3, 2, 1), 500.0);
        assert_eq!(c.max_index(), 5);
        c.go_to(5);

        assert!(c.on_resize(1200.0));
        assert_eq!(c.visible_count(), 3);
        assert_eq!(c.max_index(), 3);
        assert_eq!(c.current_index(), 3);

        let before = (c.visible_count(), c.max_index(), c.current_index());
        assert!(!c.on_resize(1200.0));
        assert_eq!(before, (c.visible_count(), c.max_index(), c.current_index()));
    }

    #[test]
    fn dot_projection_hides_unreachable_positions() {
        let c = carousel(7, CarouselConfig::responsive(3, 3, 1), 1200.0);
        assert_eq!(c.max_index(), 4);
        let dots = c.dots(7);
        let shown: usize = dots.iter().filter(|d| d.is_shown()).count();
        assert_eq!(shown, 5);
        assert_eq!(dots[0], DotFlags::ACTIVE);
        assert_eq!(dots[5], DotFlags::HIDDEN);
        assert_eq!(dots[6], DotFlags::HIDDEN);
    }

    #[test]
    fn view_bundles_offset_and_dots() {
        let mut c = carousel(4, CarouselConfig::responsive(2, 2, 1), 1200.0);
        c.next();
        let view = c.view(3);
        assert_eq!(
            view,
            CarouselView {
                offset_percent: -50.0,
                dots: [DotFlags::empty(), DotFlags::ACTIVE, DotFlags::empty()]
                    .into_iter()
                    .collect(),
            }
        );
    }

    #[test]
    fn empty_carousel_is_static() {
        let mut c = carousel(0, CarouselConfig::responsive(3, 2, 1), 1200.0);
        assert_eq!(c.visible_count(), 1);
        assert_eq!(c.max_index(), 0);
        assert!(!c.next());
        assert!(!c.previous());
        assert_eq!(c.go_to(3), 0);
        assert_eq!(c.offset_percent(), 0.0);
        assert!(c.dots(0).is_empty());
    }

    #[test]
    fn fewer_slides_than_visible() {
        let mut c = carousel(2, CarouselConfig::responsive(3, 2, 1), 1200.0);
        assert_eq!(c.visible_count(), 2);
        assert_eq!(c.max_index(), 0);
        assert!(!c.next());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn swipes_navigate() {
        let mut c = carousel(6, CarouselConfig::responsive(3, 2, 1), 1200.0);

        c.on_touch_start(Point::new(300.0, 10.0));
        assert_eq!(c.on_touch_end(Point::new(270.0, 10.0)), None);
        assert_eq!(c.current_index(), 0);

        c.on_touch_start(Point::new(300.0, 10.0));
        assert_eq!(
            c.on_touch_end(Point::new(220.0, 10.0)),
            Some(SwipeDirection::Next)
        );
        assert_eq!(c.current_index(), 1);

        c.on_touch_start(Point::new(100.0, 10.0));
        assert_eq!(
            c.on_touch_end(Point::new(200.0, 10.0)),
            Some(SwipeDirection::Previous)
        );
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn autoplay_ticks_advance() {
        let config = CarouselConfig::responsive(1, 1, 1).with_autoplay(1000);
        let mut c = carousel(3, config, 1200.0);
        assert!(c.config().autoplay());
        assert!(!c.tick(5000));

        c.start_autoplay(0);
        assert!(c.is_autoplay_active());
        assert!(!c.tick(500));
        assert!(c.tick(1000));
        assert_eq!(c.current_index(), 1);

        assert!(c.stop_autoplay());
        assert!(!c.stop_autoplay());
        assert!(!c.tick(9000));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(Carousel::new(3, &CarouselConfig::responsive(0, 1, 1), 1200.0).is_err());
    }
}
