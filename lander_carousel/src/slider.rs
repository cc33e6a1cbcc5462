// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full-width slider that always shows one slide and wraps in both directions.

use alloc::format;
use alloc::string::String;

use kurbo::Point;

use crate::{DotFlags, DotStates, SwipeDirection, SwipeState};

/// One-slide-at-a-time slider with wrap-around on both ends.
///
/// Unlike [`Carousel`](crate::Carousel), jumping to any out-of-range index
/// wraps instead of clamping: one step before the start lands on the last
/// slide, and one step past the end lands on the first.
#[derive(Clone, Debug)]
pub struct WrapSlider {
    slide_count: usize,
    current: usize,
    swipe: SwipeState,
}

impl WrapSlider {
    /// Creates a slider over `slide_count` slides, starting at the first.
    #[must_use]
    pub const fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current: 0,
            swipe: SwipeState::new(),
        }
    }

    /// Number of slides.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the visible slide.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Jumps to `index`; `-1` means the last slide and `slide_count` means the
    /// first. Any other out-of-range value wraps modulo the slide count.
    pub fn go_to(&mut self, index: isize) {
        if self.slide_count == 0 {
            return;
        }
        #[allow(
            clippy::cast_possible_wrap,
            reason = "Slide counts are far below isize::MAX"
        )]
        let len = self.slide_count as isize;
        #[allow(
            clippy::cast_sign_loss,
            reason = "rem_euclid with a positive modulus is non-negative"
        )]
        let wrapped = index.rem_euclid(len) as usize;
        #[cfg(feature = "tracing")]
        tracing::debug!(from = self.current, to = wrapped, "slider moved");
        self.current = wrapped;
    }

    /// Shows the next slide, wrapping to the first.
    pub fn next(&mut self) {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "Slide indices are far below isize::MAX"
        )]
        let index = self.current as isize + 1;
        self.go_to(index);
    }

    /// Shows the previous slide, wrapping to the last.
    pub fn previous(&mut self) {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "Slide indices are far below isize::MAX"
        )]
        let index = self.current as isize - 1;
        self.go_to(index);
    }

    /// Forwards a `touchstart` position.
    pub fn on_touch_start(&mut self, position: Point) {
        self.swipe.on_touch_start(position);
    }

    /// Forwards a `touchend` position and navigates on a swipe.
    pub fn on_touch_end(&mut self, position: Point) -> Option<SwipeDirection> {
        let direction = self.swipe.on_touch_end(position)?;
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Previous => self.previous(),
        }
        Some(direction)
    }

    /// CSS `transform` for the slide container: one full width per slide.
    #[must_use]
    pub fn container_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }

    /// Dot flags: the current dot is active, none are ever hidden.
    #[must_use]
    pub fn dots(&self, dot_count: usize) -> DotStates {
        (0..dot_count)
            .map(|i| {
                if i == self.current {
                    DotFlags::ACTIVE
                } else {
                    DotFlags::empty()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::WrapSlider;
    use crate::DotFlags;

    #[test]
    fn wraps_in_both_directions() {
        let mut slider = WrapSlider::new(3);
        slider.previous();
        assert_eq!(slider.current(), 2);
        slider.next();
        assert_eq!(slider.current(), 0);
        slider.go_to(3);
        assert_eq!(slider.current(), 0);
        slider.go_to(-1);
        assert_eq!(slider.current(), 2);
    }

    #[test]
    fn transform_is_full_width_per_slide() {
        let mut slider = WrapSlider::new(4);
        assert_eq!(slider.container_transform(), "translateX(-0%)");
        slider.go_to(2);
        assert_eq!(slider.container_transform(), "translateX(-200%)");
    }

    #[test]
    fn dots_follow_current_and_never_hide() {
        let mut slider = WrapSlider::new(3);
        slider.next();
        let dots = slider.dots(3);
        assert_eq!(
            dots.as_slice(),
            &[DotFlags::empty(), DotFlags::ACTIVE, DotFlags::empty()]
        );
    }

    #[test]
    fn swipe_moves_one_slide() {
        let mut slider = WrapSlider::new(3);
        slider.on_touch_start(Point::new(100.0, 0.0));
        slider.on_touch_end(Point::new(200.0, 0.0));
        assert_eq!(slider.current(), 2);
    }

    #[test]
    fn empty_slider_stays_put() {
        let mut slider = WrapSlider::new(0);
        slider.next();
        slider.previous();
        slider.go_to(5);
        assert_eq!(slider.current(), 0);
        assert!(slider.dots(0).is_empty());
    }
}
