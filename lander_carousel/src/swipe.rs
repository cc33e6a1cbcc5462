// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal swipe recognition for touch input.
//!
//! A swipe is recognized from exactly two samples: the position where the touch
//! started and the position where it ended. Intermediate moves are irrelevant,
//! so hosts only need to forward `touchstart` and `touchend`.
//!
//! ## Rules
//!
//! 1. The signed horizontal delta is `start.x - end.x`.
//! 2. If `|delta| > threshold` the gesture is a swipe; otherwise it is a tap and
//!    produces nothing.
//! 3. A positive delta (finger moved left) means [`SwipeDirection::Next`], a
//!    negative delta (finger moved right) means [`SwipeDirection::Previous`].
//! 4. A touch end without a recorded start produces nothing.
//!
//! ```
//! use kurbo::Point;
//! use lander_carousel::{SwipeDirection, SwipeState};
//!
//! let mut swipe = SwipeState::new();
//! swipe.on_touch_start(Point::new(300.0, 40.0));
//! assert_eq!(
//!     swipe.on_touch_end(Point::new(220.0, 48.0)),
//!     Some(SwipeDirection::Next)
//! );
//!
//! // Short drags are taps.
//! swipe.on_touch_start(Point::new(300.0, 40.0));
//! assert_eq!(swipe.on_touch_end(Point::new(270.0, 40.0)), None);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Default minimum horizontal travel, in CSS pixels, for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Navigation intent produced by a recognized swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Finger moved left: advance.
    Next,
    /// Finger moved right: go back.
    Previous,
}

/// Two-sample swipe recognizer.
#[derive(Clone, Debug)]
pub struct SwipeState {
    start: Option<Point>,
    /// Horizontal distance that must be strictly exceeded.
    pub threshold: f64,
}

impl SwipeState {
    /// Creates a recognizer with the default 50-unit threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_threshold(DEFAULT_SWIPE_THRESHOLD)
    }

    /// Creates a recognizer with a custom threshold.
    #[must_use]
    pub const fn with_threshold(threshold: f64) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    /// Records where a touch began, replacing any pending start.
    pub fn on_touch_start(&mut self, position: Point) {
        self.start = Some(position);
    }

    /// Completes a gesture and classifies it.
    pub fn on_touch_end(&mut self, position: Point) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        classify(start.x - position.x, self.threshold)
    }

    /// Drops a pending start, for example on `touchcancel`.
    ///
    /// Returns `true` if a touch was pending.
    pub fn cancel(&mut self) -> bool {
        self.start.take().is_some()
    }

    /// Returns `true` while a touch start is waiting for its end.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies a signed horizontal delta (`start - end`).
#[must_use]
pub fn classify(delta: f64, threshold: f64) -> Option<SwipeDirection> {
    if delta.abs() > threshold {
        if delta > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    } else {
        None
    }
}
