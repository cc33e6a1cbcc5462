// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration and responsive breakpoints.

use core::num::NonZeroUsize;

/// Viewport widths at or below this value use the mobile slide count.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Viewport widths at or below this value (and above [`MOBILE_MAX_WIDTH`])
/// use the tablet slide count.
pub const TABLET_MAX_WIDTH: f64 = 900.0;

/// Default autoplay interval in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 5000;

/// Responsive layout class derived from the viewport width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// `width <= 768`.
    Mobile,
    /// `768 < width <= 900`.
    Tablet,
    /// `width > 900`.
    Desktop,
}

impl Breakpoint {
    /// Classifies a viewport width.
    ///
    /// A NaN width compares false against both limits and is treated as desktop.
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// Reasons a [`CarouselConfig`] is rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A slides-visible count was zero.
    #[error("slides visible on {0:?} must be at least 1")]
    ZeroSlidesVisible(Breakpoint),
    /// The autoplay interval was zero.
    #[error("autoplay interval must be greater than zero")]
    ZeroAutoplayInterval,
}

/// Caller-supplied carousel options, immutable once a carousel is built.
///
/// Slide counts are plain integers here so that the type can be filled in from
/// loosely typed host configuration; [`CarouselConfig::validate`] turns them
/// into a [`ValidConfig`] and rejects zeros.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CarouselConfig {
    /// Slides shown when the viewport is wider than the tablet breakpoint.
    pub slides_visible_desktop: usize,
    /// Slides shown between the mobile and tablet breakpoints.
    ///
    /// `None` falls back to [`slides_visible_desktop`](Self::slides_visible_desktop).
    pub slides_visible_tablet: Option<usize>,
    /// Slides shown at or below the mobile breakpoint.
    pub slides_visible_mobile: usize,
    /// Wrap around at both ends.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    /// Advance automatically once started.
    pub autoplay: bool,
    /// Autoplay period in milliseconds.
    pub autoplay_interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides_visible_desktop: 1,
            slides_visible_tablet: None,
            slides_visible_mobile: 1,
            looping: true,
            autoplay: false,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
        }
    }
}

impl CarouselConfig {
    /// A config showing `desktop`, `tablet`, and `mobile` slides per breakpoint.
    #[must_use]
    pub fn responsive(desktop: usize, tablet: usize, mobile: usize) -> Self {
        Self {
            slides_visible_desktop: desktop,
            slides_visible_tablet: Some(tablet),
            slides_visible_mobile: mobile,
            ..Self::default()
        }
    }

    /// Sets whether navigation wraps at the ends.
    #[must_use]
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Enables autoplay with the given period.
    #[must_use]
    pub fn with_autoplay(mut self, interval_ms: u32) -> Self {
        self.autoplay = true;
        self.autoplay_interval_ms = interval_ms;
        self
    }

    /// Checks the preconditions and produces the validated form.
    pub fn validate(&self) -> Result<ValidConfig, ConfigError> {
        let count = |value: usize, breakpoint| {
            NonZeroUsize::new(value).ok_or(ConfigError::ZeroSlidesVisible(breakpoint))
        };
        let desktop = count(self.slides_visible_desktop, Breakpoint::Desktop)?;
        let tablet = count(
            self.slides_visible_tablet
                .unwrap_or(self.slides_visible_desktop),
            Breakpoint::Tablet,
        )?;
        let mobile = count(self.slides_visible_mobile, Breakpoint::Mobile)?;
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::ZeroAutoplayInterval);
        }
        Ok(ValidConfig {
            desktop,
            tablet,
            mobile,
            looping: self.looping,
            autoplay: self.autoplay,
            autoplay_interval_ms: self.autoplay_interval_ms,
        })
    }
}

/// A [`CarouselConfig`] whose preconditions have been checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValidConfig {
    desktop: NonZeroUsize,
    tablet: NonZeroUsize,
    mobile: NonZeroUsize,
    looping: bool,
    autoplay: bool,
    autoplay_interval_ms: u32,
}

impl ValidConfig {
    /// Configured slide count for a breakpoint.
    #[must_use]
    pub const fn slides_visible(&self, breakpoint: Breakpoint) -> NonZeroUsize {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
        }
    }

    /// Whether navigation wraps at the ends.
    #[must_use]
    pub const fn looping(&self) -> bool {
        self.looping
    }

    /// Whether autoplay should be started once the carousel is attached.
    #[must_use]
    pub const fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Autoplay period in milliseconds (never zero).
    #[must_use]
    pub const fn autoplay_interval_ms(&self) -> u32 {
        self.autoplay_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_match_boundaries() {
        assert_eq!(Breakpoint::for_width(320.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(768.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(768.5), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(900.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(901.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::for_width(f64::NAN), Breakpoint::Desktop);
    }

    #[test]
    fn tablet_defaults_to_desktop() {
        let config = CarouselConfig {
            slides_visible_desktop: 4,
            ..CarouselConfig::default()
        };
        let valid = config.validate().unwrap();
        assert_eq!(valid.slides_visible(Breakpoint::Tablet).get(), 4);
        assert_eq!(valid.slides_visible(Breakpoint::Mobile).get(), 1);
    }

    #[test]
    fn zero_counts_are_rejected() {
        let config = CarouselConfig::responsive(3, 0, 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroSlidesVisible(Breakpoint::Tablet))
        );
        let config = CarouselConfig::responsive(0, 2, 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroSlidesVisible(Breakpoint::Desktop))
        );
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = CarouselConfig::default().with_autoplay(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroAutoplayInterval));
    }
}
