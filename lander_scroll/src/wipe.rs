// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header wipe, sticky footer reveal, and the hero CTA hand-off.

use alloc::format;
use alloc::string::String;

use crate::ScrollConfig;

/// Fraction of the header wipe completed at `scroll_y`, in `[0, 1]`.
///
/// A non-positive `range` completes the wipe immediately once scrolled.
#[must_use]
pub fn wipe_progress(scroll_y: f64, range: f64) -> f64 {
    if range <= 0.0 {
        return if scroll_y > 0.0 { 1.0 } else { 0.0 };
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Phase of the header as the page scrolls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HeaderPhase {
    /// The header background is still (partially) visible.
    Wiping,
    /// The wipe completed; the header floats over page content
    /// (`is-scrolled`).
    Settled,
}

/// Everything the header needs for one scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderWipe {
    /// Wipe progress in `[0, 1]`.
    pub progress: f64,
    /// Current phase.
    pub phase: HeaderPhase,
    /// `clip-path` for the header background and its default layer.
    pub clip_path: String,
    /// Ticket button fill while wiping, in percent; `None` once settled.
    pub ticket_fill_percent: Option<f64>,
    /// Ticket button text uses the dark color (fill past halfway).
    pub ticket_text_dark: bool,
    /// Burger icon uses the accent color (wipe past halfway).
    pub burger_accent: bool,
}

impl HeaderWipe {
    /// Projects the header state at `scroll_y`.
    #[must_use]
    pub fn at(scroll_y: f64, config: &ScrollConfig) -> Self {
        let progress = wipe_progress(scroll_y, config.wipe_range);
        let phase = if progress >= 1.0 {
            HeaderPhase::Settled
        } else {
            HeaderPhase::Wiping
        };
        let fill = progress * 100.0;
        Self {
            progress,
            phase,
            clip_path: format!("inset(0 0 {fill}% 0)"),
            ticket_fill_percent: (phase == HeaderPhase::Wiping).then_some(fill),
            ticket_text_dark: fill > 50.0,
            burger_accent: progress > 0.5,
        }
    }
}

/// Sticky footer background clip and content visibility.
#[derive(Clone, Debug, PartialEq)]
pub struct FooterReveal {
    /// `clip-path` for the footer background; clips from the top down.
    pub clip_path: String,
    /// Whether the footer content carries `is-visible`.
    pub visible: bool,
}

impl FooterReveal {
    /// Footer mirroring the header wipe: it appears as the header disappears.
    #[must_use]
    pub fn from_wipe(progress: f64) -> Self {
        Self {
            clip_path: top_clip(progress),
            visible: progress > 0.1,
        }
    }

    /// Footer synchronized with the hero CTA hand-off.
    #[must_use]
    pub fn from_handoff(progress: f64) -> Self {
        Self {
            clip_path: top_clip(progress),
            visible: progress > 0.5,
        }
    }

    /// Fully hidden footer.
    #[must_use]
    pub fn hidden() -> Self {
        Self::from_handoff(0.0)
    }
}

fn top_clip(progress: f64) -> String {
    let top = (1.0 - progress.clamp(0.0, 1.0)) * 100.0;
    format!("inset({top}% 0 0 0)")
}

/// Hero CTA button styling during the hand-off to the sticky footer.
#[derive(Clone, Debug, PartialEq)]
pub struct CtaHandoff {
    /// Hand-off progress in `[0, 1]`; zero means the reset state.
    pub progress: f64,
    /// Button opacity.
    pub opacity: f64,
    /// Button `transform`.
    pub transform: String,
    /// Whether the button still receives pointer events.
    pub interactive: bool,
    /// Matching footer state.
    pub footer: FooterReveal,
}

impl CtaHandoff {
    /// Projects the hand-off from the CTA's top edge in viewport coordinates.
    ///
    /// Above the trigger line the button is fully reset and the footer hidden.
    #[must_use]
    pub fn at(cta_top: f64, config: &ScrollConfig) -> Self {
        if cta_top >= config.cta_trigger {
            return Self {
                progress: 0.0,
                opacity: 1.0,
                transform: String::from("translateY(0) scale(1)"),
                interactive: true,
                footer: FooterReveal::hidden(),
            };
        }
        let progress = if config.cta_range > 0.0 {
            ((config.cta_trigger - cta_top) / config.cta_range).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self {
            progress,
            opacity: 1.0 - progress,
            transform: format!(
                "translateY({}px) scale({})",
                progress * -15.0,
                1.0 - progress * 0.05
            ),
            interactive: progress <= 0.5,
            footer: FooterReveal::from_handoff(progress),
        }
    }
}

/// The CTA hand-off at `cta_top`, or `None` while the CTA sits below the
/// trigger line and everything is in its reset state.
#[must_use]
pub fn cta_transition(cta_top: f64, config: &ScrollConfig) -> Option<CtaHandoff> {
    (cta_top < config.cta_trigger).then(|| CtaHandoff::at(cta_top, config))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(wipe_progress(-20.0, 150.0), 0.0);
        assert_eq!(wipe_progress(75.0, 150.0), 0.5);
        assert_eq!(wipe_progress(900.0, 150.0), 1.0);
        assert_eq!(wipe_progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn header_wipes_then_settles() {
        let config = ScrollConfig::default();
        let top = HeaderWipe::at(0.0, &config);
        assert_eq!(top.phase, HeaderPhase::Wiping);
        assert_eq!(top.clip_path, "inset(0 0 0% 0)");
        assert_eq!(top.ticket_fill_percent, Some(0.0));
        assert!(!top.ticket_text_dark);
        assert!(!top.burger_accent);

        let mid = HeaderWipe::at(90.0, &config);
        assert_eq!(mid.clip_path, "inset(0 0 60% 0)");
        assert!(mid.ticket_text_dark);
        assert!(mid.burger_accent);

        let done = HeaderWipe::at(400.0, &config);
        assert_eq!(done.phase, HeaderPhase::Settled);
        assert_eq!(done.clip_path, "inset(0 0 100% 0)");
        assert_eq!(done.ticket_fill_percent, None);
    }

    #[test]
    fn footer_mirrors_wipe() {
        let footer = FooterReveal::from_wipe(0.25);
        assert_eq!(footer.clip_path, "inset(75% 0 0 0)");
        assert!(footer.visible);
        assert!(!FooterReveal::from_wipe(0.1).visible);
    }

    #[test]
    fn cta_resets_above_trigger() {
        let config = ScrollConfig::default();
        let handoff = CtaHandoff::at(300.0, &config);
        assert_eq!(handoff.opacity, 1.0);
        assert_eq!(handoff.transform, "translateY(0) scale(1)");
        assert!(handoff.interactive);
        assert_eq!(handoff.footer, FooterReveal::hidden());
        assert_eq!(handoff.footer.clip_path, "inset(100% 0 0 0)");
    }

    #[test]
    fn cta_hands_off_to_footer() {
        let config = ScrollConfig::default();
        // 30px past the 100px trigger over a 60px range: halfway.
        let half = CtaHandoff::at(70.0, &config);
        assert_eq!(half.progress, 0.5);
        assert_eq!(half.opacity, 0.5);
        assert!(half.interactive);
        assert!(!half.footer.visible);

        let done = CtaHandoff::at(-500.0, &config);
        assert_eq!(done.progress, 1.0);
        assert_eq!(done.transform, "translateY(-15px) scale(0.95)");
        assert!(!done.interactive);
        assert!(done.footer.visible);
        assert_eq!(done.footer.clip_path, "inset(0% 0 0 0)");
    }

    #[test]
    fn transition_is_none_until_trigger() {
        let config = ScrollConfig::default();
        assert_eq!(cta_transition(100.0, &config), None);
        let handoff = cta_transition(99.0, &config).map(|h| h.interactive);
        assert_eq!(handoff, Some(true));
    }
}
