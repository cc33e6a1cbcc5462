// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry constants shared by the scroll projections.

/// Pixel distances that shape the scroll effects.
///
/// The defaults match the page's stylesheet: a 70px fixed header and a sticky
/// footer bar near the bottom of the viewport.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ScrollConfig {
    /// Height of the fixed header.
    pub header_height: f64,
    /// Scroll distance over which the header background wipes away.
    pub wipe_range: f64,
    /// Scroll distance over which the scroll indicator line fills.
    pub indicator_range: f64,
    /// Viewport fraction above which a section top triggers its reveal.
    pub reveal_ratio: f64,
    /// Distance from the viewport top at which the hero CTA starts handing off
    /// to the sticky footer.
    pub cta_trigger: f64,
    /// Scroll distance over which the CTA hand-off completes.
    pub cta_range: f64,
    /// Scroll offset past which the back-to-top button shows.
    pub back_to_top_after: f64,
    /// Hero bottom (viewport coordinates) below which the floating language
    /// selector hides.
    pub floating_language_hide_below: f64,
    /// Distance above the viewport bottom where the sticky footer samples the
    /// section behind it.
    pub footer_sample_inset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_height: 70.0,
            wipe_range: 150.0,
            indicator_range: 200.0,
            reveal_ratio: 0.85,
            cta_trigger: 100.0,
            cta_range: 60.0,
            back_to_top_after: 500.0,
            floating_language_hide_below: 150.0,
            footer_sample_inset: 80.0,
        }
    }
}
