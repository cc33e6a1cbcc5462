// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll indicator line, page progress bar, and scroll-position toggles.

/// Fill of the hero scroll-indicator line, in percent.
#[must_use]
pub fn indicator_line_percent(scroll_y: f64, range: f64) -> f64 {
    if range <= 0.0 {
        return if scroll_y > 0.0 { 100.0 } else { 0.0 };
    }
    (scroll_y / range).clamp(0.0, 1.0) * 100.0
}

/// How far the document has been scrolled, in percent.
///
/// Returns `0.0` when the document is not taller than the viewport.
#[must_use]
pub fn scroll_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || scroll_y.is_nan() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Viewport y of the progress bar's tip for a given fill.
#[must_use]
pub fn progress_tip_y(percent: f64, viewport_height: f64) -> f64 {
    percent / 100.0 * viewport_height
}

/// Whether the back-to-top button is shown.
#[must_use]
pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Whether the floating language selector hides, given the hero's bottom edge
/// in viewport coordinates.
#[must_use]
pub fn floating_language_hidden(hero_bottom: f64, threshold: f64) -> bool {
    hero_bottom < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_line_fills_over_range() {
        assert_eq!(indicator_line_percent(0.0, 200.0), 0.0);
        assert_eq!(indicator_line_percent(50.0, 200.0), 25.0);
        assert_eq!(indicator_line_percent(1000.0, 200.0), 100.0);
        assert_eq!(indicator_line_percent(-30.0, 200.0), 0.0);
    }

    #[test]
    fn short_documents_report_no_progress() {
        assert_eq!(scroll_percent(0.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_percent(100.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn progress_tracks_scrollable_height() {
        assert_eq!(scroll_percent(600.0, 2000.0, 800.0), 50.0);
        assert_eq!(scroll_percent(1200.0, 2000.0, 800.0), 100.0);
        // Overscroll on touch devices.
        assert_eq!(scroll_percent(1300.0, 2000.0, 800.0), 100.0);
        assert_eq!(scroll_percent(-40.0, 2000.0, 800.0), 0.0);
        assert_eq!(progress_tip_y(50.0, 800.0), 400.0);
    }

    #[test]
    fn toggles_use_strict_thresholds() {
        assert!(!back_to_top_visible(500.0, 500.0));
        assert!(back_to_top_visible(501.0, 500.0));
        assert!(floating_language_hidden(149.0, 150.0));
        assert!(!floating_language_hidden(150.0, 150.0));
    }
}
