// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface detection for the fixed chrome: header, sticky footer, and the
//! progress bar recolor themselves to contrast with the section beneath them.
//!
//! Hosts describe the page as a list of [`SectionBand`]s in document order,
//! with rectangles in viewport coordinates. Sampling picks the last band that
//! contains the point, which is the one painted on top.

use kurbo::{Point, Rect};

/// Kinds of page sections that carry a known background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Full-height dark hero.
    Hero,
    /// Yellow about block.
    About,
    /// Yellow about block with the lineup teaser.
    AboutLineup,
    /// Yellow lineup grid.
    Lineup,
    /// Dark key-figures band.
    Numbers,
    /// Dark experience gallery.
    Experience,
    /// Yellow FAQ.
    Faq,
    /// Light accommodation block.
    Accommodation,
    /// Dark newsletter signup.
    Newsletter,
    /// Dark partners strip.
    Partners,
    /// Dark page footer.
    Footer,
    /// A section with no known background.
    Other,
}

impl SectionKind {
    // Checked in order; `about-lineup` wins over `about`.
    const TOKENS: [(&'static str, Self); 11] = [
        ("hero", Self::Hero),
        ("numbers", Self::Numbers),
        ("experience", Self::Experience),
        ("newsletter", Self::Newsletter),
        ("partners", Self::Partners),
        ("footer", Self::Footer),
        ("about-lineup", Self::AboutLineup),
        ("about", Self::About),
        ("lineup", Self::Lineup),
        ("faq", Self::Faq),
        ("accommodation", Self::Accommodation),
    ];

    /// Classifies an element from its class list tokens.
    ///
    /// ```
    /// use lander_scroll::SectionKind;
    ///
    /// let kind = SectionKind::from_classes("section about about-lineup".split_whitespace());
    /// assert_eq!(kind, SectionKind::AboutLineup);
    /// ```
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str> + Clone) -> Self {
        Self::TOKENS
            .iter()
            .find(|(token, _)| classes.clone().into_iter().any(|c| c == *token))
            .map_or(Self::Other, |(_, kind)| *kind)
    }

    /// Background surface of this section.
    #[must_use]
    pub fn surface(self) -> Option<Surface> {
        match self {
            Self::Hero
            | Self::Numbers
            | Self::Experience
            | Self::Newsletter
            | Self::Partners
            | Self::Footer => Some(Surface::Dark),
            Self::About | Self::AboutLineup | Self::Lineup | Self::Faq => Some(Surface::Accent),
            Self::Accommodation => Some(Surface::Light),
            Self::Other => None,
        }
    }

    /// Class for the sticky footer over this section.
    #[must_use]
    pub fn footer_class(self) -> Option<ToneClass> {
        match self {
            Self::AboutLineup | Self::Accommodation | Self::Faq => Some(ToneClass::OnLight),
            Self::Hero
            | Self::Numbers
            | Self::Experience
            | Self::Newsletter
            | Self::Partners
            | Self::Footer => Some(ToneClass::OnDark),
            Self::About | Self::Lineup | Self::Other => None,
        }
    }

    /// Class for the progress bar tip over this section.
    #[must_use]
    pub fn progress_class(self) -> Option<ToneClass> {
        match self {
            Self::Hero | Self::Numbers | Self::Experience | Self::Newsletter | Self::Partners => {
                Some(ToneClass::OnDark)
            }
            Self::About | Self::AboutLineup | Self::Lineup | Self::Faq | Self::Accommodation => {
                Some(ToneClass::OnYellow)
            }
            Self::Footer | Self::Other => None,
        }
    }
}

/// Background tone of a section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Near-black backgrounds.
    Dark,
    /// Off-white backgrounds.
    Light,
    /// The brand yellow.
    Accent,
}

impl Surface {
    /// Header class that contrasts with this surface.
    #[must_use]
    pub fn header_class(self) -> ToneClass {
        match self {
            Self::Dark => ToneClass::OnDark,
            Self::Light => ToneClass::OnLight,
            Self::Accent => ToneClass::OnYellow,
        }
    }
}

/// Contrast classes applied to fixed chrome.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ToneClass {
    /// `on-dark`
    OnDark,
    /// `on-yellow`
    OnYellow,
    /// `on-light`
    OnLight,
}

impl ToneClass {
    /// Every class, for clearing before applying a new one.
    pub const ALL: [Self; 3] = [Self::OnDark, Self::OnYellow, Self::OnLight];

    /// CSS class name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnDark => "on-dark",
            Self::OnYellow => "on-yellow",
            Self::OnLight => "on-light",
        }
    }
}

/// A section's bounds in viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionBand {
    /// Bounding box.
    pub rect: Rect,
    /// Classification.
    pub kind: SectionKind,
}

impl SectionBand {
    /// Creates a band.
    #[must_use]
    pub const fn new(rect: Rect, kind: SectionKind) -> Self {
        Self { rect, kind }
    }
}

/// The topmost band containing `point`, skipping bands `skip` rejects.
pub fn section_at(
    bands: &[SectionBand],
    point: Point,
    mut skip: impl FnMut(SectionKind) -> bool,
) -> Option<SectionKind> {
    bands
        .iter()
        .rev()
        .filter(|band| !skip(band.kind))
        .find(|band| band.rect.contains(point))
        .map(|band| band.kind)
}

/// Sticky footer class, sampled `inset` above the viewport bottom.
#[must_use]
pub fn footer_class(
    bands: &[SectionBand],
    viewport_width: f64,
    viewport_height: f64,
    inset: f64,
) -> Option<ToneClass> {
    let point = Point::new(viewport_width / 2.0, viewport_height - inset);
    section_at(bands, point, |_| false).and_then(SectionKind::footer_class)
}

/// Progress bar class, sampled at the bar's tip near the left edge.
#[must_use]
pub fn progress_class(bands: &[SectionBand], tip_y: f64) -> Option<ToneClass> {
    section_at(bands, Point::new(10.0, tip_y), |kind| kind == SectionKind::Footer)
        .and_then(SectionKind::progress_class)
}

/// Result of one [`HeaderToneTracker::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeaderTone {
    /// Whether the header carries `is-scrolled`.
    pub scrolled: bool,
    /// The contrast class to show; `None` clears all of them.
    pub class: Option<ToneClass>,
}

/// Tracks which contrast class the fixed header shows.
///
/// While the header background is still wiping away, no class applies. The
/// moment the wipe completes the header sits over the dark hero. After that:
///
/// - Scrolling down, the header adopts the surface of a section whose top has
///   just entered the strip under it.
/// - Scrolling up, it snaps to whatever section lies just below its bottom edge.
#[derive(Clone, Debug)]
pub struct HeaderToneTracker {
    wipe_complete: bool,
    surface: Surface,
    class: Option<ToneClass>,
    last_scroll_y: f64,
}

impl Default for HeaderToneTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderToneTracker {
    /// Depth of the strip under the header in which entering sections are
    /// detected.
    pub const ENTER_STRIP: f64 = 40.0;
    /// Offset below the header where the scroll-up sample is taken.
    pub const SAMPLE_OFFSET: f64 = 10.0;

    /// Creates a tracker for a page at the top.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wipe_complete: false,
            surface: Surface::Light,
            class: None,
            last_scroll_y: 0.0,
        }
    }

    /// The current class.
    #[must_use]
    pub fn class(&self) -> Option<ToneClass> {
        self.class
    }

    /// Feeds one scroll position.
    ///
    /// `progress` is the header wipe progress at `scroll_y` and `bands` are
    /// the page's sections in document order.
    pub fn update(
        &mut self,
        scroll_y: f64,
        progress: f64,
        bands: &[SectionBand],
        viewport_width: f64,
        header_height: f64,
    ) -> HeaderTone {
        if progress < 1.0 {
            self.wipe_complete = false;
            self.surface = Surface::Light;
            self.class = None;
        } else {
            if !self.wipe_complete {
                self.wipe_complete = true;
                self.adopt(Surface::Dark);
            }
            let sampled = if scroll_y > self.last_scroll_y {
                bands
                    .iter()
                    .rev()
                    .find(|band| {
                        band.kind != SectionKind::Footer
                            && band.rect.y0 > 0.0
                            && band.rect.y0 < header_height + Self::ENTER_STRIP
                    })
                    .map(|band| band.kind)
            } else {
                let point = Point::new(viewport_width / 2.0, header_height + Self::SAMPLE_OFFSET);
                section_at(bands, point, |kind| kind == SectionKind::Footer)
            };
            if let Some(surface) = sampled.and_then(SectionKind::surface) {
                self.adopt(surface);
            }
        }
        self.last_scroll_y = scroll_y;
        HeaderTone {
            scrolled: self.wipe_complete,
            class: self.class,
        }
    }

    fn adopt(&mut self, surface: Surface) {
        if self.class.is_some() && surface == self.surface {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?surface, "header tone changed");
        self.surface = surface;
        self.class = Some(surface.header_class());
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const WIDTH: f64 = 1200.0;
    const HEADER: f64 = 70.0;

    /// Stacks sections of the given heights, shifted up by `scroll_y`.
    fn page(scroll_y: f64, sections: &[(SectionKind, f64)]) -> Vec<SectionBand> {
        let mut top = -scroll_y;
        sections
            .iter()
            .map(|&(kind, height)| {
                let band = SectionBand::new(Rect::new(0.0, top, WIDTH, top + height), kind);
                top += height;
                band
            })
            .collect()
    }

    const LAYOUT: [(SectionKind, f64); 4] = [
        (SectionKind::Hero, 800.0),
        (SectionKind::About, 600.0),
        (SectionKind::Accommodation, 600.0),
        (SectionKind::Footer, 400.0),
    ];

    #[test]
    fn classifies_class_lists() {
        let kind = |s: &str| SectionKind::from_classes(s.split_whitespace());
        assert_eq!(kind("hero"), SectionKind::Hero);
        assert_eq!(kind("section faq"), SectionKind::Faq);
        assert_eq!(kind("section about-lineup"), SectionKind::AboutLineup);
        assert_eq!(kind("section tickets"), SectionKind::Other);
        assert_eq!(kind("footer"), SectionKind::Footer);
    }

    #[test]
    fn sampling_prefers_the_topmost_band() {
        let base = SectionBand::new(Rect::new(0.0, 0.0, WIDTH, 800.0), SectionKind::Hero);
        let overlay = SectionBand::new(Rect::new(0.0, 300.0, WIDTH, 500.0), SectionKind::Faq);
        let bands = [base, overlay];
        assert_eq!(
            section_at(&bands, Point::new(10.0, 400.0), |_| false),
            Some(SectionKind::Faq)
        );
        assert_eq!(
            section_at(&bands, Point::new(10.0, 100.0), |_| false),
            Some(SectionKind::Hero)
        );
        assert_eq!(section_at(&bands, Point::new(10.0, 900.0), |_| false), None);
    }

    #[test]
    fn footer_and_progress_classes() {
        let bands = page(1400.0, &LAYOUT);
        // Accommodation spans 0..600 and the footer 600..1000 in the viewport.
        assert_eq!(footer_class(&bands, WIDTH, 800.0, 80.0), Some(ToneClass::OnDark));
        assert_eq!(footer_class(&bands, WIDTH, 500.0, 80.0), Some(ToneClass::OnLight));
        assert_eq!(progress_class(&bands, 300.0), Some(ToneClass::OnYellow));
        assert_eq!(progress_class(&bands, 700.0), None);

        let top = page(0.0, &LAYOUT);
        assert_eq!(progress_class(&top, 0.0), Some(ToneClass::OnDark));
    }

    #[test]
    fn no_class_until_wipe_completes() {
        let mut tracker = HeaderToneTracker::new();
        let tone = tracker.update(60.0, 0.4, &page(60.0, &LAYOUT), WIDTH, HEADER);
        assert_eq!(tone, HeaderTone { scrolled: false, class: None });

        let tone = tracker.update(160.0, 1.0, &page(160.0, &LAYOUT), WIDTH, HEADER);
        assert_eq!(
            tone,
            HeaderTone {
                scrolled: true,
                class: Some(ToneClass::OnDark)
            }
        );
    }

    #[test]
    fn scrolling_down_adopts_entering_section() {
        let mut tracker = HeaderToneTracker::new();
        tracker.update(200.0, 1.0, &page(200.0, &LAYOUT), WIDTH, HEADER);
        assert_eq!(tracker.class(), Some(ToneClass::OnDark));

        // About's top is 20px below the viewport top: inside the strip.
        let tone = tracker.update(780.0, 1.0, &page(780.0, &LAYOUT), WIDTH, HEADER);
        assert_eq!(tone.class, Some(ToneClass::OnYellow));

        // Accommodation enters next.
        let tone = tracker.update(1360.0, 1.0, &page(1360.0, &LAYOUT), WIDTH, HEADER);
        assert_eq!(tone.class, Some(ToneClass::OnLight));

        // Further down, nothing enters the strip; the class holds.
        let tone = tracker.update(1500.0, 1.0, &page(1500.0, &LAYOUT), WIDTH, HEADER);
        assert_eq!(tone.class, Some(ToneClass::OnLight));
    }

    #[test]
    fn scrolling_up_snaps_to_sampled_section() {
        let mut tracker = HeaderToneTracker::new();
        tracker.update(200.0, 1.0, &page(200.0, &LAYOUT), WIDTH, HEADER);
        tracker.update(1000.0, 1.0, &page(1000.0, &LAYOUT), WIDTH, HEADER);

        // Back up to where the hero sits under the header's bottom edge.
        let tone = tracker.update(600.0, 1.0, &page(600.0, &LAYOUT), WIDTH, HEADER);
        assert_eq!(tone.class, Some(ToneClass::OnDark));

        // All the way up: the wipe reverses and the class clears.
        let tone = tracker.update(0.0, 0.0, &page(0.0, &LAYOUT), WIDTH, HEADER);
        assert_eq!(tone, HeaderTone { scrolled: false, class: None });
    }
}
