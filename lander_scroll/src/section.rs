// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-section projections: reveal-on-scroll and the focus glow/fade.

use kurbo::Rect;
use smallvec::SmallVec;

/// Maximum accent glow while a section is in focus.
pub const MAX_GLOW: f64 = 0.15;

/// Maximum darkening once a section scrolls out under the header.
pub const MAX_FADE_OUT: f64 = 0.7;

/// Glow above which a section carries `is-focused`.
pub const FOCUSED_GLOW: f64 = 0.05;

/// Returns `true` when a section's top edge has risen far enough into the
/// viewport to reveal it.
#[must_use]
pub fn should_reveal(section_top: f64, viewport_height: f64, reveal_ratio: f64) -> bool {
    section_top < viewport_height * reveal_ratio
}

/// Latching reveal state for a fixed list of sections.
///
/// Once a section is revealed it stays revealed; scrolling back up does not
/// hide it again.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: SmallVec<[bool; 16]>,
}

impl RevealSet {
    /// Tracks `len` sections, none revealed.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            revealed: smallvec::smallvec![false; len],
        }
    }

    /// Updates from the current section tops (viewport coordinates).
    ///
    /// Calls `on_reveal` for each section that becomes revealed in this pass.
    /// Tops beyond the tracked length are ignored.
    pub fn update(
        &mut self,
        tops: impl IntoIterator<Item = f64>,
        viewport_height: f64,
        reveal_ratio: f64,
        mut on_reveal: impl FnMut(usize),
    ) {
        for (index, top) in tops.into_iter().enumerate() {
            let Some(slot) = self.revealed.get_mut(index) else {
                break;
            };
            if !*slot && should_reveal(top, viewport_height, reveal_ratio) {
                *slot = true;
                on_reveal(index);
            }
        }
    }

    /// Returns `true` if the section at `index` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Returns `true` once every tracked section is revealed.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}

/// Focus styling for one section.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FocusFade {
    /// `--focus-glow`, in `[0, MAX_GLOW]`.
    pub glow: f64,
    /// `--fade-out`, in `[0, MAX_FADE_OUT]`.
    pub fade_out: f64,
    /// Whether the section carries `is-focused`.
    pub focused: bool,
}

impl FocusFade {
    /// No glow, no fade.
    pub const NONE: Self = Self {
        glow: 0.0,
        fade_out: 0.0,
        focused: false,
    };

    /// Projects the focus styling for a section whose bounds are `rect` in
    /// viewport coordinates.
    ///
    /// - Approaching the header from below, the glow ramps up over the first
    ///   40% of the viewport height.
    /// - Until half the section has passed under the header, the glow holds at
    ///   its maximum.
    /// - Over the second half, the glow ramps down while the section darkens.
    #[must_use]
    pub fn for_section(rect: Rect, viewport_height: f64, header_offset: f64) -> Self {
        if !(rect.y0 < viewport_height && rect.y1 > header_offset) {
            return Self::NONE;
        }
        let (glow, fade_out) = if rect.y0 > header_offset {
            let distance = rect.y0 - header_offset;
            let zone = viewport_height * 0.4;
            let ramp = if zone > 0.0 {
                1.0 - (distance / zone).min(1.0)
            } else {
                0.0
            };
            (ramp * MAX_GLOW, 0.0)
        } else {
            let past = (header_offset - rect.y0) / rect.height();
            if past < 0.5 {
                (MAX_GLOW, 0.0)
            } else {
                let out = ((past - 0.5) / 0.5).min(1.0);
                (MAX_GLOW * (1.0 - out), out * MAX_FADE_OUT)
            }
        };
        Self {
            glow,
            fade_out,
            focused: glow > FOCUSED_GLOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const VH: f64 = 800.0;
    const HEADER: f64 = 70.0;

    fn section(top: f64, height: f64) -> Rect {
        Rect::new(0.0, top, 1200.0, top + height)
    }

    #[test]
    fn reveal_threshold() {
        assert!(should_reveal(679.0, VH, 0.85));
        assert!(!should_reveal(680.0, VH, 0.85));
    }

    #[test]
    fn reveal_latches() {
        let mut set = RevealSet::new(3);
        let mut revealed = Vec::new();
        set.update([100.0, 900.0, 2000.0], VH, 0.85, |i| revealed.push(i));
        assert_eq!(revealed, [0]);

        // Scrolling further reveals the next section; the first stays.
        set.update([-500.0, 300.0, 1400.0], VH, 0.85, |i| revealed.push(i));
        assert_eq!(revealed, [0, 1]);

        // Scrolling back up hides nothing and re-reveals nothing.
        set.update([100.0, 900.0, 2000.0], VH, 0.85, |i| revealed.push(i));
        assert_eq!(revealed, [0, 1]);
        assert!(set.is_revealed(1));
        assert!(!set.is_revealed(2));
        assert!(!set.all_revealed());
    }

    #[test]
    fn offscreen_sections_have_no_focus() {
        assert_eq!(FocusFade::for_section(section(900.0, 600.0), VH, HEADER), FocusFade::NONE);
        assert_eq!(FocusFade::for_section(section(-700.0, 600.0), VH, HEADER), FocusFade::NONE);
    }

    #[test]
    fn glow_ramps_in_from_below() {
        // 320px = 40% of 800 below the header: the ramp has not started.
        let far = FocusFade::for_section(section(HEADER + 320.0, 600.0), VH, HEADER);
        assert_eq!(far.glow, 0.0);

        let half = FocusFade::for_section(section(HEADER + 160.0, 600.0), VH, HEADER);
        assert!((half.glow - 0.075).abs() < 1e-9);
        assert!(half.focused);
    }

    #[test]
    fn glow_holds_then_fades_to_black() {
        let holding = FocusFade::for_section(section(HEADER - 100.0, 600.0), VH, HEADER);
        assert_eq!(holding.glow, MAX_GLOW);
        assert_eq!(holding.fade_out, 0.0);

        // 75% past the header: halfway through the fade-out.
        let fading = FocusFade::for_section(section(HEADER - 450.0, 600.0), VH, HEADER);
        assert!((fading.glow - 0.075).abs() < 1e-9);
        assert!((fading.fade_out - 0.35).abs() < 1e-9);

        // Nearly gone: glow below the focus cutoff.
        let gone = FocusFade::for_section(section(HEADER - 590.0, 600.0), VH, HEADER);
        assert!(!gone.focused);
        assert!(gone.fade_out > 0.65);
    }
}
