// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll effects and page widgets on a simulated page layout.
//!
//! The page is a stack of sections with fixed heights. Scrolling moves every
//! section up by the scroll offset, and each step prints what the browser
//! host would write into the DOM: header wipe, header and footer tones,
//! progress bar, and section reveals.
//!
//! Run:
//! - `cargo run -p lander_demos --example scroll_effects`

use kurbo::Rect;
use lander_page::{AnimatedCounter, Countdown, CountdownField, CounterSpec, FlipTracker};
use lander_scroll::{
    FocusFade, HeaderToneTracker, HeaderWipe, RevealSet, ScrollConfig, SectionBand, SectionKind,
    footer_class, progress_class, progress_tip_y, scroll_percent,
};

const VIEWPORT: (f64, f64) = (1280.0, 800.0);

/// Section kinds and heights, top to bottom.
const LAYOUT: &[(SectionKind, f64)] = &[
    (SectionKind::Hero, 900.0),
    (SectionKind::About, 700.0),
    (SectionKind::Lineup, 900.0),
    (SectionKind::Numbers, 500.0),
    (SectionKind::Accommodation, 800.0),
    (SectionKind::Faq, 700.0),
    (SectionKind::Footer, 400.0),
];

/// Section rectangles in viewport coordinates at `scroll_y`.
fn bands_at(scroll_y: f64) -> Vec<SectionBand> {
    let mut top = -scroll_y;
    LAYOUT
        .iter()
        .map(|&(kind, height)| {
            let band = SectionBand::new(Rect::new(0.0, top, VIEWPORT.0, top + height), kind);
            top += height;
            band
        })
        .collect()
}

fn main() {
    let config = ScrollConfig::default();
    let document_height: f64 = LAYOUT.iter().map(|(_, h)| h).sum();
    let mut tone = HeaderToneTracker::new();
    let mut reveal = RevealSet::new(LAYOUT.len());

    for scroll_y in [0.0, 75.0, 150.0, 600.0, 1_500.0, 2_600.0, 3_600.0, 1_200.0] {
        let bands = bands_at(scroll_y);
        let wipe = HeaderWipe::at(scroll_y, &config);
        let header = tone.update(
            scroll_y,
            wipe.progress,
            &bands,
            VIEWPORT.0,
            config.header_height,
        );
        let percent = scroll_percent(scroll_y, document_height, VIEWPORT.1);
        let footer = footer_class(&bands, VIEWPORT.0, VIEWPORT.1, config.footer_sample_inset);
        let progress = progress_class(&bands, progress_tip_y(percent, VIEWPORT.1));

        let mut revealed = Vec::new();
        reveal.update(
            bands.iter().map(|b| b.rect.y0),
            VIEWPORT.1,
            config.reveal_ratio,
            |index| revealed.push(index),
        );
        let focused: Vec<usize> = bands
            .iter()
            .enumerate()
            .filter(|(_, b)| {
                FocusFade::for_section(b.rect, VIEWPORT.1, config.header_height).focused
            })
            .map(|(i, _)| i)
            .collect();

        println!("scroll {scroll_y:>6}px");
        println!("  header clip {:<20} phase {:?}", wipe.clip_path, wipe.phase);
        println!(
            "  header tone {:?} scrolled={}",
            header.class.map(|c| c.as_str()),
            header.scrolled
        );
        println!(
            "  progress {percent:.1}% {:?}, footer {:?}",
            progress.map(|c| c.as_str()),
            footer.map(|c| c.as_str())
        );
        println!("  newly revealed {revealed:?}, focused {focused:?}");
    }

    // The countdown flips only the fields whose text changed.
    let countdown = Countdown::new(10 * 86_400_000);
    let mut flips = FlipTracker::new();
    for now in [0, 1_000, 60_000] {
        let Some(parts) = countdown.at(now) else {
            break;
        };
        let changed = flips.update(&parts);
        let fields: Vec<String> = CountdownField::ALL
            .into_iter()
            .map(|field| {
                let mark = if changed.flips(field) { "*" } else { " " };
                format!("{}{mark}", parts.text(field))
            })
            .collect();
        println!("countdown at {now:>6}ms: {}", fields.join(" : "));
    }

    // A count-up number sampled every 300 ms.
    let spec = CounterSpec::from_attributes("5000", None, Some("+")).expect("numeric count");
    let mut counter = AnimatedCounter::new(spec);
    counter.start(0.0);
    let mut now = 0.0;
    while let Some(text) = counter.frame(now) {
        println!("counter at {now:>6}ms: {text}");
        now += 300.0;
    }
}
