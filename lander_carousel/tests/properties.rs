// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invariants of the carousel controller under arbitrary input sequences.

use kurbo::Point;
use lander_carousel::{Carousel, CarouselConfig};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Next,
    Previous,
    GoTo(usize),
    Resize(f64),
    Swipe(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Next),
        3 => Just(Op::Previous),
        1 => (0_usize..20).prop_map(Op::GoTo),
        1 => (200.0_f64..2000.0).prop_map(Op::Resize),
        1 => (-200.0_f64..200.0).prop_map(Op::Swipe),
    ]
}

fn config() -> impl Strategy<Value = CarouselConfig> {
    (1_usize..6, 1_usize..6, 1_usize..6, any::<bool>()).prop_map(
        |(desktop, tablet, mobile, looping)| {
            CarouselConfig::responsive(desktop, tablet, mobile).with_loop(looping)
        },
    )
}

fn apply(carousel: &mut Carousel, op: &Op) {
    match *op {
        Op::Next => {
            carousel.next();
        }
        Op::Previous => {
            carousel.previous();
        }
        Op::GoTo(index) => {
            carousel.go_to(index);
        }
        Op::Resize(width) => {
            carousel.on_resize(width);
        }
        Op::Swipe(delta) => {
            carousel.on_touch_start(Point::new(500.0, 0.0));
            carousel.on_touch_end(Point::new(500.0 - delta, 0.0));
        }
    }
}

proptest! {
    #[test]
    fn index_stays_in_range(
        slides in 0_usize..12,
        config in config(),
        width in 200.0_f64..2000.0,
        ops in prop::collection::vec(op(), 0..64),
    ) {
        let mut carousel = Carousel::new(slides, &config, width).unwrap();
        for op in &ops {
            apply(&mut carousel, op);
            prop_assert!(carousel.current_index() <= carousel.max_index());
            prop_assert!(carousel.visible_count() >= 1);
            prop_assert!(carousel.visible_count() <= slides.max(1));
            prop_assert_eq!(
                carousel.max_index(),
                slides.saturating_sub(carousel.visible_count())
            );
            prop_assert!(carousel.offset_percent() <= 0.0);
        }
    }

    #[test]
    fn looping_next_cycles_back(slides in 0_usize..12, config in config(), width in 200.0_f64..2000.0) {
        let mut carousel = Carousel::new(slides, &config.with_loop(true), width).unwrap();
        for _ in 0..=carousel.max_index() {
            carousel.next();
        }
        prop_assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn non_looping_next_saturates(
        slides in 0_usize..12,
        config in config(),
        width in 200.0_f64..2000.0,
        extra in 0_usize..8,
    ) {
        let mut carousel = Carousel::new(slides, &config.with_loop(false), width).unwrap();
        for _ in 0..carousel.max_index() + extra {
            carousel.next();
        }
        prop_assert_eq!(carousel.current_index(), carousel.max_index());
    }

    #[test]
    fn resize_is_idempotent(
        slides in 0_usize..12,
        config in config(),
        start in 200.0_f64..2000.0,
        target in 200.0_f64..2000.0,
        steps in 0_usize..6,
    ) {
        let mut carousel = Carousel::new(slides, &config, start).unwrap();
        for _ in 0..steps {
            carousel.next();
        }
        carousel.on_resize(target);
        let once = (
            carousel.visible_count(),
            carousel.max_index(),
            carousel.current_index(),
        );
        prop_assert!(!carousel.on_resize(target));
        let twice = (
            carousel.visible_count(),
            carousel.max_index(),
            carousel.current_index(),
        );
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn shown_dots_match_positions(
        slides in 0_usize..12,
        config in config(),
        width in 200.0_f64..2000.0,
        dot_count in 0_usize..12,
    ) {
        let carousel = Carousel::new(slides, &config, width).unwrap();
        let dots = carousel.dots(dot_count);
        let shown = dots.iter().filter(|d| d.is_shown()).count();
        prop_assert_eq!(shown, dot_count.min(carousel.position_count()));
        prop_assert!(dots.iter().filter(|d| d.is_active()).count() <= 1);
    }
}

#[test]
fn seven_slides_three_visible_shows_five_dots() {
    let config = CarouselConfig::responsive(3, 3, 1);
    let carousel = Carousel::new(7, &config, 1200.0).unwrap();
    assert_eq!(carousel.visible_count(), 3);
    assert_eq!(carousel.max_index(), 4);
    let dots = carousel.dots(7);
    let shown: Vec<bool> = dots.iter().map(|d| d.is_shown()).collect();
    assert_eq!(shown, [true, true, true, true, true, false, false]);
}

#[test]
fn swipe_thresholds_match_single_steps() {
    let config = CarouselConfig::responsive(3, 2, 1);

    let mut tapped = Carousel::new(6, &config, 1200.0).unwrap();
    tapped.on_touch_start(Point::new(400.0, 0.0));
    tapped.on_touch_end(Point::new(370.0, 0.0));
    assert_eq!(tapped.current_index(), 0);

    let mut swiped = Carousel::new(6, &config, 1200.0).unwrap();
    swiped.on_touch_start(Point::new(400.0, 0.0));
    swiped.on_touch_end(Point::new(320.0, 0.0));

    let mut stepped = Carousel::new(6, &config, 1200.0).unwrap();
    stepped.next();
    assert_eq!(swiped.current_index(), stepped.current_index());
    assert_eq!(swiped.offset_percent(), stepped.offset_percent());
}
