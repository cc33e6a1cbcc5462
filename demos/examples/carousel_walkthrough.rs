// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving a `lander_carousel::Carousel` from a frame loop, without a browser.
//!
//! This example shows:
//! - responsive slide counts switching as the viewport is resized,
//! - looping navigation and clamped jumps,
//! - touch swipes resolved against the swipe threshold,
//! - autoplay advanced by `tick` from a simulated clock.
//!
//! Run:
//! - `cargo run -p lander_demos --example carousel_walkthrough`

use kurbo::Point;
use lander_carousel::{Carousel, CarouselConfig, WrapSlider};

fn print_state(label: &str, carousel: &Carousel) {
    let dots: String = carousel
        .dots(carousel.slide_count())
        .iter()
        .map(|flags| match (flags.is_shown(), flags.is_active()) {
            (true, true) => '●',
            (true, false) => '○',
            (false, _) => ' ',
        })
        .collect();
    println!(
        "{label:<28} index={} visible={} {:<22} [{dots}]",
        carousel.current_index(),
        carousel.visible_count(),
        carousel.track_transform(),
    );
}

fn main() {
    let config = CarouselConfig::responsive(3, 2, 1)
        .with_loop(true)
        .with_autoplay(2_000);
    let mut carousel = Carousel::new(7, &config, 1280.0).expect("valid config");
    print_state("desktop", &carousel);

    carousel.next();
    carousel.next();
    print_state("two steps forward", &carousel);

    let shown = carousel.go_to(99);
    print_state(&format!("go_to(99) -> {shown}"), &carousel);

    carousel.next();
    print_state("next wraps to start", &carousel);

    carousel.on_resize(700.0);
    print_state("resized to tablet", &carousel);
    carousel.on_resize(375.0);
    print_state("resized to mobile", &carousel);

    // A 120px drag to the left is a swipe toward the next slide.
    carousel.on_touch_start(Point::new(300.0, 200.0));
    if let Some(direction) = carousel.on_touch_end(Point::new(180.0, 205.0)) {
        print_state(&format!("swipe {direction:?}"), &carousel);
    }
    // A short drag is ignored.
    carousel.on_touch_start(Point::new(300.0, 200.0));
    assert!(carousel.on_touch_end(Point::new(280.0, 200.0)).is_none());

    // Simulate a 60 Hz frame loop for ten seconds.
    carousel.start_autoplay(0);
    let mut advances = 0;
    for frame in 0..600_u64 {
        let now = frame * 1_000 / 60;
        if carousel.tick(now) {
            advances += 1;
            print_state(&format!("autoplay at {now}ms"), &carousel);
        }
    }
    println!("autoplay advanced {advances} times");
    carousel.stop_autoplay();

    // The accommodation slider wraps in both directions.
    let mut slider = WrapSlider::new(4);
    slider.previous();
    println!(
        "slider: previous from 0 -> {} ({})",
        slider.current(),
        slider.container_transform()
    );
    slider.go_to(-5);
    println!("slider: go_to(-5) -> {}", slider.current());
}
