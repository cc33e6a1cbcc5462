// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event countdown: days/hours/minutes/seconds until a target instant.

use alloc::format;
use alloc::string::String;

use bitflags::bitflags;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = SECOND_MS * 60;
const HOUR_MS: i64 = MINUTE_MS * 60;
const DAY_MS: i64 = HOUR_MS * 24;

/// Interval between countdown refreshes.
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// How long a changed digit keeps its `flip` class.
pub const FLIP_DURATION_MS: u32 = 600;

/// Remaining time split into display fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CountdownParts {
    /// Whole days.
    pub days: u64,
    /// Hours within the day, `0..24`.
    pub hours: u8,
    /// Minutes within the hour, `0..60`.
    pub minutes: u8,
    /// Seconds within the minute, `0..60`.
    pub seconds: u8,
}

impl CountdownParts {
    /// Splits a positive gap in milliseconds. Returns `None` once the target
    /// has passed, which hides the countdown.
    #[must_use]
    pub fn from_gap(gap_ms: i64) -> Option<Self> {
        if gap_ms <= 0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "gap is positive and each remainder is below its unit count"
        )]
        let parts = Self {
            days: (gap_ms / DAY_MS) as u64,
            hours: ((gap_ms % DAY_MS) / HOUR_MS) as u8,
            minutes: ((gap_ms % HOUR_MS) / MINUTE_MS) as u8,
            seconds: ((gap_ms % MINUTE_MS) / SECOND_MS) as u8,
        };
        Some(parts)
    }

    /// Text for one field, zero-padded to two digits.
    #[must_use]
    pub fn text(&self, field: CountdownField) -> String {
        match field {
            CountdownField::Days => format!("{:02}", self.days),
            CountdownField::Hours => format!("{:02}", self.hours),
            CountdownField::Minutes => format!("{:02}", self.minutes),
            CountdownField::Seconds => format!("{:02}", self.seconds),
        }
    }
}

/// One of the four countdown displays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CountdownField {
    /// `#days`
    Days,
    /// `#hours`
    Hours,
    /// `#minutes`
    Minutes,
    /// `#seconds`
    Seconds,
}

impl CountdownField {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [Self::Days, Self::Hours, Self::Minutes, Self::Seconds];

    /// Element id of the field's display.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    const fn flag(self) -> FlipSet {
        match self {
            Self::Days => FlipSet::DAYS,
            Self::Hours => FlipSet::HOURS,
            Self::Minutes => FlipSet::MINUTES,
            Self::Seconds => FlipSet::SECONDS,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Days => 0,
            Self::Hours => 1,
            Self::Minutes => 2,
            Self::Seconds => 3,
        }
    }
}

bitflags! {
    /// Fields whose text changed on the latest tick.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct FlipSet: u8 {
        /// Days changed.
        const DAYS = 1 << 0;
        /// Hours changed.
        const HOURS = 1 << 1;
        /// Minutes changed.
        const MINUTES = 1 << 2;
        /// Seconds changed.
        const SECONDS = 1 << 3;
    }
}

impl FlipSet {
    /// Returns `true` if `field` should flip.
    #[must_use]
    pub const fn flips(self, field: CountdownField) -> bool {
        self.contains(field.flag())
    }
}

/// Remembers the last rendered text per field.
#[derive(Clone, Debug, Default)]
pub struct FlipTracker {
    previous: [Option<String>; 4],
}

impl FlipTracker {
    /// Creates a tracker that has rendered nothing yet; every field flips on
    /// the first update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `parts` and returns the fields whose text changed.
    pub fn update(&mut self, parts: &CountdownParts) -> FlipSet {
        let mut flips = FlipSet::empty();
        for field in CountdownField::ALL {
            let text = parts.text(field);
            let slot = &mut self.previous[field.slot()];
            if slot.as_deref() != Some(text.as_str()) {
                *slot = Some(text);
                flips |= field.flag();
            }
        }
        flips
    }
}

/// A countdown to a fixed instant, in milliseconds since the epoch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    target_ms: i64,
}

impl Countdown {
    /// Counts down to `target_ms`.
    #[must_use]
    pub const fn new(target_ms: i64) -> Self {
        Self { target_ms }
    }

    /// The target instant.
    #[must_use]
    pub const fn target_ms(&self) -> i64 {
        self.target_ms
    }

    /// Remaining time at `now_ms`, or `None` once the target has passed.
    #[must_use]
    pub fn at(&self, now_ms: i64) -> Option<CountdownParts> {
        CountdownParts::from_gap(self.target_ms.saturating_sub(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_gap_into_fields() {
        let gap = 3 * DAY_MS + 4 * HOUR_MS + 5 * MINUTE_MS + 6 * SECOND_MS + 999;
        let parts = CountdownParts::from_gap(gap).unwrap();
        assert_eq!(
            parts,
            CountdownParts {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
        assert_eq!(parts.text(CountdownField::Days), "03");
        assert_eq!(parts.text(CountdownField::Seconds), "06");
    }

    #[test]
    fn long_gaps_keep_all_day_digits() {
        let parts = CountdownParts::from_gap(123 * DAY_MS).unwrap();
        assert_eq!(parts.text(CountdownField::Days), "123");
        assert_eq!(parts.text(CountdownField::Hours), "00");
    }

    #[test]
    fn passed_target_hides() {
        assert_eq!(CountdownParts::from_gap(0), None);
        assert_eq!(CountdownParts::from_gap(-5), None);
        let countdown = Countdown::new(10_000);
        assert!(countdown.at(9_000).is_some());
        assert_eq!(countdown.at(10_000), None);
    }

    #[test]
    fn flips_only_changed_fields() {
        let mut tracker = FlipTracker::new();
        let countdown = Countdown::new(2 * DAY_MS);

        let first = tracker.update(&countdown.at(0).unwrap());
        assert_eq!(first, FlipSet::all());

        // One second later: 1d 23h 59m 59s, everything changes.
        let second = tracker.update(&countdown.at(SECOND_MS).unwrap());
        assert_eq!(second, FlipSet::all());

        // Another second: only seconds change.
        let third = tracker.update(&countdown.at(2 * SECOND_MS).unwrap());
        assert_eq!(third, FlipSet::SECONDS);
        assert!(third.flips(CountdownField::Seconds));
        assert!(!third.flips(CountdownField::Minutes));

        // Same tick twice: nothing flips.
        let again = tracker.update(&countdown.at(2 * SECOND_MS).unwrap());
        assert_eq!(again, FlipSet::empty());
    }
}
