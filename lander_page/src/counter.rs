// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated number counters that count up once they scroll into view.

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Default counting duration.
pub const COUNTER_DURATION_MS: f64 = 1_800.0;

/// Fraction of a counter that must be visible before it starts counting.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.6;

/// Exponential ease-out: fast start, long gentle landing.
///
/// Maps `[0, 1]` onto `[0, 1]` and hits exactly `1.0` at `t == 1.0`.
#[must_use]
pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// One animation frame of a counter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    /// Value to display.
    pub value: i64,
    /// Whether the animation has finished.
    pub done: bool,
}

/// Value of a counter counting to `target` after `elapsed_ms`.
#[must_use]
pub fn counter_frame(target: i64, elapsed_ms: f64, duration_ms: f64) -> CounterFrame {
    let progress = if duration_ms > 0.0 {
        (elapsed_ms / duration_ms).clamp(0.0, 1.0)
    } else {
        1.0
    };
    if progress >= 1.0 {
        return CounterFrame {
            value: target,
            done: true,
        };
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "eased value lies between zero and the integer target"
    )]
    let value = (ease_out_expo(progress) * target as f64).floor() as i64;
    CounterFrame { value, done: false }
}

/// What a counter element counts to, read from its `data-count`,
/// `data-prefix`, and `data-suffix` attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct CounterSpec {
    /// Final value.
    pub target: i64,
    /// Text before the number.
    #[cfg_attr(feature = "serde", serde(default))]
    pub prefix: String,
    /// Text after the number.
    #[cfg_attr(feature = "serde", serde(default))]
    pub suffix: String,
}

impl CounterSpec {
    /// Reads a counter from attribute values.
    ///
    /// `count` is parsed like an integer attribute: leading whitespace and an
    /// optional sign, then digits up to the first non-digit. Returns `None`
    /// when no digits lead the value.
    #[must_use]
    pub fn from_attributes(count: &str, prefix: Option<&str>, suffix: Option<&str>) -> Option<Self> {
        Some(Self {
            target: parse_leading_int(count)?,
            prefix: prefix.unwrap_or_default().into(),
            suffix: suffix.unwrap_or_default().into(),
        })
    }

    /// Display text for `value`.
    #[must_use]
    pub fn text(&self, value: i64) -> String {
        format!("{}{value}{}", self.prefix, self.suffix)
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Lifecycle of one counter element.
///
/// A counter starts at most once; scrolling it out and back in does not
/// restart it.
#[derive(Clone, Debug)]
pub struct AnimatedCounter {
    spec: CounterSpec,
    duration_ms: f64,
    started_at: Option<f64>,
    finished: bool,
}

impl AnimatedCounter {
    /// Creates an idle counter with the default duration.
    #[must_use]
    pub fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            duration_ms: COUNTER_DURATION_MS,
            started_at: None,
            finished: false,
        }
    }

    /// The counter's target and affixes.
    #[must_use]
    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Whether the counter has been started (`counted`).
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whether the counter is animating (`counting`).
    #[must_use]
    pub fn is_counting(&self) -> bool {
        self.is_started() && !self.finished
    }

    /// Whether the counter reached its target (`count-complete`).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Starts counting at `now_ms`. Returns `false` if already started.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now_ms);
        true
    }

    /// Advances to `now_ms` and returns the text to display, or `None` when
    /// the counter is idle or already finished.
    pub fn frame(&mut self, now_ms: f64) -> Option<String> {
        let started_at = self.started_at?;
        if self.finished {
            return None;
        }
        let frame = counter_frame(self.spec.target, now_ms - started_at, self.duration_ms);
        self.finished = frame.done;
        Some(self.spec.text(frame.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!((ease_out_expo(0.5) - 0.96875).abs() < 1e-12);
    }

    #[test]
    fn frames_count_up_then_land() {
        let start = counter_frame(5000, 0.0, COUNTER_DURATION_MS);
        assert_eq!(start, CounterFrame { value: 0, done: false });

        let mid = counter_frame(5000, 900.0, COUNTER_DURATION_MS);
        assert_eq!(mid.value, 4843);
        assert!(!mid.done);

        let end = counter_frame(5000, 2000.0, COUNTER_DURATION_MS);
        assert_eq!(end, CounterFrame { value: 5000, done: true });
    }

    #[test]
    fn parses_attributes_like_integers() {
        let spec = CounterSpec::from_attributes(" 12k", Some("+"), None).unwrap();
        assert_eq!(spec.target, 12);
        assert_eq!(spec.text(7), "+7");
        assert_eq!(CounterSpec::from_attributes("-3", None, Some("%")).unwrap().target, -3);
        assert_eq!(CounterSpec::from_attributes("k12", None, None), None);
        assert_eq!(CounterSpec::from_attributes("", None, None), None);
    }

    #[test]
    fn counter_runs_once() {
        let spec = CounterSpec::from_attributes("100", None, Some("+")).unwrap();
        let mut counter = AnimatedCounter::new(spec);
        assert_eq!(counter.frame(0.0), None);

        assert!(counter.start(1000.0));
        assert!(!counter.start(1500.0));
        assert!(counter.is_counting());
        assert_eq!(counter.frame(1000.0).as_deref(), Some("0+"));

        assert_eq!(counter.frame(1000.0 + COUNTER_DURATION_MS).as_deref(), Some("100+"));
        assert!(counter.is_finished());
        assert!(!counter.is_counting());
        assert_eq!(counter.frame(5000.0), None);
    }
}
