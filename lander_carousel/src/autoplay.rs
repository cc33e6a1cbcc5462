// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic autoplay schedule.

/// Recurring advance schedule owned by a single carousel.
///
/// The schedule is driven by host timestamps in milliseconds. Hosts with a
/// native recurring timer can ignore [`poll`](Self::poll) and use
/// [`is_active`](Self::is_active) as the authoritative on/off switch; hosts with
/// a frame loop call `poll` every frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoplaySchedule {
    interval_ms: u64,
    next_due: Option<u64>,
}

impl AutoplaySchedule {
    /// Creates a stopped schedule.
    ///
    /// A zero interval is raised to one millisecond.
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: u64::from(interval_ms.max(1)),
            next_due: None,
        }
    }

    /// The period between advances.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Returns `true` while the schedule is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Starts (or restarts) the schedule; the first advance is due one interval
    /// after `now`.
    pub fn start(&mut self, now: u64) {
        self.next_due = Some(now.saturating_add(self.interval_ms));
    }

    /// Stops the schedule. Stopping a stopped schedule does nothing.
    ///
    /// Returns `true` if the schedule was running.
    pub fn stop(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Returns `true` if an advance is due at `now`, and re-arms for the next
    /// period.
    ///
    /// Missed periods (for example while a tab was in the background) collapse
    /// into a single advance; the next one is due a full interval after `now`.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now.saturating_add(self.interval_ms));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AutoplaySchedule;

    #[test]
    fn stopped_schedule_never_fires() {
        let mut schedule = AutoplaySchedule::new(1000);
        assert!(!schedule.is_active());
        assert!(!schedule.poll(10_000));
    }

    #[test]
    fn fires_once_per_interval() {
        let mut schedule = AutoplaySchedule::new(1000);
        schedule.start(0);
        assert!(!schedule.poll(999));
        assert!(schedule.poll(1000));
        assert!(!schedule.poll(1500));
        assert!(schedule.poll(2000));
    }

    #[test]
    fn missed_periods_collapse() {
        let mut schedule = AutoplaySchedule::new(1000);
        schedule.start(0);
        assert!(schedule.poll(5500));
        assert!(!schedule.poll(6000));
        assert!(schedule.poll(6500));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut schedule = AutoplaySchedule::new(1000);
        assert!(!schedule.stop());
        schedule.start(0);
        assert!(schedule.stop());
        assert!(!schedule.stop());
        assert!(!schedule.poll(5000));
    }

    #[test]
    fn zero_interval_is_raised() {
        assert_eq!(AutoplaySchedule::new(0).interval_ms(), 1);
    }
}
