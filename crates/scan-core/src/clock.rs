//! Time source for decision timestamps.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Supplies the instant stamped onto each [`DecisionRecord`](crate::entities::DecisionRecord).
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Returns a preset instant, optionally stepping forward after each read.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Cell<DateTime<Utc>>,
    step: Duration,
}

impl FixedClock {
    /// Always report `at`.
    #[must_use]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self {
            current: Cell::new(at),
            step: Duration::zero(),
        }
    }

    /// Report `start`, then advance by `step` on every subsequent read.
    #[must_use]
    pub const fn stepping(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Cell::new(start),
            step,
        }
    }

    /// Move the clock forward without reading it.
    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn fixed_clock_repeats_instant() {
        let at = Utc.with_ymd_and_hms(2024, 12, 24, 9, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn stepping_clock_advances_per_read() {
        let start = Utc.with_ymd_and_hms(2024, 12, 24, 9, 0, 0).unwrap();
        let clock = FixedClock::stepping(start, Duration::seconds(30));
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start + Duration::seconds(30));
    }

    #[test]
    fn advance_moves_without_reading() {
        let start = Utc.with_ymd_and_hms(2024, 12, 24, 9, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        clock.advance(Duration::minutes(5));
        assert_eq!(clock.now(), start + Duration::minutes(5));
    }
}
