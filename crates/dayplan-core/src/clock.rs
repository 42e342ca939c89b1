//! Wall-clock access and time-of-day arithmetic.
//!
//! Plans are single-day, so every scheduled instant is a [`civil::Time`]
//! without a date. Differences between two times never wrap around midnight;
//! additions do.

use std::{cell::Cell, rc::Rc};

use jiff::{
    civil::{self, Time},
    SignedDuration, Zoned,
};

/// Source of the current local date and time.
pub trait Clock {
    /// Current local wall-clock date and time.
    fn now(&self) -> civil::DateTime;

    /// Current time of day with the seconds truncated.
    fn now_rounded(&self) -> Time {
        truncate_to_minute(self.now().time())
    }

    /// Current local calendar date.
    fn today(&self) -> civil::Date {
        self.now().date()
    }
}

/// Clock backed by the operating system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> civil::DateTime {
        Zoned::now().datetime()
    }
}

/// Manually driven clock. Clones share the same instant.
///
/// ```rust
/// use dayplan_core::clock::{Clock, ManualClock};
/// use jiff::civil::date;
///
/// let clock = ManualClock::new(date(2024, 3, 1).at(10, 0, 0, 0));
/// let handle = clock.clone();
/// handle.advance_minutes(20);
/// assert_eq!(clock.now().time().minute(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    instant: Rc<Cell<civil::DateTime>>,
}

impl ManualClock {
    /// Creates a clock frozen at `instant`.
    pub fn new(instant: civil::DateTime) -> Self {
        Self {
            instant: Rc::new(Cell::new(instant)),
        }
    }

    /// Moves the clock to `instant`.
    pub fn set(&self, instant: civil::DateTime) {
        self.instant.set(instant);
    }

    /// Moves the clock to `time` on the current date.
    pub fn set_time(&self, time: Time) {
        let date = self.instant.get().date();
        self.instant.set(date.to_datetime(time));
    }

    /// Moves the clock forward by whole minutes.
    pub fn advance_minutes(&self, minutes: i64) {
        self.advance_seconds(minutes * 60);
    }

    /// Moves the clock forward by whole seconds.
    pub fn advance_seconds(&self, seconds: i64) {
        let current = self.instant.get();
        self.instant
            .set(current.saturating_add(SignedDuration::from_secs(seconds)));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> civil::DateTime {
        self.instant.get()
    }
}

/// Signed number of seconds from `from` to `to` on the same day.
pub fn seconds_between(from: Time, to: Time) -> i64 {
    from.duration_until(to).as_secs()
}

/// Signed number of whole minutes from `from` to `to`, rounded down.
pub fn minutes_between(from: Time, to: Time) -> i64 {
    seconds_between(from, to).div_euclid(60)
}

/// `time` shifted by `minutes`, wrapping around midnight.
pub fn add_minutes(time: Time, minutes: i64) -> Time {
    time.wrapping_add(SignedDuration::from_mins(minutes))
}

/// `time` with its seconds and sub-second part dropped.
pub fn truncate_to_minute(time: Time) -> Time {
    civil::time(time.hour(), time.minute(), 0, 0)
}
