//! Time-of-day and countdown formatting.

use std::fmt;

use jiff::civil::Time;

/// A time of day shown as `HH:MM`.
pub struct ClockTime(pub Time);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

/// Signed seconds remaining, shown as `H:MM:SS` with a leading `-` once the
/// deadline has passed.
///
/// ```rust
/// use dayplan_core::display::Countdown;
///
/// assert_eq!(Countdown(3270).to_string(), "0:54:30");
/// assert_eq!(Countdown(-65).to_string(), "-0:01:05");
/// ```
pub struct Countdown(pub i64);

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let total = self.0.unsigned_abs();
        write!(
            f,
            "{sign}{}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}
