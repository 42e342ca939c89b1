//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data.

use std::fmt;

use super::time::{ClockTime, Countdown};
use crate::{
    events::PlanEvent,
    models::{Activity, LogEntry},
};

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} min planned, {} min scheduled)",
            ClockTime(self.start_time),
            self.name,
            self.length,
            self.actual_length
        )?;
        if self.is_fixed {
            write!(f, " [fixed]")?;
        }
        if self.is_rigid {
            write!(f, " [rigid]")?;
        }
        Ok(())
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {} | {} | {} | {} | {} | {} |",
            self.position,
            ClockTime(self.start_time),
            self.name,
            self.length,
            self.actual_length,
            self.optimal_length
        )
    }
}

impl fmt::Display for PlanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanEvent::ActivityListChanged => write!(f, "Plan updated"),
            PlanEvent::Countdown { seconds_remaining } => {
                write!(f, "Remaining: {}", Countdown(*seconds_remaining))
            }
            PlanEvent::ActivityStarted(a) => write!(f, "Started: {}", a.name),
            PlanEvent::ActivityStopped(a) => write!(f, "Stopped: {}", a.name),
            PlanEvent::ActivityExpired(a) => write!(f, "Time is up for {}", a.name),
            PlanEvent::PlanCompleted => write!(f, "Plan completed and archived"),
        }
    }
}
