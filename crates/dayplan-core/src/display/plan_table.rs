//! Markdown table of the whole plan.

use std::fmt;

use super::time::ClockTime;
use crate::models::{Activity, ActivityField};

/// Newtype-style view of a plan for display, with an optional marker on the
/// current activity.
///
/// # Examples
///
/// ```rust
/// use dayplan_core::{display::PlanTable, models::Activity};
/// use jiff::civil::time;
///
/// let plan = vec![
///     Activity::new("Breakfast", 30).fixed_at(time(7, 0, 0, 0)),
///     Activity::new("Sleep", 0).fixed_at(time(23, 0, 0, 0)),
/// ];
/// let output = PlanTable::new(&plan).with_current(0).to_string();
/// assert!(output.contains("| ▶ 0 | ■ |"));
/// assert!(output.contains("Breakfast"));
/// ```
pub struct PlanTable<'a> {
    activities: &'a [Activity],
    current: Option<usize>,
}

impl<'a> PlanTable<'a> {
    pub fn new(activities: &'a [Activity]) -> Self {
        Self {
            activities,
            current: None,
        }
    }

    /// Marks the row at `index` as the current activity.
    pub fn with_current(mut self, index: usize) -> Self {
        self.current = Some(index);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

fn flag(set: bool) -> &'static str {
    if set {
        "■"
    } else {
        "□"
    }
}

impl fmt::Display for PlanTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.activities.is_empty() {
            return writeln!(f, "No activities planned.");
        }

        write!(f, "| # ")?;
        for field in ActivityField::ALL {
            write!(f, "| {} ", field.label())?;
        }
        writeln!(f, "|")?;
        writeln!(f, "|--:|:-:|:-:|:-:|:--|--:|--:|--:|--:|")?;

        for (i, activity) in self.activities.iter().enumerate() {
            let marker = if self.current == Some(i) { "▶ " } else { "" };
            writeln!(
                f,
                "| {marker}{i} | {} | {} | {} | {} | {} | {} | {} | {:.0}% |",
                flag(activity.is_fixed),
                flag(activity.is_rigid),
                ClockTime(activity.start_time),
                activity.name.replace('|', "\\|"),
                activity.length,
                activity.actual_length,
                activity.optimal_length,
                activity.percent() * 100.0,
            )?;
        }
        Ok(())
    }
}
