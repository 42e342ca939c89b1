//! Persistence contract of the activity list.
//!
//! [`PlanStore`] is everything the planner needs from storage. The SQLite
//! [`Database`] is the production implementation; tests may plug in their
//! own to observe or fail writes.

use jiff::civil::Date;
use log::warn;

use crate::{
    db::{settings_queries::CURRENT_ACTIVITY_INDEX, Database},
    error::Result,
    models::Activity,
};

/// Storage used by [`crate::planner::ActivityList`].
pub trait PlanStore {
    /// Reads the stored sequence in order.
    fn load_sequence(&self) -> Result<Vec<Activity>>;

    /// Replaces the stored sequence.
    fn save_sequence(&mut self, activities: &[Activity]) -> Result<()>;

    /// Archives `activities` for `date`. Must be all-or-nothing.
    fn append_to_log(&mut self, activities: &[Activity], date: Date) -> Result<()>;

    /// Reads the persisted frontier, 0 when none was stored.
    fn load_current_index(&self) -> Result<usize>;

    fn save_current_index(&mut self, index: usize) -> Result<()>;

    /// Archives `performed` for `date`, then stores `next` as the plan with
    /// the frontier reset to 0.
    ///
    /// The default writes the three parts one after the other. Stores that
    /// support transactions should override it so that a failure leaves no
    /// log rows behind.
    fn archive_day(&mut self, performed: &[Activity], date: Date, next: &[Activity]) -> Result<()> {
        self.append_to_log(performed, date)?;
        self.save_sequence(next)?;
        self.save_current_index(0)
    }
}

impl PlanStore for Database {
    fn load_sequence(&self) -> Result<Vec<Activity>> {
        self.load_activities()
    }

    fn save_sequence(&mut self, activities: &[Activity]) -> Result<()> {
        self.save_activities(activities)
    }

    fn append_to_log(&mut self, activities: &[Activity], date: Date) -> Result<()> {
        self.append_log(activities, date)
    }

    fn load_current_index(&self) -> Result<usize> {
        let Some(raw) = self.get_setting(CURRENT_ACTIVITY_INDEX)? else {
            return Ok(0);
        };
        match raw.parse::<usize>() {
            Ok(index) => Ok(index),
            Err(_) => {
                warn!("Ignoring malformed {CURRENT_ACTIVITY_INDEX} setting: {raw}");
                Ok(0)
            }
        }
    }

    fn save_current_index(&mut self, index: usize) -> Result<()> {
        self.set_setting(CURRENT_ACTIVITY_INDEX, &index.to_string())
    }

    fn archive_day(&mut self, performed: &[Activity], date: Date, next: &[Activity]) -> Result<()> {
        Database::archive_day(self, performed, date, next)
    }
}
