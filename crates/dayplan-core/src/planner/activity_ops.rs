//! Structural edits of the activity list.
//!
//! Rows before the current activity are history and are never inserted
//! before, moved or deleted. Once history exists the plan also keeps at least
//! one row from the current activity onward, so the frontier never falls back
//! onto a completed activity: a delete covering every remaining row leaves the
//! final one in place.

use jiff::Timestamp;
use log::debug;

use super::ActivityList;
use crate::{
    clock::truncate_to_minute,
    error::{PlannerError, Result},
    models::{Activity, ActivityField, ActivityId, FieldValue},
    params::{EditField, NewActivity},
    store::PlanStore,
};

impl<S: PlanStore> ActivityList<S> {
    /// Inserts a single activity at `index`.
    pub fn insert(&mut self, index: usize, activity: Activity) -> Result<()> {
        self.insert_many(index, vec![activity])
    }

    /// Splices `activities` in at `index`, each with a fresh id.
    ///
    /// Inserting before the current activity is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `index` is past the end of the
    /// plan.
    pub fn insert_many(&mut self, index: usize, activities: Vec<Activity>) -> Result<()> {
        if index < self.current_index {
            debug!(
                "Ignoring insert at {index}: history ends at {}",
                self.current_index
            );
            return Ok(());
        }
        if index > self.activities.len() {
            return Err(PlannerError::invalid_input("index").with_reason(format!(
                "{index} is past the end of a plan of {} activities",
                self.activities.len()
            )));
        }
        if activities.is_empty() {
            return Ok(());
        }

        let mut next = self.activities.clone();
        let ids = self.fresh_ids(activities.len());
        let inserted = activities
            .into_iter()
            .zip(ids)
            .map(|(activity, id)| Activity {
                id,
                start_time: truncate_to_minute(activity.start_time),
                ..activity
            });
        next.splice(index..index, inserted);

        self.commit(next, self.current_index)
    }

    /// Adds the activity described by `params` and returns the row it was
    /// placed at.
    ///
    /// Without an explicit row it goes in front of the final activity, which
    /// marks the end of the day. Plans of fewer than two activities have no
    /// such marker yet and are appended to.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for a negative length, a fixed
    /// activity without a start time, or a row before the current activity.
    pub fn add_activity(&mut self, params: &NewActivity) -> Result<usize> {
        if params.length < 0 {
            return Err(PlannerError::invalid_input("length").with_reason("must not be negative"));
        }
        if params.is_fixed && params.start_time.is_none() {
            return Err(PlannerError::invalid_input("start_time")
                .with_reason("a fixed activity needs a start time"));
        }

        let len = self.activities.len();
        let index = params.index.unwrap_or_else(|| {
            if len < 2 {
                len
            } else {
                (len - 1).max(self.current_index)
            }
        });
        if index < self.current_index {
            return Err(PlannerError::invalid_input("index").with_reason(format!(
                "row {index} is already history; the current activity is row {}",
                self.current_index
            )));
        }

        self.insert(index, Activity::from(params))?;
        Ok(index)
    }

    /// Parses and applies a textual cell edit.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for an unknown field or a value
    /// that does not parse for it.
    pub fn apply_edit(&mut self, params: &EditField) -> Result<()> {
        let field: ActivityField = params
            .field
            .parse()
            .map_err(|reason: String| PlannerError::invalid_input("field").with_reason(reason))?;
        let value = field.parse_value(&params.value)?;
        self.set_field(params.row, field, value)
    }

    /// Removes the activities at `indices`. Indices before the current
    /// activity or past the end are skipped.
    ///
    /// With history present, the final row survives a delete that would
    /// otherwise leave nothing after it.
    pub fn delete(&mut self, indices: &[usize]) -> Result<()> {
        let mut doomed: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i >= self.current_index && i < self.activities.len())
            .collect();
        doomed.sort_unstable();
        doomed.dedup();

        if doomed.len() < indices.len() {
            debug!(
                "Skipping {} protected or unknown rows in delete",
                indices.len() - doomed.len()
            );
        }
        if self.current_index > 0 && doomed.len() == self.activities.len() - self.current_index {
            debug!("Keeping the final activity after history");
            doomed.pop();
        }
        if doomed.is_empty() {
            return Ok(());
        }

        let mut next = self.activities.clone();
        for &i in doomed.iter().rev() {
            next.remove(i);
        }

        self.commit(next, self.current_index)
    }

    /// Moves the activity at `from` so that it ends up at `to`.
    ///
    /// Both positions must be at or after the current activity; otherwise
    /// nothing happens.
    pub fn move_activity(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.activities.len();
        if from < self.current_index || to < self.current_index || from >= len || to >= len {
            debug!("Ignoring move {from} -> {to}");
            return Ok(());
        }
        if from == to {
            return Ok(());
        }

        let mut next = self.activities.clone();
        let activity = next.remove(from);
        next.insert(to, activity);

        self.commit(next, self.current_index)
    }

    /// Drops every activity and resets the frontier.
    pub fn clear(&mut self) -> Result<()> {
        self.commit(Vec::new(), 0)
    }

    /// Whether the cell at (`row`, `field`) may be edited by the user.
    pub fn is_editable(&self, row: usize, field: ActivityField) -> bool {
        field.is_user_editable() && row >= self.current_index && row < self.activities.len()
    }

    /// Edits one field of the activity at `row` and recalculates the plan.
    ///
    /// Non-editable cells are left alone.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `value` does not suit `field`.
    pub fn set_field(&mut self, row: usize, field: ActivityField, value: FieldValue) -> Result<()> {
        if !self.is_editable(row, field) {
            debug!("Ignoring edit of {field} on row {row}");
            return Ok(());
        }

        let mut next = self.activities.clone();
        next[row].set_field(field, value)?;

        self.commit(next, self.current_index)
    }

    /// `count` ids not used anywhere in the plan, derived from the current
    /// epoch millisecond.
    pub(crate) fn fresh_ids(&self, count: usize) -> Vec<ActivityId> {
        let taken = self
            .activities
            .iter()
            .map(|a| a.id.0)
            .max()
            .map_or(i64::MIN, |max| max.saturating_add(1));
        let base = Timestamp::now().as_millisecond().max(taken);

        (0..count as i64).map(|i| ActivityId(base + i)).collect()
    }
}
