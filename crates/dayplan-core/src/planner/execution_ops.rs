//! Frontier operations used while a plan is being executed.

use log::{debug, info};

use super::ActivityList;
use crate::{
    clock,
    error::{PlannerError, Result},
    events::PlanEvent,
    models::Activity,
    schedule,
    store::PlanStore,
};

impl<S: PlanStore> ActivityList<S> {
    /// Moves the frontier to `index`.
    ///
    /// Only activities that can still be performed are accepted, that is any
    /// index except the final one; other values are ignored. Moving backwards
    /// restarts the plan from that activity.
    pub fn set_current_activity_index(&mut self, index: usize) -> Result<()> {
        if index >= self.activities.len().saturating_sub(1) {
            debug!(
                "Ignoring frontier {index} for a plan of {} activities",
                self.activities.len()
            );
            return Ok(());
        }

        info!("Frontier set to {index}");
        self.commit(self.activities.clone(), index)
    }

    /// Stamps the current activity as starting now, rounded down to the
    /// minute, and reschedules what follows.
    pub fn set_current_activity_start_time(&mut self) -> Result<()> {
        if self.current_index >= self.activities.len() {
            return Ok(());
        }

        let mut next = self.activities.clone();
        next[self.current_index].start_time = self.clock.now_rounded();
        self.commit(next, self.current_index)
    }

    /// Splits the current activity around an unplanned interruption.
    ///
    /// Inserted right after the current activity: a rigid `name` activity as
    /// long as the time spent so far, then a continuation of the current
    /// activity sized to the time left until the following activity starts.
    /// The caller is expected to end the current activity next.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoFollowingActivity` if the current activity is
    /// the last one.
    pub fn insert_interruption(&mut self, name: &str) -> Result<()> {
        let (current, following) = self.running_pair()?;
        let now = self.clock.now_rounded();

        let elapsed = clock::minutes_between(current.start_time, now).max(0);
        let remaining = clock::minutes_between(now, following.start_time).max(0);

        let interruption = Activity::new(name, elapsed).rigid();
        let continuation = Activity::new(current.name.clone(), remaining);

        debug!("Interrupting '{}' after {elapsed} min, {remaining} min left", current.name);
        self.insert_many(self.current_index + 1, vec![interruption, continuation])
    }

    /// Abandons the rest of the current activity in favour of `name`, which
    /// fills the time left until the following activity starts.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoFollowingActivity` if the current activity is
    /// the last one.
    pub fn insert_replacement(&mut self, name: &str) -> Result<()> {
        let (_, following) = self.running_pair()?;
        let now = self.clock.now_rounded();
        let remaining = clock::minutes_between(now, following.start_time).max(0);

        self.insert(self.current_index + 1, Activity::new(name, remaining))
    }

    /// Finishes the current activity and advances the frontier by one.
    ///
    /// Unless `preemptive`, the time spent is recorded as the finished
    /// activity's actual length and the next activity is stamped as starting
    /// now. The final activity is never stamped.
    pub fn complete_activity(&mut self, preemptive: bool) -> Result<()> {
        if self.activities.is_empty() {
            return Ok(());
        }

        let last = self.activities.len() - 1;
        let finished = self.current_index;
        let current = (finished + 1).min(last);
        let now = self.clock.now_rounded();

        let mut next = self.activities.clone();
        if !preemptive {
            let elapsed = clock::minutes_between(next[finished].start_time, now).max(0);
            next[finished].actual_length = elapsed;
            if current != finished && current != last {
                next[current].start_time = now;
            }
        }

        info!("Completed '{}', frontier now {current}", next[finished].name);
        self.commit(next, current)
    }

    /// Whether the frontier has reached the final activity.
    pub fn is_completed(&self) -> bool {
        !self.activities.is_empty() && self.current_index + 1 >= self.activities.len()
    }

    /// Writes every activity but the final one to the log for today and
    /// resets the frontier for the next day.
    ///
    /// The log rows, the reset plan and the frontier are stored together.
    /// If that fails nothing changes and the call can be retried without
    /// logging the day twice.
    pub fn archive(&mut self) -> Result<()> {
        if self.activities.is_empty() {
            return Ok(());
        }

        let mut next = self.activities.clone();
        schedule::recalculate(&mut next, 0);

        let performed = &self.activities[..self.activities.len() - 1];
        let today = self.clock.today();
        self.store.archive_day(performed, today, &next)?;
        info!("Archived {} activities for {today}", performed.len());

        self.activities = next;
        self.current_index = 0;
        self.publish(PlanEvent::ActivityListChanged);
        Ok(())
    }

    /// Same as [`ActivityList::archive`].
    pub fn complete(&mut self) -> Result<()> {
        self.archive()
    }

    /// Indices of fixed activities scheduled before an earlier boundary.
    ///
    /// Such a plan still recalculates, but the block in front of each
    /// reported activity gets zero or negative lengths.
    pub fn check_fixed_order(&self) -> Vec<usize> {
        schedule::fixed_order_violations(&self.activities)
    }

    fn running_pair(&self) -> Result<(Activity, Activity)> {
        match (self.current_activity(), self.following_activity()) {
            (Some(current), Some(following)) => Ok((current.clone(), following.clone())),
            _ => Err(PlannerError::NoFollowingActivity {
                index: self.current_index,
            }),
        }
    }
}
