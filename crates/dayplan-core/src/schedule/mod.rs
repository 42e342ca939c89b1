//! Schedule recalculation engine.
//!
//! Pure functions over an ordered activity sequence. Fixed activities split
//! the sequence into blocks; inside each block the planned lengths of
//! non-rigid activities are scaled by one factor so the block fills exactly
//! the time between its two boundaries. Scaled lengths are floored, so the
//! non-rigid lengths of a block never sum past the time available to them.
//!
//! Two factors are computed per recalculation:
//!
//! - **Actual lengths** use blocks that start at the current activity. Rows
//!   before it are history and are left alone.
//! - **Optimal lengths** use a single block spanning the whole plan, as if the
//!   day had been followed perfectly from its first activity.
//!
//! After the actual lengths are known, every non-fixed activity after the
//! current one is moved to start when its predecessor ends.
//!
//! ```text
//!  07:00 fixed        block 1         16:00 fixed      block 2     23:59 fixed
//!  ├── A ── B ── C ─────────────────────┼── D ── E ─────────────────────┤
//! ```

use log::{debug, warn};

use crate::{clock, models::Activity};


/// Time budget of the block `[start, end)`: the seconds left for its
/// non-rigid activities once the rigid ones are taken out, and the minutes
/// those activities were planned for.
///
/// Scaling is done in integers so that a scaled length is exactly
/// `floor(length * available / planned)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockScale {
    available_seconds: i64,
    planned_minutes: i64,
}

impl BlockScale {
    /// Budget of the block that starts at `activities[start]` and must end
    /// when `activities[end]` starts. Boundaries out of order give a zero or
    /// negative budget.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is out of bounds.
    pub fn of(activities: &[Activity], start: usize, end: usize) -> Self {
        let block = &activities[start..end];

        let window_seconds =
            clock::seconds_between(activities[start].start_time, activities[end].start_time);
        let rigid_minutes: i64 = block.iter().filter(|a| a.is_rigid).map(|a| a.length).sum();
        let planned_minutes: i64 = block.iter().filter(|a| !a.is_rigid).map(|a| a.length).sum();
        let available_seconds = window_seconds - rigid_minutes * 60;

        if planned_minutes != 0 && available_seconds <= 0 {
            warn!(
                "Block {start}..{end} has {available_seconds} available seconds for {planned_minutes} planned minutes"
            );
        }

        Self {
            available_seconds,
            planned_minutes,
        }
    }

    /// Scale applied to non-rigid lengths, `1.0` when nothing in the block
    /// can be scaled.
    pub fn factor(&self) -> f64 {
        if self.planned_minutes == 0 {
            1.0
        } else {
            self.available_seconds as f64 / 60.0 / self.planned_minutes as f64
        }
    }

    /// Length of `activity` once scaled to fit the block.
    pub fn scale(&self, activity: &Activity) -> i64 {
        if activity.is_rigid || self.planned_minutes == 0 {
            activity.length
        } else {
            (activity.length * self.available_seconds).div_euclid(self.planned_minutes * 60)
        }
    }
}

/// Factor by which the non-rigid activities of block `[start, end)` are
/// scaled so that the block ends at `activities[end].start_time`.
pub fn optimum_factor(activities: &[Activity], start: usize, end: usize) -> f64 {
    BlockScale::of(activities, start, end).factor()
}

/// Indices bounding the blocks of the whole plan: the first and last
/// activity plus every fixed activity, ascending.
pub fn fixed_indices(activities: &[Activity]) -> Vec<usize> {
    let Some(last) = activities.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut indices: Vec<usize> = activities
        .iter()
        .enumerate()
        .filter(|(i, a)| a.is_fixed || *i == 0 || *i == last)
        .map(|(i, _)| i)
        .collect();
    indices.dedup();
    indices
}

/// Block boundaries for actual-length calculation: the current activity
/// followed by every boundary after it.
pub fn block_boundaries(activities: &[Activity], current: usize) -> Vec<usize> {
    if current >= activities.len() {
        return Vec::new();
    }

    let mut boundaries = vec![current];
    boundaries.extend(
        fixed_indices(activities)
            .into_iter()
            .filter(|&i| i > current),
    );
    boundaries
}

/// Recomputes `actual_length`, `optimal_length` and non-fixed start times of
/// every activity at or after `current`.
///
/// Running it twice with no change in between is a no-op.
pub fn recalculate(activities: &mut [Activity], current: usize) {
    if activities.is_empty() {
        return;
    }

    calculate_actual_lengths(activities, current);
    calculate_optimal_lengths(activities);
    calculate_non_fixed_times(activities, current);

    debug!(
        "Recalculated {} activities from index {current}",
        activities.len()
    );
}

fn calculate_actual_lengths(activities: &mut [Activity], current: usize) {
    let boundaries = block_boundaries(activities, current);

    for pair in boundaries.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let scale = BlockScale::of(activities, start, end);
        for activity in &mut activities[start..end] {
            activity.actual_length = scale.scale(activity);
        }
    }
}

fn calculate_optimal_lengths(activities: &mut [Activity]) {
    let last = activities.len() - 1;
    let scale = BlockScale::of(activities, 0, last);
    for activity in activities.iter_mut() {
        activity.optimal_length = scale.scale(activity);
    }
}

// The final activity marks the end of the plan and keeps its own time.
fn calculate_non_fixed_times(activities: &mut [Activity], current: usize) {
    let last = activities.len() - 1;
    for i in (current + 1)..last {
        if !activities[i].is_fixed {
            let prev = &activities[i - 1];
            let start_time = clock::add_minutes(prev.start_time, prev.actual_length);
            activities[i].start_time = start_time;
        }
    }
}

/// Indices of fixed activities that start earlier than the boundary before
/// them. A plan with any such activity has a block with negative available
/// time.
pub fn fixed_order_violations(activities: &[Activity]) -> Vec<usize> {
    let boundaries = fixed_indices(activities);
    boundaries
        .windows(2)
        .filter(|pair| {
            clock::seconds_between(
                activities[pair[0]].start_time,
                activities[pair[1]].start_time,
            ) < 0
        })
        .map(|pair| pair[1])
        .collect()
}
