//! Activity model definition and related functionality.

use std::fmt;

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::clock::truncate_to_minute;

/// Stable identifier of an activity within a plan.
///
/// Assigned when the activity is inserted and kept across moves and edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub i64);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled item of a day plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Stable identifier, assigned at insertion
    pub id: ActivityId,

    /// Display label
    pub name: String,

    /// Planned duration in whole minutes
    pub length: i64,

    /// Time of day at which the activity is scheduled to begin, in whole
    /// minutes
    pub start_time: Time,

    /// Start time is authoritative and bounds a block
    pub is_fixed: bool,

    /// Length is never compressed or expanded
    pub is_rigid: bool,

    /// Length after fitting the activity into its current block, or the
    /// recorded duration once the activity is history
    #[serde(default)]
    pub actual_length: i64,

    /// Length after fitting the activity into the whole-day schedule
    #[serde(default)]
    pub optimal_length: i64,
}

impl Activity {
    /// Creates a flexible activity with the given name and planned length.
    ///
    /// The id is a placeholder until the activity is inserted into a plan.
    pub fn new(name: impl Into<String>, length: i64) -> Self {
        Self {
            id: ActivityId(0),
            name: name.into(),
            length,
            start_time: Time::midnight(),
            is_fixed: false,
            is_rigid: false,
            actual_length: 0,
            optimal_length: 0,
        }
    }

    /// Pins the activity to `start_time`, dropping any seconds.
    pub fn fixed_at(mut self, start_time: Time) -> Self {
        self.start_time = truncate_to_minute(start_time);
        self.is_fixed = true;
        self
    }

    /// Marks the activity as non-compressible.
    pub fn rigid(mut self) -> Self {
        self.is_rigid = true;
        self
    }

    /// Ratio of the actual length to the planned length, `0.0` when nothing
    /// was planned.
    pub fn percent(&self) -> f64 {
        if self.length != 0 {
            self.actual_length as f64 / self.length as f64
        } else {
            0.0
        }
    }
}

impl Default for Activity {
    fn default() -> Self {
        Self::new("Activity", 0)
    }
}
