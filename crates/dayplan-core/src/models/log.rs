//! Archived activity log entries.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

/// One performed activity as written to the activity log on archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Day the plan was completed
    pub date: Date,

    /// Position of the activity in that day's plan
    pub position: u32,

    pub start_time: Time,
    pub name: String,
    pub length: i64,
    pub actual_length: i64,
    pub optimal_length: i64,
    pub is_fixed: bool,
    pub is_rigid: bool,
}
