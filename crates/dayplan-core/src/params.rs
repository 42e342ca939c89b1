//! Parameter structures for planner operations.
//!
//! These are plain structures without framework derives. The CLI defines its
//! own clap argument structs and converts them with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    CLI Args     │    │   Core Params   │    │  ActivityList   │
//! │ (clap derives)  │───▶│  (plain data)   │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::path::PathBuf;

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::{clock::truncate_to_minute, models::Activity, planner::ImportMode};

/// Parameters for adding one activity to the plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewActivity {
    /// Display name
    pub name: String,
    /// Planned length in minutes
    pub length: i64,
    /// Start time; required for the activity to be fixed
    pub start_time: Option<Time>,
    pub is_fixed: bool,
    pub is_rigid: bool,
    /// Row to insert at; defaults to just before the final activity
    pub index: Option<usize>,
}

impl From<&NewActivity> for Activity {
    fn from(params: &NewActivity) -> Self {
        let mut activity = Activity::new(params.name.clone(), params.length);
        if let Some(start_time) = params.start_time {
            activity.start_time = truncate_to_minute(start_time);
        }
        activity.is_fixed = params.is_fixed;
        activity.is_rigid = params.is_rigid;
        activity
    }
}

/// Parameters for editing one cell of the plan from text input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditField {
    pub row: usize,
    /// Field name as accepted by `ActivityField::from_str`
    pub field: String,
    /// Raw value, parsed according to the field
    pub value: String,
}

/// Parameters for importing a plan snapshot.
#[derive(Debug, Clone, Default)]
pub struct ImportPlan {
    pub path: PathBuf,
    pub mode: ImportMode,
}

/// Parameters for exporting a plan snapshot.
#[derive(Debug, Clone, Default)]
pub struct ExportPlan {
    pub path: PathBuf,
    /// Rows to export; all of them when empty
    pub rows: Vec<usize>,
}
