//! Plan snapshot file format.
//!
//! A snapshot is a JSON array of objects carrying only the user-set fields of
//! each activity. Derived lengths are never written and are recomputed after
//! an import.

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use super::{Activity, ActivityId};

/// One activity as stored in an exported plan file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Missing or `0` in hand-written files; a fresh id is assigned on import
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub length: i64,
    #[serde(with = "hh_mm")]
    pub start_time: Time,
    pub is_fixed: bool,
    pub is_rigid: bool,
}

impl From<&Activity> for ActivityRecord {
    fn from(activity: &Activity) -> Self {
        ActivityRecord {
            id: activity.id.0,
            name: activity.name.clone(),
            length: activity.length,
            start_time: activity.start_time,
            is_fixed: activity.is_fixed,
            is_rigid: activity.is_rigid,
        }
    }
}

impl From<ActivityRecord> for Activity {
    fn from(record: ActivityRecord) -> Self {
        Activity {
            id: ActivityId(record.id),
            name: record.name,
            length: record.length,
            start_time: record.start_time,
            is_fixed: record.is_fixed,
            is_rigid: record.is_rigid,
            actual_length: 0,
            optimal_length: 0,
        }
    }
}

/// Serde adapter for `"HH:MM"` times.
mod hh_mm {
    use jiff::civil::Time;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.strftime(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Time::strptime(FORMAT, &raw)
            .map_err(|e| D::Error::custom(format!("invalid start_time '{raw}': {e}")))
    }
}
