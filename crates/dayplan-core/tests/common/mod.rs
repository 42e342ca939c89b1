#![allow(dead_code)]

use std::path::Path;

use dayplan_core::{Activity, ActivityList, ManualClock, PlannerBuilder};
use jiff::civil::{date, time, Date, Time};
use tempfile::TempDir;

pub const DAY: Date = date(2024, 3, 1);

/// Helper function to create a test plan backed by a temporary database
pub fn create_test_planner(now: Time) -> (TempDir, ActivityList, ManualClock) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let clock = ManualClock::new(DAY.to_datetime(now));
    let list = open_planner(&temp_dir.path().join("test.db"), &clock);
    (temp_dir, list, clock)
}

/// Opens (or reopens) the plan stored at `db_path`.
pub fn open_planner(db_path: &Path, clock: &ManualClock) -> ActivityList {
    PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .with_clock(clock.clone())
        .build()
        .expect("Failed to create planner")
}

/// A full day with two blocks split at 16:00 and one rigid activity.
pub fn full_day() -> Vec<Activity> {
    vec![
        Activity::new("Breakfast and news", 22).fixed_at(time(7, 0, 0, 0)),
        Activity::new("Incremental reading", 90),
        Activity::new("Jobs: Planning the day", 10),
        Activity::new("Work: DBT programming", 240),
        Activity::new("Work: e-mail, phone calls", 35),
        Activity::new("Sport: warm up", 27).rigid(),
        Activity::new("Sport: jogging", 54),
        Activity::new("Meal: Dinner and Netflix", 40),
        Activity::new("Rest", 54),
        Activity::new("Family", 116).fixed_at(time(16, 0, 0, 0)),
        Activity::new("Meal: Supper with Family", 44),
        Activity::new("Work: DBT report", 120),
        Activity::new("Work: Tasklist", 58),
        Activity::new("WWW: sport news", 15),
        Activity::new("Shower", 15),
        Activity::new("YouTube: evening lectures", 116),
        Activity::new("Sleep", 0).fixed_at(time(23, 59, 0, 0)),
    ]
}
