//! Reading and writing the stored plan sequence.

use jiff::civil::Time;
use rusqlite::{params, Connection};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Activity, ActivityId},
};

use super::{conversion_error, TIME_FORMAT};

const SELECT_ACTIVITIES_SQL: &str = "SELECT id, name, length, start_time, is_fixed, is_rigid, actual_length FROM plan_activities ORDER BY position";
const DELETE_ACTIVITIES_SQL: &str = "DELETE FROM plan_activities";
const INSERT_ACTIVITY_SQL: &str = "INSERT INTO plan_activities (id, position, name, length, start_time, is_fixed, is_rigid, actual_length) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

impl super::Database {
    /// Helper function to construct an Activity from a database row
    fn build_activity_from_row(row: &rusqlite::Row) -> rusqlite::Result<Activity> {
        let start_time = Time::strptime(TIME_FORMAT, row.get::<_, String>(3)?)
            .map_err(|e| conversion_error(3, e))?;

        Ok(Activity {
            id: ActivityId(row.get(0)?),
            name: row.get(1)?,
            length: row.get(2)?,
            start_time,
            is_fixed: row.get(4)?,
            is_rigid: row.get(5)?,
            actual_length: row.get(6)?,
            optimal_length: 0,
        })
    }

    /// Loads the stored plan in display order.
    pub fn load_activities(&self) -> Result<Vec<Activity>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ACTIVITIES_SQL)
            .db_context("Failed to prepare query")?;

        let activities = stmt
            .query_map([], Self::build_activity_from_row)
            .db_context("Failed to query activities")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read activity row")?;

        Ok(activities)
    }

    /// Replaces the stored plan with `activities` in one transaction.
    pub fn save_activities(&mut self, activities: &[Activity]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        replace_activities(&tx, activities)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}

/// Deletes the stored plan and writes `activities` in its place. Callers
/// own the transaction.
pub(super) fn replace_activities(conn: &Connection, activities: &[Activity]) -> Result<()> {
    conn.execute(DELETE_ACTIVITIES_SQL, [])
        .db_context("Failed to clear stored plan")?;

    let mut stmt = conn
        .prepare(INSERT_ACTIVITY_SQL)
        .db_context("Failed to prepare insert")?;
    for (position, activity) in activities.iter().enumerate() {
        stmt.execute(params![
            activity.id.0,
            position as i64,
            activity.name,
            activity.length,
            activity.start_time.strftime(TIME_FORMAT).to_string(),
            activity.is_fixed,
            activity.is_rigid,
            activity.actual_length,
        ])
        .db_context("Failed to insert activity")?;
    }
    Ok(())
}
