//! Activity log written when a day is archived.

use jiff::civil::{Date, Time};
use rusqlite::{params, Connection};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Activity, LogEntry},
};

use super::{
    activity_queries::replace_activities,
    conversion_error,
    settings_queries::{upsert_setting, CURRENT_ACTIVITY_INDEX},
    TIME_FORMAT,
};

const INSERT_NAME_SQL: &str = "INSERT OR IGNORE INTO activity_names (name) VALUES (?1)";
const INSERT_LOG_SQL: &str = "INSERT INTO activity_log (date, position, start_time, name_id, length, actual_length, optimal_length, is_fixed, is_rigid) SELECT ?1, ?2, ?3, id, ?4, ?5, ?6, ?7, ?8 FROM activity_names WHERE name = ?9";
const SELECT_LOG_BY_DATE_SQL: &str = "SELECT l.date, l.position, l.start_time, n.name, l.length, l.actual_length, l.optimal_length, l.is_fixed, l.is_rigid FROM activity_log l JOIN activity_names n ON n.id = l.name_id WHERE l.date = ?1 ORDER BY l.id";
const SELECT_LOG_DATES_SQL: &str = "SELECT DISTINCT date FROM activity_log ORDER BY date DESC";

impl super::Database {
    fn build_log_entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<LogEntry> {
        let date = row
            .get::<_, String>(0)?
            .parse::<Date>()
            .map_err(|e| conversion_error(0, e))?;
        let start_time = Time::strptime(TIME_FORMAT, row.get::<_, String>(2)?)
            .map_err(|e| conversion_error(2, e))?;

        Ok(LogEntry {
            date,
            position: row.get(1)?,
            start_time,
            name: row.get(3)?,
            length: row.get(4)?,
            actual_length: row.get(5)?,
            optimal_length: row.get(6)?,
            is_fixed: row.get(7)?,
            is_rigid: row.get(8)?,
        })
    }

    /// Appends `activities` to the log for `date`. Either every row is
    /// written or none is.
    pub fn append_log(&mut self, activities: &[Activity], date: Date) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        insert_log(&tx, activities, date)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Logs `performed` for `date`, stores `next` as the plan and resets the
    /// frontier to 0, all in one transaction.
    pub fn archive_day(&mut self, performed: &[Activity], date: Date, next: &[Activity]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        insert_log(&tx, performed, date)?;
        replace_activities(&tx, next)?;
        upsert_setting(&tx, CURRENT_ACTIVITY_INDEX, "0")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Returns the archived activities of `date` in the order they were
    /// written.
    pub fn read_log(&self, date: Date) -> Result<Vec<LogEntry>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LOG_BY_DATE_SQL)
            .db_context("Failed to prepare query")?;

        let entries = stmt
            .query_map(params![date.to_string()], Self::build_log_entry_from_row)
            .db_context("Failed to query activity log")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read log row")?;

        Ok(entries)
    }

    /// Days that have at least one archived activity, most recent first.
    pub fn log_dates(&self) -> Result<Vec<Date>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LOG_DATES_SQL)
            .db_context("Failed to prepare query")?;

        let dates = stmt
            .query_map([], |row| {
                row.get::<_, String>(0)?
                    .parse::<Date>()
                    .map_err(|e| conversion_error(0, e))
            })
            .db_context("Failed to query log dates")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read log date")?;

        Ok(dates)
    }
}

fn insert_log(conn: &Connection, activities: &[Activity], date: Date) -> Result<()> {
    let mut insert_name = conn
        .prepare(INSERT_NAME_SQL)
        .db_context("Failed to prepare name insert")?;
    let mut insert_log = conn
        .prepare(INSERT_LOG_SQL)
        .db_context("Failed to prepare log insert")?;

    let date_str = date.to_string();
    for (position, activity) in activities.iter().enumerate() {
        insert_name
            .execute(params![activity.name])
            .db_context("Failed to record activity name")?;
        insert_log
            .execute(params![
                date_str,
                position as i64,
                activity.start_time.strftime(TIME_FORMAT).to_string(),
                activity.length,
                activity.actual_length,
                activity.optimal_length,
                activity.is_fixed,
                activity.is_rigid,
                activity.name,
            ])
            .db_context("Failed to insert log entry")?;
    }
    Ok(())
}
