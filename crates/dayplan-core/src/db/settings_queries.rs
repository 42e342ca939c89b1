//! Key/value settings stored alongside the plan.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SETTING_SQL: &str = "SELECT value FROM settings WHERE key = ?1";
const UPSERT_SETTING_SQL: &str = "INSERT INTO settings (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// Key of the persisted execution frontier.
pub const CURRENT_ACTIVITY_INDEX: &str = "current_activity_index";

impl super::Database {
    /// Reads a setting, `None` when it was never written.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SETTING_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query setting")
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        upsert_setting(&self.connection, key, value)
    }
}

pub(super) fn upsert_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(UPSERT_SETTING_SQL, params![key, value])
        .db_context("Failed to store setting")?;
    Ok(())
}
