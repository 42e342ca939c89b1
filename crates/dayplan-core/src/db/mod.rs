//! Database operations and SQLite management for the day plan.
//!
//! This module provides the low-level storage of the planner. It handles the
//! SQLite connection and schema, and provides specialized query interfaces
//! for the plan sequence, the activity log and persistent settings. The
//! [`crate::store::PlanStore`] implementation on top of it is what the
//! activity list talks to.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod activity_queries;
pub mod log_queries;
pub mod migrations;
pub mod settings_queries;

/// Format used for start times stored in the database.
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, mostly useful for tests.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Maps a text column that failed to parse into a rusqlite conversion error.
pub(crate) fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(err))
}
