//! Builder for creating and configuring ActivityList instances.

use std::path::{Path, PathBuf};

use super::ActivityList;
use crate::{
    clock::{Clock, SystemClock},
    db::Database,
    error::{PlannerError, Result},
};

/// Builder for an [`ActivityList`] stored in a SQLite file.
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    clock: Box<dyn Clock>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            clock: Box::new(SystemClock),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/dayplan/dayplan.db` or `~/.local/share/dayplan/dayplan.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the system clock, e.g. with a
    /// [`ManualClock`](crate::clock::ManualClock) in tests.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Opens the database and loads the stored plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the database directory cannot be
    /// created, `PlannerError::XdgDirectory` if no default location exists,
    /// `PlannerError::Configuration` if the path names a directory and
    /// `PlannerError::Database` if opening or reading the database fails.
    pub fn build(self) -> Result<ActivityList<Database>> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if db_path.is_dir() {
            return Err(PlannerError::Configuration {
                message: format!("database path '{}' is a directory", db_path.display()),
            });
        }

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db = Database::new(&db_path)?;
        ActivityList::load(db, self.clock)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    pub fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("dayplan")
            .place_data_file("dayplan.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
