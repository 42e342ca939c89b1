//! JSON import and export of plan snapshots.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::{debug, info};

use super::ActivityList;
use crate::{
    error::{PlannerError, Result},
    models::{Activity, ActivityRecord},
    params::{ExportPlan, ImportPlan},
    store::PlanStore,
};

/// How imported records relate to activities already in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Skip records whose id is already in the plan
    #[default]
    Ignore,
    /// Overwrite the user-set fields of a future activity with the same id
    Replace,
    /// Add every record as a new activity
    Add,
}

impl ImportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportMode::Ignore => "ignore",
            ImportMode::Replace => "replace",
            ImportMode::Add => "add",
        }
    }
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(ImportMode::Ignore),
            "replace" => Ok(ImportMode::Replace),
            "add" => Ok(ImportMode::Add),
            _ => Err(format!("Invalid import mode: {s}")),
        }
    }
}

/// Counts of what an import did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub replaced: usize,
    pub skipped: usize,
}

impl<S: PlanStore> ActivityList<S> {
    /// Writes the activities at `indices` (all of them when empty) to `path`.
    ///
    /// Returns the number of activities written.
    pub fn export_activities<P: AsRef<Path>>(&self, path: P, indices: &[usize]) -> Result<usize> {
        let path = path.as_ref();

        let records: Vec<ActivityRecord> = if indices.is_empty() {
            self.activities.iter().map(ActivityRecord::from).collect()
        } else {
            indices
                .iter()
                .map(|&i| {
                    self.activities.get(i).map(ActivityRecord::from).ok_or_else(|| {
                        PlannerError::invalid_input("index")
                            .with_reason(format!("no activity at row {i}"))
                    })
                })
                .collect::<Result<_>>()?
        };

        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(path, json).map_err(|e| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!("Exported {} activities to {}", records.len(), path.display());
        Ok(records.len())
    }

    /// Reads a plan snapshot from `path` and merges it according to `mode`.
    ///
    /// New activities go in front of the final activity, or at the end of an
    /// empty plan. The file is fully parsed and validated first; a bad file
    /// leaves the plan untouched.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the file cannot be read and
    /// `PlannerError::ImportFormat` if its contents are unusable.
    pub fn import_activities<P: AsRef<Path>>(
        &mut self,
        path: P,
        mode: ImportMode,
    ) -> Result<ImportSummary> {
        let path = path.as_ref();
        let records = read_records(path)?;

        let mut next = self.activities.clone();
        let mut summary = ImportSummary::default();
        let mut added = Vec::new();

        for record in records {
            let existing = if record.id != 0 {
                next.iter().position(|a| a.id.0 == record.id)
            } else {
                None
            };

            match (mode, existing) {
                (ImportMode::Ignore, Some(_)) => summary.skipped += 1,
                (ImportMode::Replace, Some(row)) if row >= self.current_index => {
                    let target = &mut next[row];
                    target.name = record.name;
                    target.length = record.length;
                    target.start_time = record.start_time;
                    target.is_fixed = record.is_fixed;
                    target.is_rigid = record.is_rigid;
                    summary.replaced += 1;
                }
                _ => added.push(Activity::from(record)),
            }
        }

        summary.added = added.len();
        let at = next.len().saturating_sub(1).max(self.current_index).min(next.len());
        let ids = self.fresh_ids(added.len());
        next.splice(
            at..at,
            added
                .into_iter()
                .zip(ids)
                .map(|(activity, id)| Activity { id, ..activity }),
        );

        debug!("Import from {} in {mode} mode: {summary:?}", path.display());
        if summary.added == 0 && summary.replaced == 0 {
            return Ok(summary);
        }

        self.commit(next, self.current_index)?;
        info!(
            "Imported {} and replaced {} activities from {}",
            summary.added,
            summary.replaced,
            path.display()
        );
        Ok(summary)
    }

    /// [`ActivityList::import_activities`] driven by [`ImportPlan`].
    pub fn import_plan(&mut self, params: &ImportPlan) -> Result<ImportSummary> {
        self.import_activities(&params.path, params.mode)
    }

    /// [`ActivityList::export_activities`] driven by [`ExportPlan`].
    pub fn export_plan(&self, params: &ExportPlan) -> Result<usize> {
        self.export_activities(&params.path, &params.rows)
    }
}

fn read_records(path: &Path) -> Result<Vec<ActivityRecord>> {
    let raw = std::fs::read_to_string(path).map_err(|e| PlannerError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records: Vec<ActivityRecord> =
        serde_json::from_str(&raw).map_err(|e| import_error(path, e.to_string()))?;

    if let Some(bad) = records.iter().find(|r| r.length < 0) {
        return Err(import_error(
            path,
            format!("activity '{}' has negative length {}", bad.name, bad.length),
        ));
    }

    Ok(records)
}

fn import_error(path: &Path, reason: String) -> PlannerError {
    PlannerError::ImportFormat {
        path: PathBuf::from(path),
        reason,
    }
}
