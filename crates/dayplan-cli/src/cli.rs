//! Command-line argument structs and their handlers.
//!
//! Each subcommand has a clap argument struct that converts into the plain
//! parameter type the core expects:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ActivityList
//! ```
//!
//! Keeping clap derives on this side lets the core parameter types stay free
//! of CLI concerns such as aliases, short flags and help text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use dayplan_core::{
    params::{EditField, ExportPlan, ImportPlan, NewActivity},
    ActivityList, ImportMode, LogEntries, OperationStatus, PlanTable,
};
use jiff::civil::{Date, Time};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Parses an `HH:MM` wall-clock time.
fn parse_clock_time(raw: &str) -> std::result::Result<Time, String> {
    Time::strptime("%H:%M", raw).map_err(|e| format!("expected HH:MM: {e}"))
}

/// Add an activity to the plan
///
/// Without `--row` the activity goes in front of the final activity, which
/// marks the end of the day.
#[derive(Args)]
pub struct AddArgs {
    /// Name of the activity
    pub name: String,
    /// Planned length in minutes
    #[arg(short, long)]
    pub length: i64,
    /// Start time (HH:MM); required together with --fixed
    #[arg(short, long, value_parser = parse_clock_time)]
    pub start: Option<Time>,
    /// Pin the activity to its start time
    #[arg(short, long)]
    pub fixed: bool,
    /// Keep the planned length when the schedule is squeezed or stretched
    #[arg(short, long)]
    pub rigid: bool,
    /// Row to insert at
    #[arg(long)]
    pub row: Option<usize>,
}

impl From<AddArgs> for NewActivity {
    fn from(val: AddArgs) -> Self {
        NewActivity {
            name: val.name,
            length: val.length,
            start_time: val.start,
            is_fixed: val.fixed,
            is_rigid: val.rigid,
            index: val.row,
        }
    }
}

/// Delete activities
#[derive(Args)]
pub struct DeleteArgs {
    /// Rows to delete; rows that are already history are skipped
    #[arg(required = true)]
    pub rows: Vec<usize>,
}

/// Edit one field of an activity
///
/// Editable fields are `fixed`, `rigid`, `start`, `name` and `length`. The
/// other columns are derived by the schedule.
#[derive(Args)]
pub struct SetArgs {
    /// Row of the activity
    pub row: usize,
    /// Field to edit
    pub field: String,
    /// New value (HH:MM for times, minutes for lengths, yes/no for flags)
    pub value: String,
}

impl From<SetArgs> for EditField {
    fn from(val: SetArgs) -> Self {
        EditField {
            row: val.row,
            field: val.field,
            value: val.value,
        }
    }
}

/// Move an activity to another row
#[derive(Args)]
pub struct MoveArgs {
    /// Current row of the activity
    pub from: usize,
    /// Row it should end up at
    pub to: usize,
}

/// Remove every activity from the plan
#[derive(Args)]
pub struct ClearArgs {
    /// Confirm the removal (required to prevent accidental clearing)
    #[arg(long)]
    pub confirm: bool,
}

/// Import activities from a JSON file
#[derive(Args)]
pub struct ImportArgs {
    /// File written by `dp export`
    pub path: PathBuf,
    /// What to do with activities whose id is already in the plan
    #[arg(short, long, value_enum, default_value_t = ImportModeArg::Ignore)]
    pub mode: ImportModeArg,
}

impl From<ImportArgs> for ImportPlan {
    fn from(val: ImportArgs) -> Self {
        ImportPlan {
            path: val.path,
            mode: val.mode.into(),
        }
    }
}

/// Export activities to a JSON file
#[derive(Args)]
pub struct ExportArgs {
    /// Destination file
    pub path: PathBuf,
    /// Rows to export; all of them when omitted
    pub rows: Vec<usize>,
}

impl From<ExportArgs> for ExportPlan {
    fn from(val: ExportArgs) -> Self {
        ExportPlan {
            path: val.path,
            rows: val.rows,
        }
    }
}

/// Show archived activities
#[derive(Args)]
pub struct LogArgs {
    /// Day to show (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<Date>,
}

/// Command-line representation of [`ImportMode`]
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImportModeArg {
    /// Keep the plan's version of known activities
    Ignore,
    /// Overwrite known activities that are not history yet
    Replace,
    /// Add every activity as a new one
    Add,
}

impl From<ImportModeArg> for ImportMode {
    fn from(val: ImportModeArg) -> Self {
        match val {
            ImportModeArg::Ignore => ImportMode::Ignore,
            ImportModeArg::Replace => ImportMode::Replace,
            ImportModeArg::Add => ImportMode::Add,
        }
    }
}

impl std::fmt::Display for ImportModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ImportMode::from(*self))
    }
}

/// Runs one-shot commands against a loaded plan and renders the outcome.
pub struct Cli {
    list: ActivityList,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(list: ActivityList, renderer: TerminalRenderer) -> Self {
        Self { list, renderer }
    }

    /// Prints the plan table, followed by a warning if fixed activities are
    /// out of order.
    pub fn show(&self) -> Result<()> {
        show_plan(&self.list, &self.renderer)
    }

    pub fn add(&mut self, params: &NewActivity) -> Result<()> {
        debug!("add: {params:?}");
        let row = self
            .list
            .add_activity(params)
            .context("Failed to add activity")?;

        self.renderer.render_status(&OperationStatus::success(format!(
            "Added '{}' at row {row}",
            params.name
        )))?;
        self.show()
    }

    pub fn delete(&mut self, rows: &[usize]) -> Result<()> {
        debug!("delete: {rows:?}");
        let before = self.list.len();
        self.list
            .delete(rows)
            .context("Failed to delete activities")?;
        let removed = before - self.list.len();

        let status = if removed == rows.len() {
            OperationStatus::success(format!("Deleted {removed} activities"))
        } else {
            OperationStatus::warning(format!(
                "Deleted {removed} of {} activities; the others are protected or do not exist",
                rows.len()
            ))
        };
        self.renderer.render_status(&status)?;
        self.show()
    }

    pub fn set(&mut self, params: &EditField) -> Result<()> {
        debug!("set: {params:?}");
        let before = self.list.activities().to_vec();
        self.list
            .apply_edit(params)
            .context("Failed to edit activity")?;

        let status = if self.list.activities() == before.as_slice() {
            OperationStatus::warning(format!(
                "Nothing changed; {} of row {} is not editable or already has that value",
                params.field, params.row
            ))
        } else {
            OperationStatus::success(format!("Updated {} of row {}", params.field, params.row))
        };
        self.renderer.render_status(&status)?;
        self.show()
    }

    pub fn move_activity(&mut self, from: usize, to: usize) -> Result<()> {
        debug!("move: {from} -> {to}");
        let before = self.list.activities().to_vec();
        self.list
            .move_activity(from, to)
            .context("Failed to move activity")?;

        let status = if self.list.activities() == before.as_slice() {
            OperationStatus::warning(format!("Row {from} cannot be moved to row {to}"))
        } else {
            OperationStatus::success(format!("Moved row {from} to row {to}"))
        };
        self.renderer.render_status(&status)?;
        self.show()
    }

    pub fn clear(&mut self, confirm: bool) -> Result<()> {
        if !confirm {
            return self.renderer.render_status(&OperationStatus::warning(
                "Clearing removes every activity; run again with --confirm",
            ));
        }

        self.list.clear().context("Failed to clear plan")?;
        self.renderer
            .render_status(&OperationStatus::success("Cleared the plan"))
    }

    pub fn import(&mut self, params: &ImportPlan) -> Result<()> {
        debug!("import: {params:?}");
        let summary = self
            .list
            .import_plan(params)
            .with_context(|| format!("Failed to import {}", params.path.display()))?;

        self.renderer.render_status(&OperationStatus::success(format!(
            "Imported {} ({} added, {} replaced, {} skipped)",
            params.path.display(),
            summary.added,
            summary.replaced,
            summary.skipped
        )))?;
        self.show()
    }

    pub fn export(&self, params: &ExportPlan) -> Result<()> {
        debug!("export: {params:?}");
        let count = self
            .list
            .export_plan(params)
            .with_context(|| format!("Failed to export to {}", params.path.display()))?;

        self.renderer.render_status(&OperationStatus::success(format!(
            "Exported {count} activities to {}",
            params.path.display()
        )))
    }

    /// Prints the archive of `date`, or of today when `None`.
    pub fn log(&self, date: Option<Date>) -> Result<()> {
        let date = date.unwrap_or_else(|| self.list.clock().today());
        let store = self.list.store();

        let entries = LogEntries(store.read_log(date).context("Failed to read log")?);
        self.renderer.render(&format!("# Log for {date}\n\n{entries}"))?;

        if entries.is_empty() {
            let dates = store.log_dates().context("Failed to list log dates")?;
            if !dates.is_empty() {
                let dates: Vec<String> = dates.iter().map(ToString::to_string).collect();
                self.renderer
                    .render(&format!("\nArchived days: {}\n", dates.join(", ")))?;
            }
        }
        Ok(())
    }
}

/// Renders the plan table and the fixed-order warning, if any.
pub fn show_plan(list: &ActivityList, renderer: &TerminalRenderer) -> Result<()> {
    let table = PlanTable::new(list.activities()).with_current(list.current_index());
    renderer.render(&table.to_string())?;

    if let Some(warning) = OperationStatus::fixed_order(&list.check_fixed_order()) {
        renderer.render_status(&warning)?;
    }
    Ok(())
}
