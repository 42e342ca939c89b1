use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddArgs, ClearArgs, DeleteArgs, ExportArgs, ImportArgs, LogArgs, MoveArgs, SetArgs,
};

/// Day planner that reschedules the rest of the day as you go
///
/// A plan is an ordered list of activities. Fixed activities start at a set
/// time and the flexible ones in between are stretched or squeezed to fill
/// the gaps. Run `dp run` to work through the plan interactively.
#[derive(Parser)]
#[command(version, about, name = "dp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/dayplan/dayplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the dayplan CLI
///
/// Without a command the current plan is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the plan with its recalculated schedule
    #[command(alias = "ls")]
    Show,
    /// Add an activity
    #[command(alias = "a")]
    Add(AddArgs),
    /// Delete activities by row
    #[command(alias = "rm")]
    Delete(DeleteArgs),
    /// Edit one field of an activity
    Set(SetArgs),
    /// Move an activity to another row
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Remove every activity from the plan
    Clear(ClearArgs),
    /// Import activities from a JSON file
    Import(ImportArgs),
    /// Export activities to a JSON file
    Export(ExportArgs),
    /// Show the archived activities of a day
    Log(LogArgs),
    /// Work through the plan interactively
    Run,
}
