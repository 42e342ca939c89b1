//! Dayplan CLI application
//!
//! Command-line front end for the day planner: one-shot plan edits plus an
//! interactive `run` session.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use dayplan_core::PlannerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let list = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Dayplan started");

    match command {
        Some(Show) | None => Cli::new(list, renderer).show(),
        Some(Add(args)) => Cli::new(list, renderer).add(&args.into()),
        Some(Delete(args)) => Cli::new(list, renderer).delete(&args.rows),
        Some(Set(args)) => Cli::new(list, renderer).set(&args.into()),
        Some(Move(args)) => Cli::new(list, renderer).move_activity(args.from, args.to),
        Some(Clear(args)) => Cli::new(list, renderer).clear(args.confirm),
        Some(Import(args)) => Cli::new(list, renderer).import(&args.into()),
        Some(Export(args)) => Cli::new(list, renderer).export(&args.into()),
        Some(Log(args)) => Cli::new(list, renderer).log(args.date),
        Some(Run) => session::run(list, renderer)
            .await
            .context("Interactive session failed"),
    }
}
