//! Interactive session driving a [`PlanHandler`] from stdin.
//!
//! Commands are read one line at a time while the handler ticks every
//! [`TICK_INTERVAL`]. Handler events are printed as they arrive; countdown
//! events only on whole minutes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dayplan_core::{
    ActivityList, Countdown, OperationStatus, PlanEvent, PlanHandler, TICK_INTERVAL,
};
use log::{debug, info};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    sync::mpsc::UnboundedReceiver,
    time,
};

use crate::{cli::show_plan, renderer::TerminalRenderer};

const GREETING: &str = "Commands: start [--preemptive], start-from <row> [--preemptive], \
end [--preemptive], interrupt <name>, replace <name>, abort, archive, show, quit\n";

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum SessionCommand {
    /// Start the current activity
    Start {
        /// Keep the scheduled start time instead of stamping now
        #[arg(short, long)]
        preemptive: bool,
    },
    /// Make `row` the current activity and start it
    StartFrom {
        row: usize,
        #[arg(short, long)]
        preemptive: bool,
    },
    /// Finish the running activity
    End {
        /// Start the next activity right away without recording this one
        #[arg(short, long)]
        preemptive: bool,
    },
    /// Record an interruption of the running activity
    Interrupt {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Replace the rest of the running activity
    Replace {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Stop the countdown without recording anything
    Abort,
    /// Retry archiving a completed day
    Archive,
    /// Print the plan
    Show,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Runs the session until `quit` or end of input.
pub async fn run(list: ActivityList, renderer: TerminalRenderer) -> Result<()> {
    let (mut handler, mut events) = PlanHandler::new(list);
    let mut ticker = time::interval(TICK_INTERVAL);
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut last_countdown = None;

    info!("Interactive session started");
    renderer.render(GREETING)?;
    show_plan(handler.list(), &renderer)?;

    loop {
        tokio::select! {
            _ = ticker.tick() => handler.tick(),
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match execute(&mut handler, &renderer, &line) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(e) => renderer.render_status(&OperationStatus::failure(format!("{e:#}")))?,
                }
            }
        }
        report_events(&mut events, &renderer, &mut last_countdown)?;
    }

    handler.abort();
    report_events(&mut events, &renderer, &mut last_countdown)?;
    info!("Interactive session ended");
    Ok(())
}

fn execute(handler: &mut PlanHandler, renderer: &TerminalRenderer, line: &str) -> Result<Flow> {
    if line.trim().is_empty() {
        return Ok(Flow::Continue);
    }

    let command = match SessionLine::try_parse_from(line.split_whitespace()) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            renderer.render(&e.to_string())?;
            return Ok(Flow::Continue);
        }
    };
    debug!("session command: {command:?}");

    match command {
        SessionCommand::Start { preemptive } => handler.start(preemptive)?,
        SessionCommand::StartFrom { row, preemptive } => handler.start_from_index(row, preemptive)?,
        SessionCommand::End { preemptive } => handler.end(preemptive)?,
        SessionCommand::Interrupt { name } => handler.interrupt(&name.join(" "))?,
        SessionCommand::Replace { name } => handler.replace(&name.join(" "))?,
        SessionCommand::Abort => handler.abort(),
        SessionCommand::Archive => handler.archive()?,
        SessionCommand::Show => {
            show_plan(handler.list(), renderer)?;
            if handler.is_running() {
                renderer.render(&format!(
                    "Remaining: {}\n",
                    Countdown(handler.seconds_remaining())
                ))?;
            }
        }
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn report_events(
    events: &mut UnboundedReceiver<PlanEvent>,
    renderer: &TerminalRenderer,
    last_countdown: &mut Option<i64>,
) -> Result<()> {
    while let Ok(event) = events.try_recv() {
        match &event {
            PlanEvent::ActivityListChanged => {}
            PlanEvent::Countdown { seconds_remaining } => {
                // Ticks come twice a second; print each whole minute once.
                let seconds_remaining = *seconds_remaining;
                if seconds_remaining % 60 == 0 && *last_countdown != Some(seconds_remaining) {
                    *last_countdown = Some(seconds_remaining);
                    renderer.render(&format!("{event}\n"))?;
                }
            }
            _ => renderer.render(&format!("{event}\n"))?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        SessionLine::try_parse_from(line.split_whitespace())
            .unwrap()
            .command
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse("start"), SessionCommand::Start { preemptive: false });
        assert_eq!(
            parse("start-from 3 --preemptive"),
            SessionCommand::StartFrom {
                row: 3,
                preemptive: true
            }
        );
        assert_eq!(parse("end -p"), SessionCommand::End { preemptive: true });
        assert_eq!(parse("archive"), SessionCommand::Archive);
        assert_eq!(parse("exit"), SessionCommand::Quit);
    }

    #[test]
    fn test_names_may_contain_spaces() {
        assert_eq!(
            parse("interrupt phone call"),
            SessionCommand::Interrupt {
                name: vec!["phone".to_string(), "call".to_string()]
            }
        );
    }

    #[test]
    fn test_rejects_unknown_commands() {
        assert!(SessionLine::try_parse_from("snooze".split_whitespace()).is_err());
        assert!(SessionLine::try_parse_from("interrupt".split_whitespace()).is_err());
    }
}
