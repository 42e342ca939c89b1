//! Execution state machine driving a plan through the day.
//!
//! [`PlanHandler`] wraps an [`ActivityList`] and adds a countdown to the
//! start of the activity that follows the current one. It has two states:
//!
//! ```text
//!            start / start_from_index
//!   ┌──────┐ ───────────────────────▶ ┌─────────┐ ──┐
//!   │ Idle │                          │ Running │   │ tick
//!   └──────┘ ◀─────────────────────── └─────────┘ ◀─┘
//!            end / abort / interrupt / replace
//! ```
//!
//! The handler never ends an activity on its own. When the countdown reaches
//! zero, [`PlanHandler::tick`] reports [`PlanEvent::ActivityExpired`] and the
//! caller decides whether to `end` or `abort`.
//!
//! Events go out on the unbounded channel returned by [`PlanHandler::new`].
//! The same channel receives the list's
//! [`PlanEvent::ActivityListChanged`] notifications.

use std::time::Duration;

use jiff::civil::Time;
use log::{debug, info};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    clock,
    db::Database,
    error::{PlannerError, Result},
    events::{publish, PlanEvent},
    planner::ActivityList,
    store::PlanStore,
};

#[cfg(test)]
mod tests;

/// Period at which [`PlanHandler::tick`] should be called while running.
pub const TICK_INTERVAL: Duration = Duration::from_millis(490);

/// Whether a countdown is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerState {
    Idle,
    /// Counting down to the start of the following activity.
    Running { countdown_to: Time },
}

/// Drives the current activity of an [`ActivityList`].
pub struct PlanHandler<S: PlanStore = Database> {
    list: ActivityList<S>,
    state: HandlerState,
    events: UnboundedSender<PlanEvent>,
}

impl<S: PlanStore> PlanHandler<S> {
    /// Wraps `list` and returns the receiving end of its event channel.
    pub fn new(mut list: ActivityList<S>) -> (Self, UnboundedReceiver<PlanEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        list.set_event_sender(tx.clone());

        let handler = Self {
            list,
            state: HandlerState::Idle,
            events: tx,
        };
        (handler, rx)
    }

    pub fn state(&self) -> HandlerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, HandlerState::Running { .. })
    }

    pub fn list(&self) -> &ActivityList<S> {
        &self.list
    }

    /// Mutable access for edits made while idle or running.
    pub fn list_mut(&mut self) -> &mut ActivityList<S> {
        &mut self.list
    }

    /// Starts the countdown of the current activity.
    ///
    /// A running countdown is aborted first. Unless `preemptive`, the current
    /// activity is stamped as starting now.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::NoFollowingActivity` when there is nothing to
    /// count down to; the handler is left idle.
    pub fn start(&mut self, preemptive: bool) -> Result<()> {
        if self.is_running() {
            self.abort();
        }

        if self.list.following_activity().is_none() {
            return Err(PlannerError::NoFollowingActivity {
                index: self.list.current_index(),
            });
        }

        if !preemptive {
            self.list.set_current_activity_start_time()?;
        }

        let (current, countdown_to) = match (
            self.list.current_activity(),
            self.list.following_activity(),
        ) {
            (Some(current), Some(following)) => (current.clone(), following.start_time),
            _ => {
                return Err(PlannerError::NoFollowingActivity {
                    index: self.list.current_index(),
                })
            }
        };

        info!("Started '{}', counting down to {countdown_to}", current.name);
        self.state = HandlerState::Running { countdown_to };
        self.publish(PlanEvent::ActivityStarted(current));
        Ok(())
    }

    /// Moves the frontier to `index` and starts from there.
    pub fn start_from_index(&mut self, index: usize, preemptive: bool) -> Result<()> {
        self.list.set_current_activity_index(index)?;
        self.start(preemptive)
    }

    /// Finishes the running activity and moves on.
    ///
    /// Does nothing when idle. Archives the day once the final activity is
    /// reached; otherwise, when `preemptive`, immediately starts the next
    /// activity.
    pub fn end(&mut self, preemptive: bool) -> Result<()> {
        if !self.is_running() {
            debug!("Ignoring end: no activity is running");
            return Ok(());
        }

        self.stop();
        self.list.complete_activity(preemptive)?;

        if self.list.is_completed() {
            return self.archive();
        }

        if preemptive {
            self.start(true)?;
        }
        Ok(())
    }

    /// Archives the day once the final activity is reached; does nothing
    /// before that.
    ///
    /// `end` archives on its own. Call this again after a failed archive to
    /// retry it.
    pub fn archive(&mut self) -> Result<()> {
        if !self.list.is_completed() {
            debug!("Ignoring archive: the plan is not completed");
            return Ok(());
        }

        self.list.archive()?;
        info!("Plan completed");
        self.publish(PlanEvent::PlanCompleted);
        Ok(())
    }

    /// Records an interruption of the current activity and ends it.
    pub fn interrupt(&mut self, name: &str) -> Result<()> {
        self.list.insert_interruption(name)?;
        self.end(false)
    }

    /// Replaces the rest of the current activity with `name` and ends it.
    pub fn replace(&mut self, name: &str) -> Result<()> {
        self.list.insert_replacement(name)?;
        self.end(false)
    }

    /// Stops the countdown without recording anything. Safe to call when
    /// idle.
    pub fn abort(&mut self) {
        if self.is_running() {
            self.stop();
        }
    }

    /// Periodic callback while running.
    ///
    /// Publishes the remaining time and, once it is exactly zero, that the
    /// current activity expired.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }

        let seconds_remaining = self.seconds_remaining();
        self.publish(PlanEvent::Countdown { seconds_remaining });

        if seconds_remaining == 0 {
            if let Some(current) = self.list.current_activity() {
                let current = current.clone();
                self.publish(PlanEvent::ActivityExpired(current));
            }
        }
    }

    /// Signed seconds from now to the countdown target, `0` when idle.
    pub fn seconds_remaining(&self) -> i64 {
        match self.state {
            HandlerState::Idle => 0,
            HandlerState::Running { countdown_to } => {
                clock::seconds_between(self.list.clock().now().time(), countdown_to)
            }
        }
    }

    fn stop(&mut self) {
        self.state = HandlerState::Idle;
        if let Some(current) = self.list.current_activity() {
            let current = current.clone();
            self.publish(PlanEvent::ActivityStopped(current));
        }
    }

    fn publish(&self, event: PlanEvent) {
        publish(Some(&self.events), event);
    }
}
