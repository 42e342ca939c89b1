//! The activity list: owner of the day plan and its execution frontier.
//!
//! [`ActivityList`] holds the ordered activities, the index of the current
//! activity and the storage they are persisted to. Activities before the
//! current index are history and are never touched again; everything at or
//! after it is the future the schedule engine may still move around.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   PlanHandler   │    │  ActivityList   │    │    PlanStore    │
//! │  (start, end,   │───▶│ (activity_ops,  │───▶│ (SQLite via db/)│
//! │   tick, ...)    │    │  execution_ops) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        schedule::recalculate
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for an [`ActivityList`] backed by a SQLite file
//! - [`activity_ops`]: Structural edits (insert, delete, move, field edits)
//! - [`execution_ops`]: Frontier moves, interruptions and archiving
//! - [`transfer`]: JSON import and export of plan snapshots
//!
//! Every mutation builds the next sequence aside, recalculates it, saves it
//! and only then swaps it in. A failed write leaves the list as it was.
//!
//! # Examples
//!
//! ```rust
//! use dayplan_core::{clock::ManualClock, db::Database, models::Activity, ActivityList};
//! use jiff::civil::{date, time};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let clock = ManualClock::new(date(2024, 3, 1).at(7, 0, 0, 0));
//! let mut plan = ActivityList::load(Database::open_in_memory()?, Box::new(clock))?;
//!
//! plan.insert_many(
//!     0,
//!     vec![
//!         Activity::new("Breakfast", 30).fixed_at(time(7, 0, 0, 0)),
//!         Activity::new("Reading", 30),
//!         Activity::new("Work", 0).fixed_at(time(9, 0, 0, 0)),
//!     ],
//! )?;
//! assert_eq!(plan.activities()[1].actual_length, 60);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::{debug, warn};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    clock::Clock,
    db::Database,
    error::Result,
    events::{publish, PlanEvent},
    models::Activity,
    schedule,
    store::PlanStore,
};

pub mod activity_ops;
pub mod builder;
pub mod execution_ops;
pub mod transfer;


pub use builder::PlannerBuilder;
pub use transfer::ImportMode;

/// Ordered day plan with an execution frontier.
pub struct ActivityList<S: PlanStore = Database> {
    activities: Vec<Activity>,
    current_index: usize,
    store: S,
    clock: Box<dyn Clock>,
    events: Option<UnboundedSender<PlanEvent>>,
}

impl<S: PlanStore> ActivityList<S> {
    /// Loads the stored plan and frontier from `store`.
    ///
    /// A stored frontier past the end of the plan is reset to 0. Recorded
    /// lengths are kept for history only; everything from the frontier on is
    /// recalculated.
    pub fn load(store: S, clock: Box<dyn Clock>) -> Result<Self> {
        let mut activities = store.load_sequence()?;
        let mut current_index = store.load_current_index()?;

        if current_index > 0 && current_index >= activities.len() {
            warn!(
                "Stored frontier {current_index} is outside a plan of {} activities, resetting",
                activities.len()
            );
            current_index = 0;
        }

        for activity in activities.iter_mut().skip(current_index) {
            activity.actual_length = 0;
        }
        schedule::recalculate(&mut activities, current_index);

        debug!(
            "Loaded plan with {} activities at frontier {current_index}",
            activities.len()
        );

        Ok(Self {
            activities,
            current_index,
            store,
            clock,
            events: None,
        })
    }

    /// Attaches a channel that receives [`PlanEvent::ActivityListChanged`]
    /// after every recalculation.
    pub fn set_event_sender(&mut self, sender: UnboundedSender<PlanEvent>) {
        self.events = Some(sender);
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Index of the activity in progress, or about to start.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_activity(&self) -> Option<&Activity> {
        self.activities.get(self.current_index)
    }

    /// The activity after the current one, whose start time is the
    /// current activity's deadline.
    pub fn following_activity(&self) -> Option<&Activity> {
        self.activities.get(self.current_index + 1)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn publish(&self, event: PlanEvent) {
        publish(self.events.as_ref(), event);
    }

    /// Recalculates `next` from `current`, persists it and makes it live.
    ///
    /// The frontier is written after the sequence, and only when it moved.
    pub(crate) fn commit(&mut self, mut next: Vec<Activity>, current: usize) -> Result<()> {
        schedule::recalculate(&mut next, current);
        self.store.save_sequence(&next)?;
        if current != self.current_index {
            self.store.save_current_index(current)?;
        }

        self.activities = next;
        self.current_index = current;
        self.publish(PlanEvent::ActivityListChanged);
        Ok(())
    }
}
