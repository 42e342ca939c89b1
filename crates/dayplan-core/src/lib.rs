//! Core library for the dayplan day planner.
//!
//! A day plan is an ordered list of activities with planned lengths. Some are
//! pinned to a clock time ("fixed"), some may not be stretched or squeezed
//! ("rigid"). While the day runs, the time actually spent is fed back and every
//! activity that has not started yet is rescheduled so the plan still meets
//! its fixed points.
//!
//! The crate is organized bottom-up:
//!
//! - [`models`]: The [`Activity`] value type and its field accessors
//! - [`schedule`]: The pure recalculation engine
//! - [`planner`]: [`ActivityList`], which owns the plan and its frontier
//! - [`handler`]: [`PlanHandler`], the start/end/interrupt state machine
//! - [`db`] and [`store`]: SQLite persistence behind the [`PlanStore`] trait
//! - [`display`]: Markdown formatting for the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use dayplan_core::{clock::ManualClock, params::NewActivity, PlanHandler, PlannerBuilder};
//! use jiff::civil::{date, time};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::tempdir()?;
//! # let path = Some(dir.path().join("dayplan.db"));
//! let clock = ManualClock::new(date(2024, 3, 1).at(9, 0, 0, 0));
//! let mut plan = PlannerBuilder::new()
//!     .with_database_path(path)
//!     .with_clock(clock.clone())
//!     .build()?;
//!
//! plan.add_activity(&NewActivity {
//!     name: "Writing".to_string(),
//!     length: 120,
//!     start_time: Some(time(9, 0, 0, 0)),
//!     is_fixed: true,
//!     ..Default::default()
//! })?;
//! plan.add_activity(&NewActivity {
//!     name: "Lunch".to_string(),
//!     length: 45,
//!     start_time: Some(time(12, 0, 0, 0)),
//!     is_fixed: true,
//!     ..Default::default()
//! })?;
//! // Lands in front of Lunch, the current end of the plan
//! plan.add_activity(&NewActivity {
//!     name: "Email".to_string(),
//!     length: 60,
//!     ..Default::default()
//! })?;
//! assert_eq!(plan.activities()[1].name, "Email");
//!
//! let (mut handler, _events) = PlanHandler::new(plan);
//! handler.start(false)?;
//! clock.advance_minutes(90);
//! handler.end(false)?;
//! assert_eq!(handler.list().activities()[0].actual_length, 90);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod clock;
pub mod db;
pub mod display;
pub mod error;
pub mod events;
pub mod handler;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;
pub mod store;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use db::Database;
pub use display::{ClockTime, Countdown, LogEntries, OperationStatus, PlanTable};
pub use error::{PlannerError, Result};
pub use events::PlanEvent;
pub use handler::{HandlerState, PlanHandler, TICK_INTERVAL};
pub use models::{Activity, ActivityField, ActivityId, ActivityRecord, FieldValue, LogEntry};
pub use params::{EditField, ExportPlan, ImportPlan, NewActivity};
pub use planner::{transfer::ImportSummary, ActivityList, ImportMode, PlannerBuilder};
pub use store::PlanStore;
