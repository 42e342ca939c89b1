//! Display formatting for plans, log entries and events.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! views over several of them are newtype wrappers. Everything renders as
//! markdown so the CLI can hand it to its terminal renderer unchanged.
//!
//! ## Module Organization
//!
//! - [`plan_table`]: The plan as a table (PlanTable)
//! - [`collections`]: Collection wrapper types (LogEntries)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`time`]: Time-of-day and countdown formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod models;
pub mod plan_table;
pub mod status;
pub mod time;

pub use collections::LogEntries;
pub use plan_table::PlanTable;
pub use status::{OperationStatus, StatusKind};
pub use time::{ClockTime, Countdown};
