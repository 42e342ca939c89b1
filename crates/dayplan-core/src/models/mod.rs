//! Data models for day plans.
//!
//! This module contains the domain types of the planner: the [`Activity`]
//! value type, the closed set of [`ActivityField`]s used for column-style
//! access, the [`ActivityRecord`] snapshot format used by import and export,
//! and the [`LogEntry`] rows written when a day is archived. Display
//! implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use dayplan_core::models::{Activity, ActivityField, FieldValue};
//! use jiff::civil::time;
//!
//! let mut breakfast = Activity::new("Breakfast", 30).fixed_at(time(7, 0, 0, 0));
//! breakfast.actual_length = 45;
//! assert_eq!(breakfast.percent(), 1.5);
//!
//! breakfast
//!     .set_field(ActivityField::Name, FieldValue::Text("Brunch".into()))
//!     .unwrap();
//! assert_eq!(breakfast.name, "Brunch");
//! ```

pub mod activity;
pub mod field;
pub mod log;
pub mod record;


pub use activity::{Activity, ActivityId};
pub use field::{ActivityField, FieldValue};
pub use log::LogEntry;
pub use record::ActivityRecord;
