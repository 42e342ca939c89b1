//! Column-style access to activity fields.
//!
//! The table view addresses activities by `(row, field)`. Fields form a closed
//! set, so reads and writes are a `match` rather than a lookup by name.

use std::{fmt, str::FromStr};

use jiff::civil::Time;

use super::Activity;
use crate::{
    clock::truncate_to_minute,
    error::{PlannerError, Result},
};

/// Every field an activity exposes, in table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityField {
    IsFixed,
    IsRigid,
    StartTime,
    Name,
    Length,
    ActualLength,
    OptimalLength,
    Percent,
}

impl ActivityField {
    /// All fields in column order.
    pub const ALL: [ActivityField; 8] = [
        ActivityField::IsFixed,
        ActivityField::IsRigid,
        ActivityField::StartTime,
        ActivityField::Name,
        ActivityField::Length,
        ActivityField::ActualLength,
        ActivityField::OptimalLength,
        ActivityField::Percent,
    ];

    /// Short column header.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityField::IsFixed => "F",
            ActivityField::IsRigid => "R",
            ActivityField::StartTime => "Start",
            ActivityField::Name => "Name",
            ActivityField::Length => "Length",
            ActivityField::ActualLength => "ActLen",
            ActivityField::OptimalLength => "OptLen",
            ActivityField::Percent => "Percent",
        }
    }

    /// Whether a user may edit this field (derived fields may not).
    pub fn is_user_editable(&self) -> bool {
        matches!(
            self,
            ActivityField::IsFixed
                | ActivityField::IsRigid
                | ActivityField::StartTime
                | ActivityField::Name
                | ActivityField::Length
        )
    }

    /// Parses a textual value into the type this field holds.
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue> {
        let invalid = |reason: String| PlannerError::invalid_input(self.label()).with_reason(reason);
        match self {
            ActivityField::IsFixed | ActivityField::IsRigid => {
                match raw.to_lowercase().as_str() {
                    "true" | "yes" | "1" => Ok(FieldValue::Bool(true)),
                    "false" | "no" | "0" => Ok(FieldValue::Bool(false)),
                    _ => Err(invalid(format!("expected a boolean, got '{raw}'"))),
                }
            }
            ActivityField::StartTime => Time::strptime("%H:%M", raw)
                .map(FieldValue::Time)
                .map_err(|e| invalid(format!("expected HH:MM, got '{raw}': {e}"))),
            ActivityField::Name => Ok(FieldValue::Text(raw.to_string())),
            ActivityField::Length | ActivityField::ActualLength | ActivityField::OptimalLength => raw
                .parse::<i64>()
                .map(FieldValue::Minutes)
                .map_err(|e| invalid(format!("expected whole minutes, got '{raw}': {e}"))),
            ActivityField::Percent => raw
                .parse::<f64>()
                .map(FieldValue::Ratio)
                .map_err(|e| invalid(format!("expected a ratio, got '{raw}': {e}"))),
        }
    }
}

impl FromStr for ActivityField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "f" | "fixed" | "is_fixed" => Ok(ActivityField::IsFixed),
            "r" | "rigid" | "is_rigid" => Ok(ActivityField::IsRigid),
            "start" | "start_time" => Ok(ActivityField::StartTime),
            "name" => Ok(ActivityField::Name),
            "length" | "len" => Ok(ActivityField::Length),
            "actlen" | "actual_length" => Ok(ActivityField::ActualLength),
            "optlen" | "optimal_length" => Ok(ActivityField::OptimalLength),
            "percent" => Ok(ActivityField::Percent),
            _ => Err(format!("Unknown activity field: {s}")),
        }
    }
}

impl fmt::Display for ActivityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Value held by a single activity field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Time(Time),
    Text(String),
    Minutes(i64),
    Ratio(f64),
}

impl Activity {
    /// Reads the value of `field`.
    pub fn field(&self, field: ActivityField) -> FieldValue {
        match field {
            ActivityField::IsFixed => FieldValue::Bool(self.is_fixed),
            ActivityField::IsRigid => FieldValue::Bool(self.is_rigid),
            ActivityField::StartTime => FieldValue::Time(self.start_time),
            ActivityField::Name => FieldValue::Text(self.name.clone()),
            ActivityField::Length => FieldValue::Minutes(self.length),
            ActivityField::ActualLength => FieldValue::Minutes(self.actual_length),
            ActivityField::OptimalLength => FieldValue::Minutes(self.optimal_length),
            ActivityField::Percent => FieldValue::Ratio(self.percent()),
        }
    }

    /// Writes `value` into `field`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the value has the wrong type
    /// for the field, when a length is negative, or when the field is the
    /// computed percentage.
    pub fn set_field(&mut self, field: ActivityField, value: FieldValue) -> Result<()> {
        match (field, value) {
            (ActivityField::IsFixed, FieldValue::Bool(v)) => self.is_fixed = v,
            (ActivityField::IsRigid, FieldValue::Bool(v)) => self.is_rigid = v,
            (ActivityField::StartTime, FieldValue::Time(v)) => {
                self.start_time = truncate_to_minute(v)
            }
            (ActivityField::Name, FieldValue::Text(v)) => self.name = v,
            (ActivityField::Length, FieldValue::Minutes(v)) => {
                if v < 0 {
                    return Err(PlannerError::invalid_input(field.label())
                        .with_reason(format!("length must not be negative, got {v}")));
                }
                self.length = v;
            }
            (ActivityField::ActualLength, FieldValue::Minutes(v)) => self.actual_length = v,
            (ActivityField::OptimalLength, FieldValue::Minutes(v)) => self.optimal_length = v,
            (ActivityField::Percent, _) => {
                return Err(PlannerError::invalid_input(field.label())
                    .with_reason("percent is computed and cannot be set"));
            }
            (field, value) => {
                return Err(PlannerError::invalid_input(field.label())
                    .with_reason(format!("value {value:?} has the wrong type")));
            }
        }
        Ok(())
    }
}
