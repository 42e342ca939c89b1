//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
    Failure,
}

impl StatusKind {
    fn prefix(&self) -> &'static str {
        match self {
            StatusKind::Success => "Success:",
            StatusKind::Warning => "Warning:",
            StatusKind::Failure => "Error:",
        }
    }
}

/// One line of feedback after a command, e.g. "Success: Added 'Lunch'".
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    /// The operation went through but left something worth a look.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Warning,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Failure,
        }
    }

    /// Warning for fixed activities that start before an earlier boundary,
    /// `None` when there are none.
    pub fn fixed_order(violations: &[usize]) -> Option<Self> {
        if violations.is_empty() {
            return None;
        }
        let rows: Vec<String> = violations.iter().map(ToString::to_string).collect();
        Some(Self::warning(format!(
            "Fixed activities out of chronological order at rows {}; lengths before them will be zero or negative",
            rows.join(", ")
        )))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.kind.prefix(), self.message)
    }
}
