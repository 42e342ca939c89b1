//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::LogEntry;

/// Newtype wrapper for displaying the archived activities of a day.
///
/// # Examples
///
/// ```rust
/// use dayplan_core::{display::LogEntries, models::LogEntry};
/// use jiff::civil::{date, time};
///
/// let entry = LogEntry {
///     date: date(2024, 3, 1),
///     position: 0,
///     start_time: time(7, 0, 0, 0),
///     name: "Breakfast".to_string(),
///     length: 22,
///     actual_length: 31,
///     optimal_length: 21,
///     is_fixed: true,
///     is_rigid: false,
/// };
/// let output = LogEntries(vec![entry]).to_string();
/// assert!(output.contains("| 0 | 07:00 | Breakfast | 22 | 31 | 21 |"));
/// ```
pub struct LogEntries(pub Vec<LogEntry>);

impl LogEntries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.0.iter()
    }

    /// Total recorded minutes.
    pub fn total_actual(&self) -> i64 {
        self.0.iter().map(|e| e.actual_length).sum()
    }
}

impl Index<usize> for LogEntries {
    type Output = LogEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for LogEntries {
    type Item = LogEntry;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogEntries {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for LogEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No archived activities found.");
        }

        writeln!(f, "| # | Start | Name | Length | ActLen | OptLen |")?;
        writeln!(f, "|--:|:-:|:--|--:|--:|--:|")?;
        for entry in &self.0 {
            writeln!(f, "{entry}")?;
        }
        writeln!(f)?;
        writeln!(f, "Total recorded: {} min", self.total_actual())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    fn create_test_entry(position: u32, name: &str, actual_length: i64) -> LogEntry {
        LogEntry {
            date: date(2024, 3, 1),
            position,
            start_time: time(7, 0, 0, 0),
            name: name.to_string(),
            length: 30,
            actual_length,
            optimal_length: 30,
            is_fixed: false,
            is_rigid: false,
        }
    }

    #[test]
    fn test_log_entries_display_empty() {
        assert_eq!(
            LogEntries(vec![]).to_string(),
            "No archived activities found.\n"
        );
    }

    #[test]
    fn test_log_entries_display_sums_actual_lengths() {
        let entries = LogEntries(vec![
            create_test_entry(0, "Breakfast", 31),
            create_test_entry(1, "Reading", 75),
        ]);
        let output = entries.to_string();

        assert!(output.contains("Breakfast"));
        assert!(output.contains("Reading"));
        assert!(output.ends_with("Total recorded: 106 min\n"));
        assert_eq!(entries.len(), 2);
    }
}
