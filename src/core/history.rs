//! Calculation history.
//!
//! Provides an immutable, capacity-bounded log of completed
//! evaluations, most recent first.

use super::buffer::ExpressionBuffer;
use super::number::parse_operand;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

/// Number of entries kept unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

const SEPARATOR: &str = " = ";

/// Record of a single successful evaluation.
///
/// # Example
///
/// ```rust
/// use reckon::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("2+2", "4");
/// assert_eq!(entry.to_string(), "2+2 = 4");
/// assert_eq!(HistoryEntry::parse("2+2 = 4"), Some(entry));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as typed
    pub expression: String,
    /// The rendered result
    pub result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// Parse a persisted `"<expression> = <result>"` row.
    ///
    /// Splits on the first separator. The expression must be one the
    /// keypad could have typed and the result a plain number, since it
    /// is fed back into the buffer by `select`.
    pub fn parse(row: &str) -> Option<Self> {
        let (expression, result) = row.split_once(SEPARATOR)?;
        let typed = !expression.is_empty()
            && ExpressionBuffer::parse(expression).is_some_and(|b| !b.state().is_error());

        (typed && parse_operand(result).is_ok()).then(|| Self::new(expression, result))
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.expression, SEPARATOR, self.result)
    }
}

/// A persisted row that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("history row {index} is malformed: '{row}'")]
pub struct MalformedRow {
    /// Position of the row, newest first
    pub index: usize,
    pub row: String,
}

/// Ordered, bounded history of evaluations.
///
/// History is immutable - `record` and `clear` return a new log,
/// leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use reckon::core::{HistoryEntry, HistoryLog};
///
/// let log = HistoryLog::new()
///     .record(HistoryEntry::new("1+1", "2"))
///     .record(HistoryEntry::new("2*3", "6"));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.entries()[0].expression, "2*3");
/// assert_eq!(log.select(1), Some("2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create an empty log with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty log holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild a log from persisted rows, newest first.
    ///
    /// Fails on the first malformed row. Rows beyond capacity are
    /// dropped from the old end.
    pub fn from_rows<I, R>(rows: I, capacity: usize) -> Result<Self, MalformedRow>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        let mut entries = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let row = row.as_ref();
                HistoryEntry::parse(row).ok_or_else(|| MalformedRow {
                    index,
                    row: row.to_string(),
                })
            })
            .collect::<Result<VecDeque<_>, _>>()?;
        entries.truncate(capacity);
        Ok(Self { entries, capacity })
    }

    /// Persisted form: one `"<expression> = <result>"` row per entry.
    pub fn to_rows(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Record an entry at the front, returning a new log.
    ///
    /// When the log is full the oldest entry is evicted.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push_front(entry);
        entries.truncate(self.capacity);
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// An empty log with the same capacity.
    pub fn clear(&self) -> Self {
        Self::with_capacity(self.capacity)
    }

    /// Result of the entry at `index`, used to re-seed the buffer.
    pub fn select(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.result.as_str())
    }

    /// Get all entries, newest first.
    pub fn entries(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> HistoryEntry {
        HistoryEntry::new(format!("{}+0", i), i.to_string())
    }

    fn full_log() -> HistoryLog {
        (0..DEFAULT_CAPACITY).fold(HistoryLog::new(), |log, i| log.record(entry(i)))
    }

    #[test]
    fn new_history_is_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), DEFAULT_CAPACITY);
        assert_eq!(log.select(0), None);
    }

    #[test]
    fn record_prepends() {
        let log = HistoryLog::new().record(entry(1)).record(entry(2));

        assert_eq!(log.entries()[0], entry(2));
        assert_eq!(log.entries()[1], entry(1));
    }

    #[test]
    fn record_is_immutable() {
        let log = HistoryLog::new();
        let new_log = log.record(entry(1));

        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn record_on_full_log_evicts_oldest() {
        let log = full_log();
        assert_eq!(log.len(), 10);
        assert_eq!(log.entries().back(), Some(&entry(0)));

        let log = log.record(entry(99));

        assert_eq!(log.len(), 10);
        assert_eq!(log.entries().front(), Some(&entry(99)));
        assert_eq!(log.entries().back(), Some(&entry(1)));
        assert!(!log.entries().contains(&entry(0)));
    }

    #[test]
    fn clear_keeps_capacity() {
        let log = HistoryLog::with_capacity(3).record(entry(1)).clear();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), 3);
    }

    #[test]
    fn select_returns_result_not_expression() {
        let log = HistoryLog::new().record(HistoryEntry::new("2+2", "4"));
        assert_eq!(log.select(0), Some("4"));
        assert_eq!(log.select(1), None);
    }

    #[test]
    fn entry_parses_typed_expression_and_number() {
        let entry = HistoryEntry::parse("-3*1.5 = -4.5").unwrap();
        assert_eq!(entry.expression, "-3*1.5");
        assert_eq!(entry.result, "-4.5");
        assert_eq!(HistoryEntry::parse("2+2=4"), None);
    }

    #[test]
    fn entry_rejects_foreign_text() {
        for row in ["x = rm -rf", "1+1 = two", "a = b = c", "1 = 1 = 1", " = 4", "Error = 4", "2+2 = Error"] {
            assert_eq!(HistoryEntry::parse(row), None, "row '{}'", row);
        }
    }

    #[test]
    fn rows_round_trip() {
        let log = HistoryLog::new()
            .record(HistoryEntry::new("1+1", "2"))
            .record(HistoryEntry::new("5/2", "2.5"));

        let rows = log.to_rows();
        assert_eq!(rows, vec!["5/2 = 2.5".to_string(), "1+1 = 2".to_string()]);
        assert_eq!(HistoryLog::from_rows(&rows, DEFAULT_CAPACITY), Ok(log));
    }

    #[test]
    fn from_rows_reports_first_malformed_row() {
        assert_eq!(
            HistoryLog::from_rows(["1+1 = 2", "garbage", "x = rm -rf"], 10),
            Err(MalformedRow {
                index: 1,
                row: "garbage".to_string()
            })
        );
        assert_eq!(
            HistoryLog::from_rows(["x = rm -rf"], 10).unwrap_err().index,
            0
        );
    }

    #[test]
    fn from_rows_truncates_to_capacity() {
        let rows: Vec<String> = (0..15).map(|i| entry(i).to_string()).collect();
        let log = HistoryLog::from_rows(&rows, 10).unwrap();

        assert_eq!(log.len(), 10);
        assert_eq!(log.entries()[0], entry(0));
        assert_eq!(log.entries()[9], entry(9));
    }
}
