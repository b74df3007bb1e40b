//! Save and restore a whole calculator session.
//!
//! A snapshot captures the buffer, history rows and theme so a session
//! can be moved between hosts or resumed after a restart. Snapshots are
//! versioned and validated before anything is replaced.

use crate::core::{ExpressionBuffer, HistoryLog};
use crate::shell::{Calculator, DisplaySink, KeyValueStore, Theme};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a calculator session.
///
/// # Example
///
/// ```rust
/// use reckon::core::Command;
/// use reckon::shell::{Calculator, MemoryStore, RecordingDisplay};
/// use reckon::snapshot::SessionSnapshot;
///
/// let mut calc = Calculator::with_defaults(MemoryStore::new(), RecordingDisplay::new());
/// for key in ["3", "*", "3", "Enter"] {
///     calc.dispatch(Command::from_key(key).unwrap());
/// }
///
/// let json = calc.snapshot().to_json().unwrap();
///
/// let mut other = Calculator::with_defaults(MemoryStore::new(), RecordingDisplay::new());
/// other.restore(&SessionSnapshot::from_json(&json).unwrap()).unwrap();
/// assert_eq!(other.buffer().as_str(), "9");
/// assert_eq!(other.history().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Display value at the time of the snapshot
    pub buffer: String,

    /// History rows, newest first
    pub history: Vec<String>,

    pub theme: Theme,
}

impl SessionSnapshot {
    /// Capture the given session state.
    pub fn capture(buffer: &ExpressionBuffer, history: &HistoryLog, theme: Theme) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            buffer: buffer.as_str().to_string(),
            history: history.to_rows(),
            theme,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Encode {
            format: "json",
            reason: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Decode {
            format: "json",
            reason: e.to_string(),
        })
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encode {
            format: "binary",
            reason: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode {
            format: "binary",
            reason: e.to_string(),
        })
    }

    /// Check the version and rebuild the history log.
    pub fn history_log(&self, capacity: usize) -> Result<HistoryLog, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        if self.history.len() > capacity {
            return Err(SnapshotError::HistoryTooLong {
                len: self.history.len(),
                capacity,
            });
        }

        HistoryLog::from_rows(&self.history, capacity)
            .map_err(|e| SnapshotError::MalformedHistory { index: e.index, row: e.row })
    }

    /// Rebuild the expression buffer.
    ///
    /// Only text the keypad could have typed, or the error sentinel, is
    /// accepted.
    pub fn expression_buffer(&self) -> Result<ExpressionBuffer, SnapshotError> {
        ExpressionBuffer::parse(&self.buffer).ok_or_else(|| SnapshotError::InvalidBuffer {
            buffer: self.buffer.clone(),
        })
    }
}

impl<K: KeyValueStore, D: DisplaySink> Calculator<K, D> {
    /// Capture the current session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self.buffer(), self.history(), self.theme())
    }

    /// Replace the session with a snapshot, persisting and re-rendering.
    ///
    /// Nothing changes if the snapshot fails validation.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> Result<(), SnapshotError> {
        let history = snapshot.history_log(self.config().history_capacity)?;
        let buffer = snapshot.expression_buffer()?;
        debug!(
            id = %snapshot.id,
            entries = history.len(),
            "restoring session snapshot"
        );
        self.replace_session(buffer, history, snapshot.theme);
        Ok(())
    }
}
