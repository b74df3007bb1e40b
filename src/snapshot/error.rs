//! Snapshot error types.

use thiserror::Error;

/// Errors raised while encoding, decoding or restoring a session snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Could not encode snapshot as {format}: {reason}")]
    Encode { format: &'static str, reason: String },

    #[error("Could not decode {format} snapshot: {reason}")]
    Decode { format: &'static str, reason: String },

    /// Snapshot written by an incompatible version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("History row {index} is malformed: '{row}'")]
    MalformedHistory { index: usize, row: String },

    /// Buffer text the keypad could never have produced
    #[error("Snapshot buffer '{buffer}' is not a valid expression")]
    InvalidBuffer { buffer: String },

    #[error("Snapshot holds {len} history rows but capacity is {capacity}")]
    HistoryTooLong { len: usize, capacity: usize },
}
