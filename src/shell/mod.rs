//! Imperative shell around the pure core.
//!
//! This module owns the side effects: persisted key-value storage, the
//! display sink, and the controller that drives the core from commands.
//!
//! # Key Concepts
//!
//! - **Calculator**: Single owner of buffer, history and theme
//! - **Storage**: Best-effort `KeyValueStore` backends
//! - **Display**: Any `DisplaySink`, including plain closures

mod calculator;
mod display;
mod persist;
mod storage;
mod theme;

pub use calculator::{Calculator, DispatchOutcome, HistoryChange, Step};
pub use display::{DisplaySink, RecordingDisplay};
pub use persist::{erase_history, load_history, load_theme, save_history, save_theme};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use theme::Theme;
