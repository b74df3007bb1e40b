//! Reckon: a pure functional calculator core
//!
//! Reckon follows a "pure core, imperative shell" layout. The core
//! (expression buffer, evaluator, history) is made of pure functions
//! with no side effects, while storage and display live in the shell
//! behind small traits.
//!
//! # Core Concepts
//!
//! - **Buffer**: The in-progress expression, edited through guards
//! - **Evaluation**: A recursive-descent parser over `+ - * /`
//! - **History**: An immutable, bounded log of completed evaluations
//! - **Calculator**: The controller that dispatches commands and persists state
//!
//! # Example
//!
//! ```rust
//! use reckon::core::Command;
//! use reckon::shell::{Calculator, MemoryStore, RecordingDisplay};
//!
//! let mut calc = Calculator::with_defaults(MemoryStore::new(), RecordingDisplay::new());
//!
//! for key in ["5", "/", "0", "Enter"] {
//!     calc.dispatch(Command::from_key(key).unwrap());
//! }
//! assert_eq!(calc.display().current(), Some("Error"));
//! assert!(calc.history().is_empty());
//!
//! // Any new input clears the error.
//! calc.dispatch(Command::from_key("7").unwrap());
//! assert_eq!(calc.display().current(), Some("7"));
//! ```

pub mod config;
pub mod core;
pub mod shell;
pub mod snapshot;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use crate::core::{CalcError, Command, ExpressionBuffer, HistoryEntry, HistoryLog, InputToken};
pub use shell::{Calculator, DisplaySink, FileStore, KeyValueStore, MemoryStore};
pub use snapshot::SessionSnapshot;
