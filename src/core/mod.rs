//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The expression buffer and its guarded edits
//! - Expression evaluation and single-number operations
//! - Immutable, bounded history
//! - Commands from buttons and keys
//!
//! Nothing here touches storage or the display; every operation maps
//! an input value to an output value.

mod buffer;
mod command;
mod error;
mod expr;
mod guard;
mod history;
mod number;
mod state;
mod token;
mod unary;

pub use buffer::{ExpressionBuffer, RejectedEdit};
pub use command::Command;
pub use error::CalcError;
pub use expr::{evaluate, evaluate_to_string};
pub use guard::InputGuard;
pub use history::{HistoryEntry, HistoryLog, MalformedRow, DEFAULT_CAPACITY};
pub use number::{format_number, parse_operand};
pub use state::{InputState, ERROR_SENTINEL};
pub use token::{is_operator, Digit, InputToken, Operator};
pub use unary::{percentage, reciprocal, square, square_root, UnaryOp};
