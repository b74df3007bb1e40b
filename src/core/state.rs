//! States of the input state machine.

use serde::{Deserialize, Serialize};

/// Literal shown on the display when a calculation fails.
pub const ERROR_SENTINEL: &str = "Error";

/// Position of the input state machine.
///
/// The machine is `Editing` while the buffer holds zero or more valid
/// characters, and `Error` once a calculation failed. Any new input
/// token leaves `Error` by clearing the buffer first.
///
/// # Example
///
/// ```rust
/// use reckon::core::InputState;
///
/// assert_eq!(InputState::Editing.name(), "Editing");
/// assert!(InputState::Error.is_error());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputState {
    #[default]
    Editing,
    Error,
}

impl InputState {
    /// Name of the state for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Error => "Error",
        }
    }

    /// Check if this is the error state.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}
