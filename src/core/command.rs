//! Discrete commands and the mapping from both input sources.
//!
//! Buttons and keys are translated here into one `Command` type so the
//! controller has a single dispatch path for both.

use super::token::InputToken;

/// One user interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Append a digit, `00`, decimal point or operator.
    Input(InputToken),
    Clear,
    Backspace,
    Evaluate,
    Percentage,
    SquareRoot,
    Square,
    Reciprocal,
    /// Re-seed the buffer with the result of a history row.
    SelectHistory(usize),
    ClearHistory,
    ToggleTheme,
}

impl Command {
    /// Map a keyboard key name to a command.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::core::{Command, InputToken};
    ///
    /// assert_eq!(Command::from_key("7"), InputToken::digit(7).map(Command::Input));
    /// assert_eq!(Command::from_key("Enter"), Some(Command::Evaluate));
    /// assert_eq!(Command::from_key("Tab"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Evaluate),
            "Backspace" => Some(Self::Backspace),
            "Escape" => Some(Self::Clear),
            "%" => Some(Self::Percentage),
            // "00" is a button, not a key
            "00" => None,
            other => InputToken::parse(other).map(Self::Input),
        }
    }

    /// Map a button's `data-value` / `data-action` attributes to a command.
    ///
    /// An action takes priority over a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::core::{Command, InputToken};
    ///
    /// assert_eq!(Command::from_button(None, Some("power")), Some(Command::Square));
    /// assert_eq!(Command::from_button(Some("00"), None), Some(Command::Input(InputToken::DoubleZero)));
    /// assert_eq!(Command::from_button(Some("%"), None), Some(Command::Percentage));
    /// ```
    pub fn from_button(value: Option<&str>, action: Option<&str>) -> Option<Self> {
        if let Some(action) = action {
            return match action {
                "clear" => Some(Self::Clear),
                "delete" => Some(Self::Backspace),
                "calculate" => Some(Self::Evaluate),
                "sqrt" => Some(Self::SquareRoot),
                "power" => Some(Self::Square),
                "reciprocal" => Some(Self::Reciprocal),
                _ => None,
            };
        }

        match value? {
            "%" => Some(Self::Percentage),
            other => InputToken::parse(other).map(Self::Input),
        }
    }
}
