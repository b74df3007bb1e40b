//! The expression buffer and its edit operations.
//!
//! Every operation is pure: it takes the current buffer by reference and
//! returns the next one, leaving the original untouched.

use super::error::CalcError;
use super::guard::InputGuard;
use super::state::{InputState, ERROR_SENTINEL};
use super::token::{is_operator, InputToken};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An edit refused by one of the input guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RejectedEdit {
    /// Name of the guard that refused the edit.
    pub guard: &'static str,
    pub token: InputToken,
}

/// The in-progress expression shown on the display.
///
/// # Example
///
/// ```rust
/// use reckon::core::{ExpressionBuffer, InputToken, Operator};
///
/// let two = InputToken::digit(2).unwrap();
/// let buffer = ExpressionBuffer::new()
///     .append(two)
///     .append(InputToken::Operator(Operator::Add))
///     .append(two);
///
/// assert_eq!(buffer.as_str(), "2+2");
/// assert_eq!(buffer.backspace().as_str(), "2+");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionBuffer {
    text: String,
    state: InputState,
}

impl ExpressionBuffer {
    /// Create an empty buffer in the `Editing` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding the error sentinel.
    pub fn error() -> Self {
        Self {
            text: String::new(),
            state: InputState::Error,
        }
    }

    /// Wrap an existing display value, such as a prior result or a
    /// restored session.
    ///
    /// The literal `"Error"` yields the error state. Any other text must
    /// be something typed tokens could have produced: only `0-9 . + - * /`,
    /// with at most one `.` per numeric run. Anything else is `None`.
    ///
    /// ```rust
    /// use reckon::core::ExpressionBuffer;
    ///
    /// assert_eq!(ExpressionBuffer::parse("1.5+2").unwrap().as_str(), "1.5+2");
    /// assert!(ExpressionBuffer::parse("Error").unwrap().state().is_error());
    /// assert_eq!(ExpressionBuffer::parse("rm -rf"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == ERROR_SENTINEL {
            return Some(Self::error());
        }

        let alphabet = raw
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || is_operator(c));
        let single_decimals = raw.split(is_operator).all(|run| run.matches('.').count() <= 1);

        (alphabet && single_decimals).then(|| Self {
            text: raw.to_string(),
            state: InputState::Editing,
        })
    }

    /// Collapse a calculation outcome into the next buffer.
    ///
    /// This is the only place a `CalcError` turns into the sentinel. A
    /// value that is not a number shows the sentinel too.
    pub fn from_outcome(outcome: &Result<String, CalcError>) -> Self {
        match outcome {
            Ok(value) => Self::parse(value).unwrap_or_else(Self::error),
            Err(_) => Self::error(),
        }
    }

    /// Current state of the machine.
    pub fn state(&self) -> InputState {
        self.state
    }

    /// Text to render; the sentinel while in the error state.
    pub fn as_str(&self) -> &str {
        match self.state {
            InputState::Editing => &self.text,
            InputState::Error => ERROR_SENTINEL,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state == InputState::Editing && self.text.is_empty()
    }

    /// The operand currently being typed: everything after the last
    /// operator, or the whole buffer if there is none.
    pub fn numeric_run(&self) -> &str {
        let text = self.as_str();
        match text.rfind(is_operator) {
            Some(idx) => &text[idx + 1..],
            None => text,
        }
    }

    /// Append a token through the default guards.
    ///
    /// A refused edit leaves the buffer as it was.
    pub fn append(&self, token: InputToken) -> Self {
        self.append_guarded(token, &InputGuard::defaults())
            .unwrap_or_else(|_| self.clone())
    }

    /// Append a token if every guard allows it.
    ///
    /// The error state is cleared before the guards run, so input after
    /// a failed calculation always starts a fresh expression.
    pub fn append_guarded(
        &self,
        token: InputToken,
        guards: &[InputGuard],
    ) -> Result<Self, RejectedEdit> {
        let base = match self.state {
            InputState::Error => Self::new(),
            InputState::Editing => self.clone(),
        };

        if let Some(guard) = guards.iter().find(|g| !g.allows(&base, &token)) {
            return Err(RejectedEdit {
                guard: guard.name(),
                token,
            });
        }

        let mut text = base.text;
        text.push_str(token.as_str());
        Ok(Self {
            text,
            state: InputState::Editing,
        })
    }

    /// Remove the last character. Empty stays empty, and the error
    /// state backs out to an empty buffer.
    pub fn backspace(&self) -> Self {
        match self.state {
            InputState::Error => Self::new(),
            InputState::Editing => {
                let mut text = self.text.clone();
                text.pop();
                Self {
                    text,
                    state: InputState::Editing,
                }
            }
        }
    }

    /// Empty buffer, unconditionally.
    pub fn clear(&self) -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpressionBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> InputToken {
        InputToken::digit(d).unwrap()
    }

    fn typed(input: &[&str]) -> ExpressionBuffer {
        input.iter().fold(ExpressionBuffer::new(), |buf, raw| {
            buf.append(InputToken::parse(raw).unwrap())
        })
    }

    #[test]
    fn new_buffer_is_empty_and_editing() {
        let buffer = ExpressionBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_str(), "");
        assert_eq!(buffer.state(), InputState::Editing);
    }

    #[test]
    fn append_concatenates_tokens() {
        assert_eq!(typed(&["1", "2", ".", "5", "*", "3"]).as_str(), "12.5*3");
    }

    #[test]
    fn append_is_immutable() {
        let buffer = typed(&["4"]);
        let next = buffer.append(digit(2));

        assert_eq!(buffer.as_str(), "4");
        assert_eq!(next.as_str(), "42");
    }

    #[test]
    fn leading_zero_guard_holds() {
        let zero = typed(&["0"]);
        assert_eq!(zero.append(digit(0)).as_str(), "0");
        assert_eq!(zero.append(InputToken::DoubleZero).as_str(), "0");
        assert_eq!(zero.append(digit(7)).as_str(), "07");
    }

    #[test]
    fn double_zero_on_empty_buffer_is_allowed() {
        assert_eq!(typed(&["00"]).as_str(), "00");
    }

    #[test]
    fn second_decimal_in_run_is_ignored() {
        assert_eq!(typed(&["1", ".", "2", "."]).as_str(), "1.2");
        assert_eq!(typed(&["1", ".", "2", "+", ".", "5", "."]).as_str(), "1.2+.5");
    }

    #[test]
    fn append_guarded_reports_the_refusing_guard() {
        let buffer = typed(&["3", ".", "1"]);
        let rejected = buffer
            .append_guarded(InputToken::Decimal, &InputGuard::defaults())
            .unwrap_err();

        assert_eq!(rejected.guard, "single-decimal");
        assert_eq!(rejected.token, InputToken::Decimal);
    }

    #[test]
    fn input_after_error_starts_fresh() {
        let buffer = ExpressionBuffer::error().append(digit(9));
        assert_eq!(buffer.as_str(), "9");
        assert_eq!(buffer.state(), InputState::Editing);

        let zero = ExpressionBuffer::error().append(digit(0));
        assert_eq!(zero.as_str(), "0");
    }

    #[test]
    fn backspace_removes_last_character() {
        assert_eq!(typed(&["1", "+", "2"]).backspace().as_str(), "1+");
        assert_eq!(ExpressionBuffer::new().backspace().as_str(), "");
    }

    #[test]
    fn backspace_leaves_error_state() {
        let buffer = ExpressionBuffer::error().backspace();
        assert!(buffer.is_empty());
        assert_eq!(buffer.state(), InputState::Editing);
    }

    #[test]
    fn clear_always_empties() {
        assert!(typed(&["1", "2"]).clear().is_empty());
        assert!(ExpressionBuffer::error().clear().is_empty());
    }

    #[test]
    fn numeric_run_follows_last_operator() {
        assert_eq!(typed(&["1", "2"]).numeric_run(), "12");
        assert_eq!(typed(&["1", "+", "2", ".", "5"]).numeric_run(), "2.5");
        assert_eq!(typed(&["1", "*"]).numeric_run(), "");
    }

    #[test]
    fn from_outcome_collapses_errors_to_sentinel() {
        let ok = ExpressionBuffer::from_outcome(&Ok("4".to_string()));
        assert_eq!(ok.as_str(), "4");

        let err = ExpressionBuffer::from_outcome(&Err(CalcError::expression("bad")));
        assert_eq!(err.as_str(), ERROR_SENTINEL);
        assert!(err.state().is_error());

        let foreign = ExpressionBuffer::from_outcome(&Ok("NaN".to_string()));
        assert!(foreign.state().is_error());
    }

    #[test]
    fn parse_recognises_sentinel() {
        assert!(ExpressionBuffer::parse("Error").unwrap().state().is_error());
        assert_eq!(ExpressionBuffer::parse("0.5").unwrap().as_str(), "0.5");
        assert_eq!(ExpressionBuffer::parse("-2.5*3").unwrap().as_str(), "-2.5*3");
        assert!(ExpressionBuffer::parse("").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_text_tokens_cannot_produce() {
        for raw in ["hello world", "rm -rf", "2 + 2", "1e5", "Erro", "error", "1.2.3", "1+2.3.4", "√4"] {
            assert_eq!(ExpressionBuffer::parse(raw), None, "raw '{}'", raw);
        }
    }
}
