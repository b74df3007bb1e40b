//! Calculation error types.

use thiserror::Error;

/// Errors produced by the pure calculation core.
///
/// Both variants surface identically on the display as the `"Error"`
/// sentinel; the distinction is kept internally so callers and tests
/// can tell a malformed expression from a bad operand.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    /// The buffer could not be parsed or evaluated as an expression.
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// The buffer is not a usable operand for a single-number operation.
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),
}

impl CalcError {
    pub(crate) fn expression(reason: impl Into<String>) -> Self {
        Self::InvalidExpression(reason.into())
    }

    pub(crate) fn operand(reason: impl Into<String>) -> Self {
        Self::InvalidOperand(reason.into())
    }
}
