//! Single-number operations.
//!
//! These replace the whole buffer with one result. They parse the
//! buffer as a single operand and never consult the expression
//! evaluator, so `2+3` is not a valid input to any of them.

use super::error::CalcError;
use super::number::{finite, format_number, parse_operand};

/// Unary operations reachable from the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Percentage,
    SquareRoot,
    Square,
    Reciprocal,
}

impl UnaryOp {
    /// Apply the operation to a buffer, producing display text.
    pub fn apply(&self, raw: &str) -> Result<String, CalcError> {
        let value = match self {
            Self::Percentage => percentage(raw)?,
            Self::SquareRoot => square_root(raw)?,
            Self::Square => square(raw)?,
            Self::Reciprocal => reciprocal(raw)?,
        };
        Ok(format_number(value))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::SquareRoot => "square-root",
            Self::Square => "square",
            Self::Reciprocal => "reciprocal",
        }
    }
}

/// `value / 100`.
pub fn percentage(raw: &str) -> Result<f64, CalcError> {
    Ok(parse_operand(raw)? / 100.0)
}

/// Square root; negative operands are rejected.
pub fn square_root(raw: &str) -> Result<f64, CalcError> {
    let value = parse_operand(raw)?;
    if value < 0.0 {
        return Err(CalcError::operand(format!(
            "square root of negative number {}",
            raw
        )));
    }
    Ok(value.sqrt())
}

/// `value^2`.
pub fn square(raw: &str) -> Result<f64, CalcError> {
    let value = parse_operand(raw)?;
    finite(value * value, || {
        CalcError::operand(format!("square of {} overflows", raw))
    })
}

/// `1 / value`; zero is rejected.
pub fn reciprocal(raw: &str) -> Result<f64, CalcError> {
    let value = parse_operand(raw)?;
    if value == 0.0 {
        return Err(CalcError::operand("reciprocal of zero"));
    }
    finite(1.0 / value, || {
        CalcError::operand(format!("reciprocal of {} overflows", raw))
    })
}
