//! Validated input tokens for the expression buffer.

use serde::{Deserialize, Serialize};
use std::fmt;

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Check whether a character is one of the four binary operators.
pub fn is_operator(ch: char) -> bool {
    Operator::from_char(ch).is_some()
}

/// One of the four binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in display order.
    pub const ALL: [Operator; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// `*` and `/` bind tighter than `+` and `-`.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Apply the operator to two operands, without any range check.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single decimal digit, `0` through `9`.
///
/// The value can only be set through [`Digit::new`], so it is always in
/// range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Returns `None` for values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_str(self) -> &'static str {
        DIGITS[usize::from(self.0)]
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{} is not a decimal digit", value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// A single edit that can be appended to an expression buffer.
///
/// Tokens are validated on construction, so a buffer built only from
/// tokens can never contain characters outside `0-9 . + - * /`.
///
/// # Example
///
/// ```rust
/// use reckon::core::{InputToken, Operator};
///
/// assert_eq!(InputToken::parse("7"), InputToken::digit(7));
/// assert_eq!(InputToken::parse("00"), Some(InputToken::DoubleZero));
/// assert_eq!(InputToken::parse("*"), Some(InputToken::Operator(Operator::Mul)));
/// assert_eq!(InputToken::parse("x"), None);
/// assert_eq!(InputToken::digit(10), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputToken {
    Digit(Digit),
    DoubleZero,
    Decimal,
    Operator(Operator),
}

impl InputToken {
    /// Digit token, or `None` for values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// Parse a button value or key name into a token.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == "00" {
            return Some(Self::DoubleZero);
        }

        let mut chars = raw.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match ch {
            '.' => Some(Self::Decimal),
            c => match c.to_digit(10) {
                Some(d) => Self::digit(d as u8),
                None => Operator::from_char(c).map(Self::Operator),
            },
        }
    }

    /// Text appended to the buffer for this token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Digit(digit) => digit.as_str(),
            Self::DoubleZero => "00",
            Self::Decimal => ".",
            Self::Operator(op) => op.as_str(),
        }
    }

    /// `0` or `00`.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Digit(Digit::ZERO) | Self::DoubleZero)
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_digit() {
        for d in 0..=9u8 {
            let raw = d.to_string();
            let token = InputToken::parse(&raw).unwrap();
            assert_eq!(token, InputToken::digit(d).unwrap());
            assert_eq!(token.as_str(), raw);
        }
    }

    #[test]
    fn parses_operators_and_decimal() {
        for op in Operator::ALL {
            let token = InputToken::parse(op.as_str()).unwrap();
            assert_eq!(token, InputToken::Operator(op));
            assert_eq!(token.to_string(), op.as_char().to_string());
        }
        assert_eq!(InputToken::parse("."), Some(InputToken::Decimal));
    }

    #[test]
    fn rejects_foreign_input() {
        assert_eq!(InputToken::parse(""), None);
        assert_eq!(InputToken::parse("12"), None);
        assert_eq!(InputToken::parse("%"), None);
        assert_eq!(InputToken::parse("^"), None);
        assert_eq!(InputToken::parse("Enter"), None);
        assert_eq!(InputToken::parse("000"), None);
    }

    #[test]
    fn out_of_range_digits_cannot_be_built() {
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(u8::MAX), None);
        assert_eq!(InputToken::digit(42), None);
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
    }

    #[test]
    fn foreign_operators_cannot_be_built() {
        for ch in ['^', 'x', '%', '=', ' '] {
            assert_eq!(Operator::from_char(ch), None, "char {:?}", ch);
            assert!(!is_operator(ch));
        }
    }

    #[test]
    fn deserialized_digits_are_checked() {
        let token: InputToken = serde_json::from_str(r#"{"Digit":7}"#).unwrap();
        assert_eq!(token, InputToken::digit(7).unwrap());

        assert!(serde_json::from_str::<InputToken>(r#"{"Digit":42}"#).is_err());
        assert!(serde_json::from_str::<InputToken>(r#"{"Operator":"Pow"}"#).is_err());
    }

    #[test]
    fn zero_tokens_are_identified() {
        assert!(InputToken::digit(0).unwrap().is_zero());
        assert!(InputToken::DoubleZero.is_zero());
        assert!(!InputToken::digit(1).unwrap().is_zero());
        assert!(!InputToken::Decimal.is_zero());
    }
}
