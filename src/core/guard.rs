//! Guard predicates that reject buffer edits.
//!
//! Guards are pure boolean functions evaluated before a token is
//! appended. They keep the buffer invariants declarative instead of
//! scattering checks through the append path.

use super::buffer::ExpressionBuffer;
use super::token::InputToken;

/// Pure predicate deciding whether a token may be appended to a buffer.
///
/// # Example
///
/// ```rust
/// use reckon::core::{ExpressionBuffer, InputGuard, InputToken, Operator};
///
/// let no_operators = InputGuard::new("no-operators", |_buf: &ExpressionBuffer, token: &InputToken| {
///     !matches!(token, InputToken::Operator(_))
/// });
///
/// let buffer = ExpressionBuffer::new();
/// assert!(no_operators.allows(&buffer, &InputToken::Decimal));
/// assert!(!no_operators.allows(&buffer, &InputToken::Operator(Operator::Add)));
/// ```
pub struct InputGuard {
    name: &'static str,
    predicate: Box<dyn Fn(&ExpressionBuffer, &InputToken) -> bool + Send + Sync>,
}

impl InputGuard {
    /// Create a guard from a pure predicate.
    ///
    /// The predicate returns `true` when the edit is allowed.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&ExpressionBuffer, &InputToken) -> bool + Send + Sync + 'static,
    {
        InputGuard {
            name,
            predicate: Box::new(predicate),
        }
    }

    /// Name used when logging a rejected edit.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether the guard allows appending `token` to `buffer`.
    pub fn allows(&self, buffer: &ExpressionBuffer, token: &InputToken) -> bool {
        (self.predicate)(buffer, token)
    }

    /// A `0` or `00` is rejected when the buffer is exactly `"0"`.
    pub fn leading_zero() -> Self {
        Self::new("leading-zero", |buffer, token| {
            !(token.is_zero() && buffer.as_str() == "0")
        })
    }

    /// A decimal point is rejected when the current numeric run already has one.
    pub fn single_decimal() -> Self {
        Self::new("single-decimal", |buffer, token| {
            !(matches!(token, InputToken::Decimal) && buffer.numeric_run().contains('.'))
        })
    }

    /// The guards every buffer edit goes through.
    pub fn defaults() -> Vec<Self> {
        vec![Self::leading_zero(), Self::single_decimal()]
    }
}

impl std::fmt::Debug for InputGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputGuard").field("name", &self.name).finish()
    }
}
