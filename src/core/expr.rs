//! Arithmetic expression evaluation.
//!
//! A small tokenizer and recursive-descent parser over `+ - * /`,
//! decimal literals and unary signs. Multiplication and division bind
//! tighter than addition and subtraction; operators of equal precedence
//! associate to the left.
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ('+' | '-')* number
//! ```
//!
//! Prefix signs are folded in a loop, so a long run of them costs no
//! stack depth.

use super::error::CalcError;
use super::number::{finite, format_number};
use super::token::Operator;
use std::iter::Peekable;
use std::vec::IntoIter;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Lexeme {
    Number(f64),
    Operator(Operator),
}

fn tokenize(input: &str) -> Result<Vec<Lexeme>, CalcError> {
    let mut lexemes = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        if let Some(op) = Operator::from_char(ch) {
            lexemes.push(Lexeme::Operator(op));
            chars.next();
            continue;
        }

        if !(ch.is_ascii_digit() || ch == '.') {
            return Err(CalcError::expression(format!(
                "unexpected character '{}' at {}",
                ch, start
            )));
        }

        let mut end = start;
        while let Some(&(idx, c)) = chars.peek() {
            if c.is_ascii_digit() || c == '.' {
                end = idx + c.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let literal = &input[start..end];
        if literal == "." || literal.matches('.').count() > 1 {
            return Err(CalcError::expression(format!(
                "malformed number '{}'",
                literal
            )));
        }
        let value = literal
            .parse::<f64>()
            .map_err(|e| CalcError::expression(format!("'{}': {}", literal, e)))?;
        let value = finite(value, || {
            CalcError::expression(format!("number '{}' is out of range", literal))
        })?;
        lexemes.push(Lexeme::Number(value));
    }

    Ok(lexemes)
}

struct Parser {
    lexemes: Peekable<IntoIter<Lexeme>>,
}

impl Parser {
    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.term()?;
        while let Some(op) = self.next_operator(false) {
            let rhs = self.term()?;
            acc = apply(acc, op, rhs)?;
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.factor()?;
        while let Some(op) = self.next_operator(true) {
            let rhs = self.factor()?;
            acc = apply(acc, op, rhs)?;
        }
        Ok(acc)
    }

    fn next_operator(&mut self, multiplicative: bool) -> Option<Operator> {
        match self.lexemes.peek() {
            Some(&Lexeme::Operator(op)) if op.is_multiplicative() == multiplicative => {
                self.lexemes.next();
                Some(op)
            }
            _ => None,
        }
    }

    fn factor(&mut self) -> Result<f64, CalcError> {
        let mut negative = false;
        loop {
            match self.lexemes.next() {
                Some(Lexeme::Number(value)) => return Ok(if negative { -value } else { value }),
                Some(Lexeme::Operator(Operator::Sub)) => negative = !negative,
                Some(Lexeme::Operator(Operator::Add)) => {}
                Some(Lexeme::Operator(op)) => {
                    return Err(CalcError::expression(format!(
                        "operator '{}' is missing its left operand",
                        op
                    )))
                }
                None => return Err(CalcError::expression("expression ends with an operator")),
            }
        }
    }
}

fn apply(lhs: f64, op: Operator, rhs: f64) -> Result<f64, CalcError> {
    finite(op.apply(lhs, rhs), || {
        CalcError::expression(format!("{} {} {} is not a finite number", lhs, op, rhs))
    })
}

/// Evaluate an arithmetic expression to a finite value.
///
/// # Example
///
/// ```rust
/// use reckon::core::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert!(evaluate("5/0").is_err());
/// assert!(evaluate("").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    if input.is_empty() {
        return Err(CalcError::expression("empty expression"));
    }

    let lexemes = tokenize(input)?;
    let mut parser = Parser {
        lexemes: lexemes.into_iter().peekable(),
    };
    let value = parser.expr()?;

    match parser.lexemes.next() {
        None => Ok(value),
        Some(extra) => Err(CalcError::expression(format!(
            "unexpected trailing input {:?}",
            extra
        ))),
    }
}

/// Evaluate an expression and render the result for display.
pub fn evaluate_to_string(input: &str) -> Result<String, CalcError> {
    evaluate(input).map(format_number)
}
