//! Number formatting and strict operand parsing.

use super::error::CalcError;

/// Render a finite value in its canonical display form.
///
/// Integers carry no trailing `.0`, fractions use plain decimal
/// notation with the shortest digits that round-trip, and `-0` is
/// shown as `0`.
///
/// There is no exponent form: very large and very small magnitudes are
/// written out in full, so `1e21` renders as 22 digits and `1e-7` as
/// `0.0000001`.
///
/// # Example
///
/// ```rust
/// use reckon::core::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Reject non-finite values produced by a calculation.
pub(crate) fn finite(value: f64, err: impl FnOnce() -> CalcError) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(err())
    }
}

/// Parse a whole buffer as one decimal number.
///
/// Accepts an optional leading sign, digits and at most one decimal
/// point with at least one digit overall. Anything else, including a
/// compound expression such as `2+3`, is an invalid operand.
pub fn parse_operand(raw: &str) -> Result<f64, CalcError> {
    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);

    let mut digits = 0usize;
    let mut points = 0usize;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return Err(CalcError::operand(format!("'{}' is not a number", raw))),
        }
    }

    if digits == 0 || points > 1 {
        return Err(CalcError::operand(format!("'{}' is not a number", raw)));
    }

    raw.parse::<f64>()
        .map_err(|e| CalcError::operand(format!("'{}': {}", raw, e)))
}
