//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use reckon::core::{
    evaluate, format_number, is_operator, ExpressionBuffer, HistoryEntry, HistoryLog, InputToken,
};

const TOKENS: [&str; 16] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "00", ".", "+", "-", "*", "/",
];

prop_compose! {
    fn arbitrary_token()(idx in 0..TOKENS.len()) -> InputToken {
        InputToken::parse(TOKENS[idx]).unwrap()
    }
}

prop_compose! {
    fn arbitrary_number()(whole in 0u32..1000, frac in prop::option::of(0u32..100)) -> String {
        match frac {
            Some(frac) => format!("{}.{}", whole, frac),
            None => whole.to_string(),
        }
    }
}

prop_compose! {
    fn arbitrary_operator()(idx in 0..4usize) -> char {
        ['+', '-', '*', '/'][idx]
    }
}

fn typed(tokens: &[InputToken]) -> ExpressionBuffer {
    tokens
        .iter()
        .fold(ExpressionBuffer::new(), |buf, token| buf.append(*token))
}

/// Evaluate with conventional precedence: collapse `*` and `/` left to
/// right first, then `+` and `-` left to right.
fn reference_eval(first: f64, rest: &[(char, f64)]) -> f64 {
    let mut terms = vec![first];
    let mut additive = Vec::new();
    for &(op, value) in rest {
        match op {
            '*' => *terms.last_mut().unwrap() *= value,
            '/' => *terms.last_mut().unwrap() /= value,
            _ => {
                additive.push(op);
                terms.push(value);
            }
        }
    }

    let mut acc = terms[0];
    for (op, value) in additive.iter().zip(&terms[1..]) {
        if *op == '+' {
            acc += value;
        } else {
            acc -= value;
        }
    }
    acc
}

proptest! {
    #[test]
    fn buffer_never_has_two_decimals_in_a_run(
        tokens in prop::collection::vec(arbitrary_token(), 0..40)
    ) {
        let buffer = typed(&tokens);
        for run in buffer.as_str().split(is_operator) {
            prop_assert!(run.matches('.').count() <= 1, "run '{}' in '{}'", run, buffer);
        }
    }

    #[test]
    fn buffer_only_holds_valid_characters(
        tokens in prop::collection::vec(arbitrary_token(), 0..40)
    ) {
        let buffer = typed(&tokens);
        prop_assert!(buffer
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || is_operator(c)));
    }

    #[test]
    fn lone_zero_absorbs_zero_tokens(
        zeros in prop::collection::vec(prop::bool::ANY, 1..10)
    ) {
        let zero = InputToken::digit(0).unwrap();
        let mut buffer = ExpressionBuffer::new().append(zero);
        for double in zeros {
            let token = if double { InputToken::DoubleZero } else { zero };
            buffer = buffer.append(token);
        }
        prop_assert_eq!(buffer.as_str(), "0");
    }

    #[test]
    fn typed_buffers_parse_back_unchanged(
        tokens in prop::collection::vec(arbitrary_token(), 0..40)
    ) {
        let buffer = typed(&tokens);
        prop_assert_eq!(ExpressionBuffer::parse(buffer.as_str()), Some(buffer));
    }

    #[test]
    fn sign_runs_fold_to_parity(signs in prop::collection::vec(prop::bool::ANY, 0..2000)) {
        let prefix: String = signs.iter().map(|&minus| if minus { '-' } else { '+' }).collect();
        let negations = signs.iter().filter(|&&minus| minus).count();
        let expected = if negations % 2 == 0 { 7.0 } else { -7.0 };

        prop_assert_eq!(evaluate(&format!("{}7", prefix)).unwrap(), expected);
    }

    #[test]
    fn backspace_drops_exactly_one_character(
        tokens in prop::collection::vec(arbitrary_token(), 0..20)
    ) {
        let buffer = typed(&tokens);
        let len = buffer.as_str().len();
        prop_assert_eq!(buffer.backspace().as_str().len(), len.saturating_sub(1));
        prop_assert!(buffer.as_str().starts_with(buffer.backspace().as_str()));
    }

    #[test]
    fn evaluate_matches_reference(
        first in arbitrary_number(),
        rest in prop::collection::vec((arbitrary_operator(), arbitrary_number()), 0..6)
    ) {
        let mut expression = first.clone();
        let mut operands = Vec::new();
        for (op, number) in &rest {
            expression.push(*op);
            expression.push_str(number);
            operands.push((*op, number.parse::<f64>().unwrap()));
        }

        let expected = reference_eval(first.parse().unwrap(), &operands);
        let actual = evaluate(&expression);

        if expected.is_finite() {
            let value = actual.unwrap();
            prop_assert_eq!(format_number(value), format_number(expected));
        } else {
            prop_assert!(actual.is_err(), "'{}' should fail", expression);
        }
    }

    #[test]
    fn history_respects_capacity(
        count in 0usize..30,
        capacity in 1usize..15
    ) {
        let mut log = HistoryLog::with_capacity(capacity);
        for i in 0..count {
            log = log.record(HistoryEntry::new(format!("{}+0", i), i.to_string()));
        }

        prop_assert_eq!(log.len(), count.min(capacity));
        if count > 0 {
            let newest = (count - 1).to_string();
            prop_assert_eq!(log.select(0), Some(newest.as_str()));
        }
    }

    #[test]
    fn history_record_is_pure(expression in arbitrary_number(), result in arbitrary_number()) {
        let log = HistoryLog::new();
        let new_log = log.record(HistoryEntry::new(expression, result));

        // Original log unchanged
        prop_assert_eq!(log.len(), 0);
        prop_assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn history_rows_reload(
        results in prop::collection::vec(arbitrary_number(), 0..12)
    ) {
        let log = results.iter().fold(HistoryLog::new(), |log, r| {
            log.record(HistoryEntry::new(format!("{}*1", r), r.clone()))
        });

        let reloaded = HistoryLog::from_rows(log.to_rows(), log.capacity());
        prop_assert_eq!(reloaded, Ok(log));
    }
}
