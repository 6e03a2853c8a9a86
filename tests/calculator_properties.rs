//! Property tests for the calculator
//!
//! Generated expressions pin the arithmetic (the sum equals the sum of
//! the values that were joined, whatever mix of separators joined them)
//! and the outer guarantees: totality, determinism, and custom-delimiter
//! parity with the default separators.

use proptest::prelude::*;
use textcalc::calc::{calculate, classify, tokenize};

/// Values joined gap-by-gap with a random choice of comma or colon,
/// paired with the expected sum
fn separated_expression() -> impl Strategy<Value = (String, i64)> {
    prop::collection::vec(any::<i32>(), 1..12)
        .prop_flat_map(|values| {
            let separators = prop::collection::vec(
                prop_oneof![Just(','), Just(':')],
                values.len().saturating_sub(1),
            );
            (Just(values), separators)
        })
        .prop_map(|(values, separators)| {
            let expected: i64 = values.iter().map(|v| i64::from(*v)).sum();
            let mut text = String::new();
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    text.push(separators[i - 1]);
                }
                text.push_str(&value.to_string());
            }
            (text, expected)
        })
}

/// Delimiter characters exercising the literal-split rule, including
/// regex-special ones and a multi-byte one
fn delimiter_char() -> impl Strategy<Value = char> {
    prop_oneof![
        Just(';'),
        Just('|'),
        Just('.'),
        Just('*'),
        Just('x'),
        Just('#'),
        Just(' '),
        Just('€'),
    ]
}

proptest! {
    #[test]
    fn sums_separated_values((text, expected) in separated_expression()) {
        prop_assert_eq!(calculate(Some(&text)), Ok(expected));
    }

    #[test]
    fn comma_and_colon_joins_agree(values in prop::collection::vec(any::<i32>(), 1..12)) {
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let with_commas = rendered.join(",");
        let with_colons = rendered.join(":");
        prop_assert_eq!(
            calculate(Some(&with_commas)),
            calculate(Some(&with_colons))
        );
    }

    #[test]
    fn custom_delimiter_agrees_with_commas(
        values in prop::collection::vec(any::<i32>(), 1..12),
        delimiter in delimiter_char(),
    ) {
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let with_commas = rendered.join(",");
        let custom = format!("//{}\n{}", delimiter, rendered.join(&delimiter.to_string()));
        prop_assert_eq!(calculate(Some(&custom)), calculate(Some(&with_commas)));
    }

    #[test]
    fn same_input_same_outcome(text in any::<String>()) {
        let first = calculate(Some(&text));
        let second = calculate(Some(&text));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn never_panics_on_arbitrary_text(text in any::<String>()) {
        let _ = calculate(Some(&text));
        let _ = classify(Some(&text));
        let _ = tokenize(&text);
    }

    #[test]
    fn single_value_round_trips(value in any::<i32>()) {
        let text = value.to_string();
        prop_assert_eq!(calculate(Some(&text)), Ok(i64::from(value)));
    }
}
