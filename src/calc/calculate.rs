//! Summation dispatch
//!
//! The dispatcher consumes a classified [`Shape`] and runs the matching
//! summation strategy. Probing stays in [`shape`](crate::calc::shape);
//! this module only executes whatever strategy the shape selected. The
//! match is exhaustive, so adding a shape variant forces a decision here.

use crate::calc::fields::split_fields;
use crate::calc::number::{parse_number, InvalidNumber};
use crate::calc::shape::{classify, is_default_separator, Shape};
use std::fmt;

/// Errors from [`calculate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculateError {
    /// A field of the expression is not a valid integer. Only the
    /// custom-delimited strategy fails this way at dispatch time; the
    /// other shapes validate their fields during classification.
    InvalidNumber(InvalidNumber),
    /// The text matches no computable expression shape.
    InvalidExpression,
}

impl fmt::Display for CalculateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculateError::InvalidNumber(err) => write!(f, "{}", err),
            CalculateError::InvalidExpression => {
                write!(f, "expression matches no computable shape")
            }
        }
    }
}

impl std::error::Error for CalculateError {}

impl From<InvalidNumber> for CalculateError {
    fn from(err: InvalidNumber) -> Self {
        CalculateError::InvalidNumber(err)
    }
}

/// Calculate the sum of the expression in `text`.
///
/// Absent, empty, and whitespace-only inputs sum to 0. Fields parse as
/// 32-bit integers and accumulate into a 64-bit sum, left to right in
/// their original order, so the first unparseable field is the one
/// reported.
pub fn calculate(text: Option<&str>) -> Result<i64, CalculateError> {
    match classify(text) {
        Shape::Empty => Ok(0),
        Shape::SingleValue(token) => Ok(i64::from(parse_number(token)?)),
        Shape::CommaSeparated(body) => sum_fields(split_fields(body, is_default_separator)),
        Shape::CustomDelimited(spec) => {
            let delimiter = spec.delimiter;
            sum_fields(split_fields(spec.remainder, move |c| c == delimiter))
        }
        Shape::Unrecognized => Err(CalculateError::InvalidExpression),
    }
}

/// Parse every field and sum the values left to right.
fn sum_fields(fields: Vec<&str>) -> Result<i64, CalculateError> {
    let mut total: i64 = 0;
    for field in fields {
        total += i64::from(parse_number(field)?);
    }
    Ok(total)
}
