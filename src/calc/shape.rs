//! Shape classification for expression text
//!
//! Raw input text maps to exactly one of five syntactic shapes. The
//! classification is total and works by structural probing: candidate
//! splits and try-parses, never exceptions.
//!
//! Classification follows this specific order (important for correctness,
//! since the shapes overlap syntactically):
//! 1. Empty: absent or whitespace-only text
//! 2. SingleValue: the whole text is one integer literal
//! 3. CommaSeparated: comma/colon fields that all parse as integers
//! 4. CustomDelimited: a `//<char>` + newline header, remainder unchecked
//! 5. Unrecognized: the catch-all
//!
//! A single number is also trivially "comma separated" with one field, so
//! the order above is the tie-break: `"5"` is SingleValue, never
//! CommaSeparated.

use crate::calc::fields::split_fields;
use crate::calc::number::parse_number;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Header declaring a custom delimiter: two slashes, one delimiter
/// character (anything but a newline), a newline. Anchored at the start;
/// the remainder capture is the entire rest of the text, newlines
/// included.
static DELIMITER_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A//(.)\n(?s:(.*))\z").unwrap());

/// A custom delimiter declaration extracted from a header.
///
/// Borrows the remainder from the input text, so it lives only as long as
/// one classification or calculation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DelimiterSpec<'a> {
    /// The declared delimiter character.
    pub delimiter: char,
    /// Everything after the header's newline.
    pub remainder: &'a str,
}

/// The classified syntactic shape of an input text.
///
/// Exactly one variant applies to any input. Variants carry the text their
/// summation strategy consumes, so a classified shape is self-contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shape<'a> {
    /// Absent or whitespace-only input.
    Empty,
    /// The whole text is one integer literal.
    SingleValue(&'a str),
    /// Comma/colon separated integers. The two separators are
    /// interchangeable within one expression.
    CommaSeparated(&'a str),
    /// A delimiter header followed by delimited content. The remainder's
    /// fields are not validated here; dispatch may still reject them.
    CustomDelimited(DelimiterSpec<'a>),
    /// None of the above. Dispatching this shape fails.
    Unrecognized,
}

impl fmt::Display for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Empty => "EMPTY",
            Shape::SingleValue(_) => "SINGLE_VALUE",
            Shape::CommaSeparated(_) => "COMMA_SEPARATED",
            Shape::CustomDelimited(_) => "CUSTOM_DELIMITED",
            Shape::Unrecognized => "UNRECOGNIZED",
        };
        write!(f, "{}", name)
    }
}

/// The default separator class for plain separated expressions.
pub(crate) fn is_default_separator(c: char) -> bool {
    matches!(c, ',' | ':')
}

/// Classify `text` into exactly one [`Shape`].
///
/// Total over all inputs: every text maps to a shape, worst case
/// [`Shape::Unrecognized`].
pub fn classify(text: Option<&str>) -> Shape<'_> {
    let text = match text {
        Some(text) => text,
        None => return Shape::Empty,
    };

    if text.chars().all(char::is_whitespace) {
        return Shape::Empty;
    }
    if parse_number(text).is_ok() {
        return Shape::SingleValue(text);
    }
    if is_separated_numbers(text) {
        return Shape::CommaSeparated(text);
    }
    if let Some(spec) = extract_delimiter_spec(text) {
        return Shape::CustomDelimited(spec);
    }
    Shape::Unrecognized
}

/// Check whether every comma/colon field of `text` parses as an integer.
///
/// A split that yields zero fields (text made of separators only) does
/// not match.
fn is_separated_numbers(text: &str) -> bool {
    let fields = split_fields(text, is_default_separator);
    !fields.is_empty() && fields.iter().all(|field| parse_number(field).is_ok())
}

/// Extract the delimiter declaration when `text` starts with a header.
fn extract_delimiter_spec(text: &str) -> Option<DelimiterSpec<'_>> {
    let captures = DELIMITER_HEADER.captures(text)?;
    let delimiter = captures.get(1)?.as_str().chars().next()?;
    let remainder = captures.get(2)?.as_str();
    Some(DelimiterSpec {
        delimiter,
        remainder,
    })
}
