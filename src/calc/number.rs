//! Number token parsing
//!
//! One field of a split expression becomes an integer here, or fails. The
//! parse is non-throwing on purpose: the shape probes call it to test
//! whether a candidate field is numeric, so failure is an ordinary value
//! rather than control flow.

use std::fmt;

/// A field that could not be read as an integer.
///
/// Carries the offending token text for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNumber {
    pub token: String,
}

impl fmt::Display for InvalidNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid number token: {:?}", self.token)
    }
}

impl std::error::Error for InvalidNumber {}

/// Parse one token as a base-10 integer.
///
/// Accepts an optional leading `+` or `-` sign and digits, nothing else:
/// no surrounding whitespace, no partial parse. Values outside the 32-bit
/// range fail like any other malformed token.
pub fn parse_number(token: &str) -> Result<i32, InvalidNumber> {
    token.parse::<i32>().map_err(|_| InvalidNumber {
        token: token.to_string(),
    })
}
