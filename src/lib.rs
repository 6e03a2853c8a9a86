//! # textcalc
//!
//! A calculator for delimited number expressions.
//!
//! Expressions arrive as plain text: a single number, comma/colon
//! separated numbers, or a `//<char>` + newline header declaring a custom
//! delimiter for the rest of the text. Classification picks the shape,
//! dispatch sums the fields. See the [calc] module for the pipeline.

pub mod calc;

/// A simple function to demonstrate the library works
pub fn hello() -> &'static str {
    "Hello from textcalc!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        assert_eq!(hello(), "Hello from textcalc!");
    }
}
