//! Field splitting for expression bodies
//!
//! Both the shape probes and the summation strategies split text the same
//! way, so the contract lives here once. The splitter keeps interior and
//! leading empty fields but drops trailing ones: a doubled or leading
//! separator must still surface as an unparseable empty field, while a
//! trailing separator is tolerated. A text without any separator
//! occurrence is one field, even when the text is empty.

/// Split `text` into fields on every character matching `is_separator`.
///
/// - `"1,"` yields `["1"]` (trailing empty fields dropped)
/// - `","` yields `[]` (nothing but trailing empties)
/// - `"1,,2"` yields `["1", "", "2"]` (interior empties kept)
/// - `",1"` yields `["", "1"]` (leading empties kept)
/// - `"abc"` and `""` yield the whole text as one field
pub fn split_fields<F>(text: &str, is_separator: F) -> Vec<&str>
where
    F: Fn(char) -> bool + Copy,
{
    if !text.chars().any(is_separator) {
        return vec![text];
    }

    let mut fields: Vec<&str> = text.split(is_separator).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}
