//! Surface lexer for expression text
//!
//! Tokenization serves the inspection surfaces: the `tokens` CLI command
//! and the token rendering stages. It exposes the lexical structure of an
//! expression without deciding anything about its shape. The calculation
//! path never consumes these tokens; classification works by structural
//! probing instead.

use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All tokens that can appear in expression text.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Start of a custom delimiter header
    #[token("//")]
    HeaderMarker,

    /// A lone slash outside a header marker
    #[token("/")]
    Slash,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("\n")]
    Newline,

    /// Spaces and tabs, newlines excluded
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Base-10 integer literal with optional sign
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    /// Any other run of characters
    #[regex(r"[^,:\n \t/0-9+-]+", |lex| lex.slice().to_string())]
    Text(String),
}

impl Token {
    /// Check if this token separates fields in the default shapes
    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Comma | Token::Colon)
    }

    /// Check if this token is an integer literal
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::HeaderMarker => write!(f, "<header>"),
            Token::Slash => write!(f, "<slash>"),
            Token::Comma => write!(f, "<comma>"),
            Token::Colon => write!(f, "<colon>"),
            Token::Newline => write!(f, "<newline>"),
            Token::Whitespace => write!(f, "<whitespace>"),
            Token::Number(value) => write!(f, "<number:{}>", value),
            Token::Text(text) => write!(f, "<text:{}>", text),
        }
    }
}

/// Tokenize expression text and collect all tokens.
///
/// Byte sequences no token matches are skipped, so the dump never fails.
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_separated_expression() {
        let tokens = tokenize("1,2:3");
        assert_eq!(
            tokens,
            vec![
                Token::Number("1".to_string()),
                Token::Comma,
                Token::Number("2".to_string()),
                Token::Colon,
                Token::Number("3".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_custom_delimited_expression() {
        let tokens = tokenize("//;\n1;2");
        assert_eq!(
            tokens,
            vec![
                Token::HeaderMarker,
                Token::Text(";".to_string()),
                Token::Newline,
                Token::Number("1".to_string()),
                Token::Text(";".to_string()),
                Token::Number("2".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_signed_numbers() {
        let tokens = tokenize("-1,+2");
        assert_eq!(
            tokens,
            vec![
                Token::Number("-1".to_string()),
                Token::Comma,
                Token::Number("+2".to_string()),
            ]
        );
    }

    #[test]
    fn test_header_marker_wins_over_slash() {
        assert_eq!(tokenize("//"), vec![Token::HeaderMarker]);
        assert_eq!(tokenize("/"), vec![Token::Slash]);
        assert_eq!(
            tokenize("///"),
            vec![Token::HeaderMarker, Token::Slash]
        );
    }

    #[test]
    fn test_tokenize_whitespace_and_text() {
        let tokens = tokenize("hello \tworld");
        assert_eq!(
            tokens,
            vec![
                Token::Text("hello".to_string()),
                Token::Whitespace,
                Token::Text("world".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert_eq!(tokenize(""), Vec::<Token>::new());
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Comma.is_separator());
        assert!(Token::Colon.is_separator());
        assert!(!Token::Newline.is_separator());
        assert!(Token::Number("1".to_string()).is_number());
        assert!(!Token::Text("x".to_string()).is_number());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::HeaderMarker.to_string(), "<header>");
        assert_eq!(Token::Comma.to_string(), "<comma>");
        assert_eq!(Token::Number("42".to_string()).to_string(), "<number:42>");
        assert_eq!(Token::Text(";".to_string()).to_string(), "<text:;>");
    }
}
