//! Expression calculation pipeline
//!
//! The pipeline runs leaves first:
//!
//! 1. Number parsing, in `number`: one field of a split expression
//!    becomes a validated integer, or fails as a value.
//! 2. Shape classification, in `shape`: raw text maps to exactly one of
//!    five syntactic shapes by structural probing, in a fixed priority
//!    order. The custom-delimiter shape carries its extracted declaration.
//! 3. Dispatch, in `calculate`: an exhaustive match over the shape picks
//!    the summation strategy and runs it.
//!
//! The split contract shared by the probes and the strategies lives in
//! `fields`. The `lexer` and `processor` modules are tooling surfaces: a
//! surface tokenizer for inspection dumps and the stage/format rendering
//! the CLI uses. Neither participates in calculation.

pub mod calculate;
pub mod fields;
pub mod lexer;
pub mod number;
pub mod processor;
pub mod shape;

pub use calculate::{calculate, CalculateError};
pub use fields::split_fields;
pub use lexer::{tokenize, Token};
pub use number::{parse_number, InvalidNumber};
pub use shape::{classify, DelimiterSpec, Shape};
