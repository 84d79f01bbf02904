//! Error types for the Watt front end.
//!
//! Lexing and parsing share a single error type carrying a source
//! position. Errors are terminal: the first one aborts the parse.
//!
//! - Lex errors (unrecognised input, unterminated strings or comments)
//! - Unexpected tokens, with the expected and found descriptions
//! - Unexpected end of input

pub mod errors;

#[cfg(test)]
mod tests;
