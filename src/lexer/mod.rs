//! Lexical analysis for Watt source text.
//!
//! The lexer walks the source with a fixed, ordered table of anchored
//! regular expressions. It handles:
//!
//! - Keywords and identifiers (`impl` stays an identifier)
//! - Integer and single-quoted string literals with escapes
//! - Operators, with multi-character forms matched first
//! - Whitespace and `//` / `/* */` comments, which produce no tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
