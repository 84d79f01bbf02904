//! Parser module for building the Watt AST.
//!
//! Transforms the lexer's token stream into a [`Program`](crate::ast::ast::Program).
//! Expressions use a Pratt parser with NUD (null denotation) and LED
//! (left denotation) handlers and binding powers for precedence.
//! Statements and definitions are plain recursive descent, dispatched
//! on their first token.
//!
//! Every ambiguity is settled with one token of lookahead, and the first
//! error aborts the parse.

pub mod expr;
pub mod items;
pub mod lookups;
pub mod parser;
pub mod stmt;
