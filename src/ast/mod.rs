/// AST (Abstract Syntax Tree) module
/// Contains all node types produced by the parser
///
/// Submodules:
/// - ast: Program root, top-level items and identifiers
/// - definitions: Function, trait, type and unit definitions
/// - expressions: Definitions for various expression types
/// - statements: Blocks and statement kinds
/// - printer: S-expression rendering
pub mod ast;
pub mod definitions;
pub mod expressions;
pub mod printer;
pub mod statements;

#[cfg(test)]
mod tests;
