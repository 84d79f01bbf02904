use crate::Span;

use super::{definitions::Definition, statements::Stmt};

/// A name as written in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub value: String,
    pub span: Span,
}

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub items: Vec<Item>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

/// Top-level entries may be declarations or plain statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Definition(Definition),
    Statement(Stmt),
}

impl Item {
    pub fn get_span(&self) -> &Span {
        match self {
            Item::Definition(definition) => definition.get_span(),
            Item::Statement(stmt) => &stmt.span,
        }
    }

    /// Short name of the item kind, used in logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Item::Definition(definition) => definition.describe(),
            Item::Statement(stmt) => stmt.kind.describe(),
        }
    }
}
