use crate::Span;

use super::{ast::Ident, statements::Block};

#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Function(FunctionDef),
    Trait(TraitDef),
    Type(TypeDef),
    Unit(UnitDef),
}

impl Definition {
    pub fn get_span(&self) -> &Span {
        match self {
            Definition::Function(def) => &def.span,
            Definition::Trait(def) => &def.span,
            Definition::Type(def) => &def.span,
            Definition::Unit(def) => &def.span,
        }
    }

    pub fn name(&self) -> &Ident {
        match self {
            Definition::Function(def) => &def.name,
            Definition::Trait(def) => &def.name,
            Definition::Type(def) => &def.name,
            Definition::Unit(def) => &def.name,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Definition::Function(_) => "fn",
            Definition::Trait(_) => "trait",
            Definition::Type(_) => "type",
            Definition::Unit(_) => "unit",
        }
    }
}

/// `fn name [(params)] [block]`. Without a body this only declares the
/// function, as trait methods do.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: Ident,
    pub parameters: Option<Vec<Ident>>,
    pub body: Option<Block>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraitDef {
    pub name: Ident,
    pub methods: Vec<FunctionDef>,
    pub span: Span,
}

/// `type Name [(params)] [impl T1, T2] [block]`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDef {
    pub name: Ident,
    pub parameters: Option<Vec<Ident>>,
    pub traits: Option<Vec<Ident>>,
    pub body: Option<Block>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitDef {
    pub name: Ident,
    pub body: Option<Block>,
    pub span: Span,
}
