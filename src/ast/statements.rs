use std::slice::Iter;

use crate::{lexer::tokens::TokenKind, Span};

use super::{ast::Ident, definitions::FunctionDef, expressions::Expr};

/// Brace-delimited statement sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Return(Expr),
    While {
        condition: Expr,
        body: Block,
    },
    If(IfStmt),
    For {
        variable: Ident,
        iterable: Expr,
        body: Block,
    },
    Break,
    Continue,
    /// A postfix expression evaluated for its side effects.
    Expression(Expr),
    /// `native name -> 'symbol'`
    Native {
        name: Ident,
        symbol: String,
    },
    Import(Vec<SingleImport>),
    Assign {
        target: Expr,
        operator: AssignOp,
        value: Expr,
    },
    /// `target := value`
    Define {
        target: Expr,
        value: Expr,
    },
    Function(FunctionDef),
}

impl StmtKind {
    pub fn describe(&self) -> &'static str {
        match self {
            StmtKind::Return(_) => "return",
            StmtKind::While { .. } => "while",
            StmtKind::If(_) => "if",
            StmtKind::For { .. } => "for",
            StmtKind::Break => "break",
            StmtKind::Continue => "continue",
            StmtKind::Expression(_) => "expression",
            StmtKind::Native { .. } => "native",
            StmtKind::Import(_) => "import",
            StmtKind::Assign { .. } => "assign",
            StmtKind::Define { .. } => "define",
            StmtKind::Function(_) => "fn",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Block,
    pub elifs: Vec<ElifBranch>,
    pub else_body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElifBranch {
    pub condition: Expr,
    pub body: Block,
    pub span: Span,
}

/// `'path'` or `'path' with alias`.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleImport {
    pub path: String,
    pub alias: Option<Ident>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
}

impl AssignOp {
    pub fn from_token(kind: TokenKind) -> Option<AssignOp> {
        Some(match kind {
            TokenKind::Assignment => AssignOp::Assign,
            TokenKind::PlusEquals => AssignOp::AddAssign,
            TokenKind::MinusEquals => AssignOp::SubAssign,
            TokenKind::StarEquals => AssignOp::MulAssign,
            TokenKind::SlashEquals => AssignOp::DivAssign,
            _ => return None,
        })
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
        }
    }
}
