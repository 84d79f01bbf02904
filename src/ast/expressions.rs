use crate::{lexer::tokens::TokenKind, Span};

use super::{ast::Ident, statements::Block};

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // Literals
    Number(i64),
    Bool(bool),
    String(String),
    List(Vec<Expr>),
    Map(Vec<Pair>),

    // Postfix chain
    Symbol(String),
    Member {
        object: Box<Expr>,
        property: Ident,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
        /// `f(x)?`: the call propagates failure out of the enclosing function.
        propagate: bool,
    },

    Binary {
        left: Box<Expr>,
        operator: BinaryOp,
        right: Box<Expr>,
    },
    Unary {
        operator: UnaryOp,
        operand: Box<Expr>,
    },
    New {
        type_name: Ident,
        arguments: Vec<Expr>,
    },
    Match(MatchExpr),
    Lambda {
        parameters: Vec<Ident>,
        body: Box<Expr>,
    },
    AnonymousFn {
        parameters: Vec<Ident>,
        body: Block,
    },
}

/// `key: value` entry of a map literal. Keys may be any expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub key: Expr,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchExpr {
    pub scrutinee: Box<Expr>,
    pub cases: Vec<MatchArm>,
    /// The default arm keeps its leading expression even though it is never
    /// matched against.
    pub default: Option<Box<MatchArm>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    pub pattern: Expr,
    pub body: ArmBody,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArmBody {
    Expr(Box<Expr>),
    Block(Block),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Or,
    Equals,
    NotEquals,
    Greater,
    Less,
    GreaterEquals,
    LessEquals,
    Range,
    Impls,
    Plus,
    Minus,
    Divide,
    Multiply,
    Modulo,
}

impl BinaryOp {
    pub fn from_token(kind: TokenKind) -> Option<BinaryOp> {
        Some(match kind {
            TokenKind::And => BinaryOp::And,
            TokenKind::Or => BinaryOp::Or,
            TokenKind::Equals => BinaryOp::Equals,
            TokenKind::NotEquals => BinaryOp::NotEquals,
            TokenKind::Greater => BinaryOp::Greater,
            TokenKind::Less => BinaryOp::Less,
            TokenKind::GreaterEquals => BinaryOp::GreaterEquals,
            TokenKind::LessEquals => BinaryOp::LessEquals,
            TokenKind::DotDot => BinaryOp::Range,
            TokenKind::Impls => BinaryOp::Impls,
            TokenKind::Plus => BinaryOp::Plus,
            TokenKind::Dash => BinaryOp::Minus,
            TokenKind::Slash => BinaryOp::Divide,
            TokenKind::Star => BinaryOp::Multiply,
            TokenKind::Percent => BinaryOp::Modulo,
            _ => return None,
        })
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::Greater => ">",
            BinaryOp::Less => "<",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::LessEquals => "<=",
            BinaryOp::Range => "..",
            BinaryOp::Impls => "impls",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Divide => "/",
            BinaryOp::Multiply => "*",
            BinaryOp::Modulo => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
        }
    }
}
