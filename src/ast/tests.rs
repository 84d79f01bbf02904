//! Tests for AST helpers and the s-expression printer.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::{
    ast::{Ident, Item},
    expressions::{BinaryOp, Expr, ExprKind, UnaryOp},
    statements::{AssignOp, Stmt, StmtKind},
};
use crate::{lexer::tokens::TokenKind, parse_source, Position, Span};

fn span() -> Span {
    let file = Arc::new(String::from("test.watt"));
    Span {
        start: Position(0, Arc::clone(&file)),
        end: Position(0, file),
    }
}

fn symbol(name: &str) -> Expr {
    Expr::new(ExprKind::Symbol(name.to_string()), span())
}

#[test]
fn test_print_constructed_nodes() {
    let call = Expr::new(
        ExprKind::Call {
            callee: Box::new(Expr::new(
                ExprKind::Member {
                    object: Box::new(symbol("io")),
                    property: Ident {
                        value: "read".to_string(),
                        span: span(),
                    },
                },
                span(),
            )),
            arguments: vec![Expr::new(ExprKind::Number(3), span())],
            propagate: true,
        },
        span(),
    );
    assert_eq!(call.to_string(), "(call? (. io read) 3)");

    let negated = Expr::new(
        ExprKind::Unary {
            operator: UnaryOp::Not,
            operand: Box::new(Expr::new(ExprKind::Bool(false), span())),
        },
        span(),
    );
    assert_eq!(negated.to_string(), "(! false)");

    let stmt = Stmt::new(
        StmtKind::Assign {
            target: symbol("total"),
            operator: AssignOp::AddAssign,
            value: negated,
        },
        span(),
    );
    assert_eq!(stmt.to_string(), "(+= total (! false))");
}

#[test]
fn test_print_string_escapes() {
    let program = parse_source(r"s := 'a\tb\n\'c\' \\ \q'", None).unwrap();

    assert_eq!(program.to_string(), r"(:= s 'a\tb\n\'c\' \\ \\q')");
}

#[test]
fn test_print_program_items_on_lines() {
    let program = parse_source("fn a\nx := 1\nunit U", None).unwrap();

    assert_eq!(program.to_string(), "(fn a)\n(:= x 1)\n(unit U)");
}

#[test]
fn test_item_descriptions() {
    let program =
        parse_source("fn f { } type T trait S { } unit U import 'm' x := 1 y += 2", None).unwrap();

    let kinds: Vec<&str> = program.iter().map(|item| item.describe()).collect();
    assert_eq!(
        kinds,
        vec!["fn", "type", "trait", "unit", "import", "define", "assign"]
    );
}

#[test]
fn test_block_iteration() {
    let program = parse_source("fn f { a() b := 1 return b }", None).unwrap();

    let Item::Definition(definition) = &program.items[0] else {
        panic!("expected definition");
    };
    let super::definitions::Definition::Function(def) = definition else {
        panic!("expected function");
    };

    let kinds: Vec<&str> = def
        .body
        .as_ref()
        .unwrap()
        .iter()
        .map(|stmt| stmt.kind.describe())
        .collect();
    assert_eq!(kinds, vec!["expression", "define", "return"]);
    assert_eq!(definition.name().value, "f");
}

#[test]
fn test_operator_tokens() {
    assert_eq!(BinaryOp::from_token(TokenKind::DotDot), Some(BinaryOp::Range));
    assert_eq!(BinaryOp::from_token(TokenKind::Impls), Some(BinaryOp::Impls));
    assert_eq!(BinaryOp::from_token(TokenKind::Assignment), None);

    assert_eq!(AssignOp::from_token(TokenKind::SlashEquals), Some(AssignOp::DivAssign));
    assert_eq!(AssignOp::from_token(TokenKind::Define), None);

    assert_eq!(BinaryOp::Modulo.symbol(), "%");
    assert_eq!(UnaryOp::Negate.symbol(), "-");
}

#[test]
fn test_trees_are_send() {
    fn assert_send<T: Send + Sync>() {}

    assert_send::<super::ast::Program>();
    assert_send::<Expr>();
}
