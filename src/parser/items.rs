//! Top-level items and the definition forms.
//!
//! A program is an unbraced run of items. Definitions are introduced by
//! their keyword (`fn`, `trait`, `type`, `unit`) and `import` is only legal
//! here. Other statements follow the block rules, except that `break`,
//! `continue` and bare expression statements are rejected.

use crate::{
    ast::{
        ast::{Ident, Item},
        definitions::{Definition, FunctionDef, TraitDef, TypeDef, UnitDef},
        statements::{SingleImport, Stmt, StmtKind},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::LOOKUPS,
    parser::{parse_comma_separated, parse_parameter_list, Parser},
    stmt::{parse_block, parse_postfix_stmt, parse_stmt},
};

pub fn parse_item(parser: &mut Parser) -> Result<Item, Error> {
    match LOOKUPS.item_lookup.get(&parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Ok(Item::Statement(parse_top_level_stmt(parser)?)),
    }
}

/// Statements outside any block. Loop control and bare expression
/// statements only make sense inside a body, so only the defining and
/// assigning postfix forms are kept here.
fn parse_top_level_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Break | TokenKind::Continue => Err(parser.unexpected("definition")),
        TokenKind::Identifier => {
            let first = parser.current_token().clone();
            let stmt = parse_postfix_stmt(parser)?;

            if let StmtKind::Expression(_) = stmt.kind {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: String::from("definition or assignment"),
                        found: first.found(),
                    },
                    first.span.start,
                ));
            }

            Ok(stmt)
        }
        _ => parse_stmt(parser),
    }
}

/// `fn name [(params)] [{ ... }]`
pub fn parse_fn_def(parser: &mut Parser) -> Result<FunctionDef, Error> {
    let start = parser.expect(TokenKind::Fn)?.span.start;
    let name = parser.expect_identifier()?;

    let parameters = if parser.current_token_kind() == TokenKind::OpenParen {
        Some(parse_parameter_list(parser)?)
    } else {
        None
    };

    let body = if parser.current_token_kind() == TokenKind::OpenCurly {
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(FunctionDef {
        name,
        parameters,
        body,
        span: parser.span_from(start),
    })
}

pub fn parse_fn_item(parser: &mut Parser) -> Result<Item, Error> {
    Ok(Item::Definition(Definition::Function(parse_fn_def(parser)?)))
}

/// `trait Name { fn a(x) fn b(y) { ... } }`; bodies are default
/// implementations.
pub fn parse_trait_item(parser: &mut Parser) -> Result<Item, Error> {
    let start = parser.expect(TokenKind::Trait)?.span.start;
    let name = parser.expect_identifier()?;

    parser.expect(TokenKind::OpenCurly)?;

    let mut methods = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        if parser.current_token_kind() != TokenKind::Fn {
            return Err(parser.unexpected("`fn`"));
        }
        methods.push(parse_fn_def(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Item::Definition(Definition::Trait(TraitDef {
        name,
        methods,
        span: parser.span_from(start),
    })))
}

/// Unbracketed `T1, T2, ...` after `impl`. May be empty.
fn parse_trait_names(parser: &mut Parser) -> Result<Vec<Ident>, Error> {
    let mut traits = Vec::new();

    if parser.current_token_kind() != TokenKind::Identifier {
        return Ok(traits);
    }

    loop {
        traits.push(parser.expect_identifier()?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    Ok(traits)
}

/// `type Name [(params)] [impl T1, T2] [{ ... }]`
///
/// Each optional clause is recognised by its leading token and taken
/// greedily, left to right.
pub fn parse_type_item(parser: &mut Parser) -> Result<Item, Error> {
    let start = parser.expect(TokenKind::Type)?.span.start;
    let name = parser.expect_identifier()?;

    let parameters = if parser.current_token_kind() == TokenKind::OpenParen {
        Some(parse_parameter_list(parser)?)
    } else {
        None
    };

    let traits = if parser.at_contextual_keyword("impl") {
        parser.advance();
        Some(parse_trait_names(parser)?)
    } else {
        None
    };

    let body = if parser.current_token_kind() == TokenKind::OpenCurly {
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Item::Definition(Definition::Type(TypeDef {
        name,
        parameters,
        traits,
        body,
        span: parser.span_from(start),
    })))
}

/// `unit Name [{ ... }]`
pub fn parse_unit_item(parser: &mut Parser) -> Result<Item, Error> {
    let start = parser.expect(TokenKind::Unit)?.span.start;
    let name = parser.expect_identifier()?;

    let body = if parser.current_token_kind() == TokenKind::OpenCurly {
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Item::Definition(Definition::Unit(UnitDef {
        name,
        body,
        span: parser.span_from(start),
    })))
}

fn parse_single_import(parser: &mut Parser) -> Result<SingleImport, Error> {
    let path_token = parser.expect(TokenKind::String)?;

    let alias = if parser.current_token_kind() == TokenKind::With {
        parser.advance();
        Some(parser.expect_identifier()?)
    } else {
        None
    };

    Ok(SingleImport {
        path: path_token.value,
        alias,
        span: parser.span_from(path_token.span.start),
    })
}

/// `import 'path' [with alias]` or `import ('a', 'b' with c)`
pub fn parse_import_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Import)?.span.start;

    let imports = if parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance();
        if parser.current_token_kind() == TokenKind::CloseParen {
            return Err(parser.unexpected(TokenKind::String.describe()));
        }
        parse_comma_separated(parser, TokenKind::CloseParen, parse_single_import)?
    } else {
        vec![parse_single_import(parser)?]
    };

    Ok(Stmt::new(StmtKind::Import(imports), parser.span_from(start)))
}

pub fn parse_import_item(parser: &mut Parser) -> Result<Item, Error> {
    Ok(Item::Statement(parse_import_stmt(parser)?))
}
