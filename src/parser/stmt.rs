use crate::{
    ast::{
        ast::Ident,
        statements::{AssignOp, Block, ElifBranch, IfStmt, Stmt, StmtKind},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{expr::parse_postfix_expr, items::parse_fn_def, lookups::LOOKUPS, parser::Parser};

/// Parses one statement inside a block.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind();

    if token_kind == TokenKind::Identifier {
        return parse_postfix_stmt(parser);
    }

    match LOOKUPS.stmt_lookup.get(&token_kind) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("statement")),
    }
}

/// Statements that open with a postfix expression. The token after it
/// decides: `:=` defines, an assignment operator assigns, anything else
/// leaves a bare expression statement.
pub fn parse_postfix_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();
    let target = parse_postfix_expr(parser)?;

    let token_kind = parser.current_token_kind();
    let kind = if token_kind == TokenKind::Define {
        parser.advance();
        let value = parse_expr(parser, BindingPower::Default)?;
        StmtKind::Define { target, value }
    } else if let Some(operator) = AssignOp::from_token(token_kind) {
        parser.advance();
        let value = parse_expr(parser, BindingPower::Default)?;
        StmtKind::Assign {
            target,
            operator,
            value,
        }
    } else {
        StmtKind::Expression(target)
    };

    Ok(Stmt::new(kind, parser.span_from(start)))
}

pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    parser.enter_nesting()?;
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut statements = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    parser.leave_nesting();

    Ok(Block {
        body: statements,
        span: parser.span_from(start),
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Return)?.span.start;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::new(StmtKind::Return(value), parser.span_from(start)))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::While)?.span.start;
    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Stmt::new(
        StmtKind::While { condition, body },
        parser.span_from(start),
    ))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_body = parse_block(parser)?;

    let mut elifs = Vec::new();
    while parser.current_token_kind() == TokenKind::Elif {
        let elif_start = parser.advance().span.start.clone();
        let condition = parse_expr(parser, BindingPower::Default)?;
        let body = parse_block(parser)?;
        elifs.push(ElifBranch {
            condition,
            body,
            span: parser.span_from(elif_start),
        });
    }

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        if parser.peek_kind(1) == TokenKind::If {
            parser.advance();
            return Err(parser.unexpected("`elif` instead of `else if`"));
        }
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::new(
        StmtKind::If(IfStmt {
            condition,
            then_body,
            elifs,
            else_body,
        }),
        parser.span_from(start),
    ))
}

/// `for name in iterable { ... }`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::For)?.span.start;

    let error = parser.unexpected("loop variable name");
    let token = parser.expect_error(TokenKind::Identifier, Some(error))?;
    let variable = Ident {
        value: token.value,
        span: token.span,
    };

    parser.expect(TokenKind::In)?;
    let iterable = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Stmt::new(
        StmtKind::For {
            variable,
            iterable,
            body,
        },
        parser.span_from(start),
    ))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let span = parser.expect(TokenKind::Break)?.span;
    Ok(Stmt::new(StmtKind::Break, span))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let span = parser.expect(TokenKind::Continue)?.span;
    Ok(Stmt::new(StmtKind::Continue, span))
}

/// `native name -> 'symbol'`
pub fn parse_native_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Native)?.span.start;
    let name = parser.expect_identifier()?;
    parser.expect(TokenKind::Arrow)?;

    let error = parser.unexpected("native symbol string");
    let symbol = parser.expect_error(TokenKind::String, Some(error))?.value;

    Ok(Stmt::new(
        StmtKind::Native { name, symbol },
        parser.span_from(start),
    ))
}

/// Nested function definitions inside blocks.
pub fn parse_fn_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let def = parse_fn_def(parser)?;
    let span = def.span.clone();

    Ok(Stmt::new(StmtKind::Function(def), span))
}
