use crate::{
    ast::expressions::{ArmBody, BinaryOp, Expr, ExprKind, MatchArm, MatchExpr, Pair, UnaryOp},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, LOOKUPS},
    parser::{parse_comma_separated, parse_parameter_list, Parser},
    stmt::parse_block,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let expr = parse_expr_inner(parser, bp);
    parser.leave_nesting();
    expr
}

fn parse_expr_inner(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = LOOKUPS.nud_lookup.get(&token_kind) else {
        return Err(parser.unexpected("expression"));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, keep extending lhs
    while LOOKUPS.binding_power(parser.current_token_kind()) > bp {
        let token_kind = parser.current_token_kind();
        let Some(led) = LOOKUPS.led_lookup.get(&token_kind) else {
            return Err(parser.unexpected("operator"));
        };

        left = led(parser, left, LOOKUPS.binding_power(token_kind))?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let kind = match token.kind {
        TokenKind::Number => match token.value.parse() {
            Ok(value) => ExprKind::Number(value),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                ))
            }
        },
        TokenKind::String => ExprKind::String(token.value),
        TokenKind::True => ExprKind::Bool(true),
        TokenKind::False => ExprKind::Bool(false),
        _ => return Err(parser.unexpected("literal")),
    };

    parser.advance();
    Ok(Expr::new(kind, token.span))
}

/// Identifier followed by any number of `.name`, `(args)` and `(args)?`
/// suffixes, folded left to right.
pub fn parse_postfix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.get_position();
    let symbol = parser.expect_identifier()?;
    let mut expr = Expr::new(ExprKind::Symbol(symbol.value), symbol.span);

    loop {
        match parser.current_token_kind() {
            TokenKind::Dot => {
                parser.advance();
                let property = parser.expect_identifier()?;
                expr = Expr::new(
                    ExprKind::Member {
                        object: Box::new(expr),
                        property,
                    },
                    parser.span_from(start.clone()),
                );
            }
            TokenKind::OpenParen => {
                let arguments = parse_arguments(parser)?;
                let propagate = parser.current_token_kind() == TokenKind::Question;
                if propagate {
                    parser.advance();
                }
                expr = Expr::new(
                    ExprKind::Call {
                        callee: Box::new(expr),
                        arguments,
                        propagate,
                    },
                    parser.span_from(start.clone()),
                );
            }
            _ => break,
        }
    }

    Ok(expr)
}

/// `(expr, ...)` argument list of calls and `new`.
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenParen)?;
    parse_comma_separated(parser, TokenKind::CloseParen, |parser| {
        parse_expr(parser, BindingPower::Default)
    })
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let Some(operator) = BinaryOp::from_token(operator_token.kind) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("binary operator"),
                found: operator_token.found(),
            },
            operator_token.span.start,
        ));
    };

    let right = parse_expr(parser, bp)?;
    let span = left.span.to(&right.span);

    Ok(Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        },
        span,
    ))
}

/// `-x` and `!x`, binding tighter than every binary operator.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operator = match operator_token.kind {
        TokenKind::Not => UnaryOp::Not,
        _ => UnaryOp::Negate,
    };

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::new(
        ExprKind::Unary {
            operator,
            operand: Box::new(operand),
        },
        parser.span_from(operator_token.span.start),
    ))
}

/// `(expr)` is transparent: the inner expression is returned as is.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_list_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenBracket)?.span.start;
    let items = parse_comma_separated(parser, TokenKind::CloseBracket, |parser| {
        parse_expr(parser, BindingPower::Default)
    })?;

    Ok(Expr::new(ExprKind::List(items), parser.span_from(start)))
}

/// `{key: value, ...}`; in expression position a brace always opens a map.
pub fn parse_map_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;
    let pairs = parse_comma_separated(parser, TokenKind::CloseCurly, |parser| {
        let key = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Colon)?;
        let value = parse_expr(parser, BindingPower::Default)?;
        let span = key.span.to(&value.span);

        Ok(Pair { key, value, span })
    })?;

    Ok(Expr::new(ExprKind::Map(pairs), parser.span_from(start)))
}

/// `new Name(args)`
pub fn parse_new_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::New)?.span.start;
    let type_name = parser.expect_identifier()?;
    let arguments = parse_arguments(parser)?;

    Ok(Expr::new(
        ExprKind::New {
            type_name,
            arguments,
        },
        parser.span_from(start),
    ))
}

fn parse_match_arm(parser: &mut Parser) -> Result<MatchArm, Error> {
    // `case` or `default`
    let start = parser.advance().span.start.clone();
    let pattern = parse_expr(parser, BindingPower::Default)?;

    let body = match parser.current_token_kind() {
        TokenKind::Arrow => {
            parser.advance();
            ArmBody::Expr(Box::new(parse_expr(parser, BindingPower::Default)?))
        }
        TokenKind::OpenCurly => ArmBody::Block(parse_block(parser)?),
        _ => return Err(parser.unexpected("`->` or block")),
    };

    Ok(MatchArm {
        pattern,
        body,
        span: parser.span_from(start),
    })
}

/// `match x case p -> e case q { ... } default d -> e`
pub fn parse_match_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Match)?.span.start;
    let scrutinee = parse_expr(parser, BindingPower::Default)?;

    let mut cases = Vec::new();
    while parser.current_token_kind() == TokenKind::Case {
        cases.push(parse_match_arm(parser)?);
    }

    let default = if parser.current_token_kind() == TokenKind::Default {
        Some(Box::new(parse_match_arm(parser)?))
    } else {
        None
    };

    Ok(Expr::new(
        ExprKind::Match(MatchExpr {
            scrutinee: Box::new(scrutinee),
            cases,
            default,
        }),
        parser.span_from(start),
    ))
}

/// `lambda (params) -> expr`
pub fn parse_lambda_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Lambda)?.span.start;
    let parameters = parse_parameter_list(parser)?;
    parser.expect(TokenKind::Arrow)?;
    let body = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::new(
        ExprKind::Lambda {
            parameters,
            body: Box::new(body),
        },
        parser.span_from(start),
    ))
}

/// `fn (params) { ... }` in expression position.
pub fn parse_anonymous_fn_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Fn)?.span.start;
    let parameters = parse_parameter_list(parser)?;
    let body = parse_block(parser)?;

    Ok(Expr::new(
        ExprKind::AnonymousFn { parameters, body },
        parser.span_from(start),
    ))
}
