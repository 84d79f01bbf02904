//! Token cursor and the parse entry point.
//!
//! The parser owns the token vector produced by the lexer and walks it
//! with a single position. Reads never move past the trailing `EOF`
//! token, so lookahead at the end of input keeps returning `EOF`.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    ast::ast::{Ident, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::items::parse_item;

/// Deepest nesting of expressions and blocks accepted before parsing
/// stops with an error instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Arc<String>,
    /// Expressions and blocks currently open
    depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>, file: Arc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Arc::clone(&file)));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Kind of the token `offset` places ahead, `EOF` past the end.
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the consumed one. The
    /// position stays on `EOF` once it is reached.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        let token = &self.tokens[current];
        trace!(
            pos = current,
            kind = %token.kind,
            span_start = token.span.start.0,
            span_end = token.span.end.0,
            "advance"
        );
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Builds the error for the current token not matching `expected`.
    pub fn unexpected(&self, expected: impl Into<String>) -> Error {
        let token = self.current_token();
        let expected = expected.into();

        if token.kind == TokenKind::EOF {
            Error::new(
                ErrorImpl::UnexpectedEndOfInput { expected },
                token.span.start.clone(),
            )
        } else {
            Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    found: token.found(),
                },
                token.span.start.clone(),
            )
        }
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.unexpected(expected_kind.describe())),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    pub fn expect_identifier(&mut self) -> Result<Ident, Error> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(Ident {
            value: token.value,
            span: token.span,
        })
    }

    /// Whether the current token is the identifier `word`, for words that
    /// only act as keywords in one position (`impl`).
    pub fn at_contextual_keyword(&self, word: &str) -> bool {
        let token = self.current_token();
        token.kind == TokenKind::Identifier && token.value == word
    }

    /// Opens one nesting level, failing at the current token once
    /// [`MAX_NESTING_DEPTH`] levels are open.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// End of the most recently consumed token.
    pub fn previous_end(&self) -> Position {
        match self.pos.checked_sub(1) {
            Some(previous) => self.tokens[previous].span.end.clone(),
            None => Position(0, Arc::clone(&self.file)),
        }
    }

    /// Span from `start` to the end of the most recently consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.previous_end(),
        }
    }
}

/// Parses a comma separated sequence closed by `close`. The opening
/// delimiter must already be consumed. Trailing commas are rejected.
pub fn parse_comma_separated<T>(
    parser: &mut Parser,
    close: TokenKind,
    mut item: impl FnMut(&mut Parser) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let mut items = Vec::new();

    if parser.current_token_kind() != close {
        loop {
            items.push(item(parser)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(close)?;
    Ok(items)
}

/// `(a, b, c)`
pub fn parse_parameter_list(parser: &mut Parser) -> Result<Vec<Ident>, Error> {
    parser.expect(TokenKind::OpenParen)?;
    parse_comma_separated(parser, TokenKind::CloseParen, Parser::expect_identifier)
}

/// Parses a stream of tokens into a [`Program`].
///
/// The first error aborts the parse; no partial tree is returned.
pub fn parse(tokens: Vec<Token>, file: Arc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, Arc::clone(&file));

    let mut items = vec![];

    while parser.has_tokens() {
        let item = parse_item(&mut parser)?;
        debug!(
            kind = item.describe(),
            start = item.get_span().start.0,
            end = item.get_span().end.0,
            "parsed item"
        );
        items.push(item);
    }

    Ok(Program {
        items,
        span: Span {
            start: Position(0, file),
            end: parser.get_position(),
        },
    })
}
