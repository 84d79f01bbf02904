//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Comments
//! - Error cases

use pretty_assertions::assert_eq;

use super::{lexer::tokenize, tokens::TokenKind};
use crate::errors::errors::{ErrorImpl, ErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.watt".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "fn type unit trait return while if elif else for in break continue native import with new match case default lambda true false and or impls";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Fn,
            TokenKind::Type,
            TokenKind::Unit,
            TokenKind::Trait,
            TokenKind::Return,
            TokenKind::While,
            TokenKind::If,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::In,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Native,
            TokenKind::Import,
            TokenKind::With,
            TokenKind::New,
            TokenKind::Match,
            TokenKind::Case,
            TokenKind::Default,
            TokenKind::Lambda,
            TokenKind::True,
            TokenKind::False,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Impls,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase impl iffy fnord";
    let tokens = tokenize(source, Some("test.watt".to_string())).unwrap();

    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "impl", "iffy", "fnord", "EOF"]
    );
    assert!(tokens[..8].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 100", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "100");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_no_fractions() {
    assert_eq!(
        kinds("1.5"),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Number, TokenKind::EOF]
    );
    assert_eq!(
        kinds("1..5"),
        vec![TokenKind::Number, TokenKind::DotDot, TokenKind::Number, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_number_overflow() {
    let error = tokenize("x := 99999999999999999999", None).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize("'hello' 'world' 'multiple words' ''", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].value, "");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r"'it\'s' 'a\\b' 'line\nnext\ttab' '\q'", None).unwrap();

    assert_eq!(tokens[0].value, "it's");
    assert_eq!(tokens[1].value, "a\\b");
    assert_eq!(tokens[2].value, "line\nnext\ttab");
    assert_eq!(tokens[3].value, "\\q");
}

#[test]
fn test_string_span_covers_quotes() {
    let tokens = tokenize(r"x 'a\'b'", None).unwrap();

    assert_eq!(tokens[1].span.start.0, 2);
    assert_eq!(tokens[1].span.end.0, 8);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("s := 'abc\n'", None).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_tokenize_operators() {
    let source = "== = != ! <= < >= > := : -> - .. . += -= *= /= + * / % ? , ( ) [ ] { }";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::LessEquals,
            TokenKind::Less,
            TokenKind::GreaterEquals,
            TokenKind::Greater,
            TokenKind::Define,
            TokenKind::Colon,
            TokenKind::Arrow,
            TokenKind::Dash,
            TokenKind::DotDot,
            TokenKind::Dot,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::Plus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Question,
            TokenKind::Comma,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_greedy_operators_without_spaces() {
    assert_eq!(
        kinds("a:=b->c..d!=e"),
        vec![
            TokenKind::Identifier,
            TokenKind::Define,
            TokenKind::Identifier,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::DotDot,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "x // line comment\n/* block\n comment */ y /* a /* b */ z";

    let tokens = tokenize(source, None).unwrap();
    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["x", "y", "z", "EOF"]);
}

#[test]
fn test_unterminated_comment() {
    let error = tokenize("x /* never closed", None).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnterminatedComment);
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("fn  foo\n(", Some("span.watt".to_string())).unwrap();

    assert_eq!((tokens[0].span.start.0, tokens[0].span.end.0), (0, 2));
    assert_eq!((tokens[1].span.start.0, tokens[1].span.end.0), (4, 7));
    assert_eq!((tokens[2].span.start.0, tokens[2].span.end.0), (8, 9));
    assert_eq!(tokens[3].span.start.0, 9);
    assert_eq!(tokens[0].span.start.1.as_str(), "span.watt");
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("x := 1 @ 2", None).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position().0, 7);
    assert_eq!(error.kind(), ErrorKind::Lex);
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  // nothing\n"), vec![TokenKind::EOF]);
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x", None).unwrap();
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}
