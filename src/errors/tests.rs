//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::sync::Arc;

fn at(offset: u32) -> Position {
    Position(offset, Arc::new("test.watt".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Lex);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "identifier".to_string(),
            found: "{".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.watt");
}

#[test]
fn test_error_kinds() {
    let lex = [
        ErrorImpl::UnterminatedString,
        ErrorImpl::UnterminatedComment,
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
    ];
    for error_impl in lex {
        assert_eq!(Error::new(error_impl, at(0)).kind(), ErrorKind::Lex);
    }

    let unexpected = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`)`".to_string(),
            found: "{".to_string(),
        },
        at(0),
    );
    assert_eq!(unexpected.kind(), ErrorKind::UnexpectedToken);

    let eof = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "`}`".to_string(),
        },
        at(0),
    );
    assert_eq!(eof.kind(), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(eof.get_error_name(), "UnexpectedEndOfInput");

    let nested = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, at(0));
    assert_eq!(nested.kind(), ErrorKind::NestingTooDeep);
    assert_eq!(nested.get_error_name(), "NestingTooDeep");
    assert_eq!(nested.to_string(), "nesting deeper than 128 levels at test.watt:0");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "identifier".to_string(),
            found: "}".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "expected identifier, found `}`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "`)`".to_string(),
        },
        at(7),
    );

    assert_eq!(
        error.to_string(),
        "unexpected end of input: expected `)` at test.watt:7"
    );
}

#[test]
fn test_line_column() {
    let source = "x := 1\ny := @";
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(12),
    );

    assert_eq!(error.line_column(source), Some((2, 6)));
}
