use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text matched at the lexer's position. Handlers are
/// responsible for advancing past it.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(source: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        // Patterns are literals below; a bad one is a bug caught by the lexer tests.
        regex: Regex::new(&format!(r"\A(?:{})", source)).unwrap(),
        handler,
    }
}

lazy_static! {
    /// Tried in order; multi-character operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"\s+", skip_handler),
        pattern(r"//[^\n]*", skip_handler),
        pattern(r"/\*(?s:.*?)\*/", skip_handler),
        pattern(r"/\*", unterminated_comment_handler),
        pattern(r"[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern(r"[0-9]+", number_handler),
        pattern(r"'(?:[^'\\\n]|\\.)*'", string_handler),
        pattern(r"'", unterminated_string_handler),
        pattern(r"==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern(r"!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern(r"<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        pattern(r">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        pattern(r":=", MK_DEFAULT_HANDLER!(TokenKind::Define, ":=")),
        pattern(r"->", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->")),
        pattern(r"\.\.", MK_DEFAULT_HANDLER!(TokenKind::DotDot, "..")),
        pattern(r"\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=")),
        pattern(r"-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=")),
        pattern(r"\*=", MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=")),
        pattern(r"/=", MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=")),
        pattern(r"\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern(r"\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern(r"\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern(r"\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern(r"\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern(r"\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern(r"=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern(r"!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern(r"<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern(r">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern(r"\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        pattern(r":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern(r"\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        pattern(r",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern(r"\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern(r"-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern(r"/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern(r"\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        pattern(r"%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    file: Arc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Arc::clone(&self.file))
    }

    /// Span of the `len` bytes starting at the current position.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Arc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn unterminated_comment_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedComment, lexer.position()))
}

fn unterminated_string_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, lexer.position()))
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    if matched.parse::<i64>().is_err() {
        return Err(Error::new(
            ErrorImpl::NumberParseError {
                token: matched.to_string(),
            },
            lexer.position(),
        ));
    }

    lexer.push(MK_TOKEN!(TokenKind::Number, matched.to_string(), lexer.span_of(matched.len())));
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let string_literal = &matched[1..matched.len() - 1];

    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        // The pattern guarantees every backslash is followed by a character.
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some('\\') => result.push('\\'),
            Some('\'') => result.push('\''),
            Some('"') => result.push('"'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::String, result, lexer.span_of(matched.len())));
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, String::from(matched), lexer.span_of(matched.len())));
    lexer.advance_n(matched.len());
    Ok(())
}

/// Converts source text into tokens, ending with an `EOF` token.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let found = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remainder).map(|m| (pattern.handler, m.as_str())));

        match found {
            Some((handler, matched)) => {
                trace!(pos = lex.pos, len = matched.len(), "lex");
                handler(&mut lex, matched)?
            }
            None => {
                let token = remainder.chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, lex.position()));
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), lex.span_of(0)));
    debug!(file = %lex.file, tokens = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
