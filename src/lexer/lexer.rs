use std::rc::Rc;

use regex::Regex;
use tracing::trace;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    /// Builds a pattern anchored at the lexer's current position.
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        // Patterns are fixed at compile time; a bad one is a programming error.
        let regex = Regex::new(&format!("^(?:{})", pattern)).expect("invalid token pattern");
        RegexPattern { regex, handler }
    }
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            patterns: vec![
                RegexPattern::new("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
                RegexPattern::new("[0-9]+\\.[0-9]+([eE][+-]?[0-9]+)?", real_handler),
                RegexPattern::new("[0-9]+", integer_handler),
                RegexPattern::new("\\s+", skip_handler),
                RegexPattern::new("\"([^\"\\\\]|\\\\.)*\"", string_handler),
                RegexPattern::new("'[^']'", char_handler),
                RegexPattern::new("<>", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "<>")),
                RegexPattern::new("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
                RegexPattern::new(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
                RegexPattern::new("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
                RegexPattern::new(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
                RegexPattern::new("=", MK_DEFAULT_HANDLER!(TokenKind::Equals, "=")),
                RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
                RegexPattern::new("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
                RegexPattern::new("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
                RegexPattern::new("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
                RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
                RegexPattern::new("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
                RegexPattern::new(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, value = %token.value, "lexed token");
        self.tokens.push(token);
    }

    /// Span of `len` bytes starting at the current position.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

fn integer_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let span = lexer.span_of(matched.len());

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Integer, matched, span));
}

fn real_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let span = lexer.span_of(matched.len());

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Real, matched, span));
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let span = lexer.span_of(matched.len());
    let value = unescape(&matched[1..matched.len() - 1]);

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::String, value, span));
}

fn char_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let span = lexer.span_of(matched.len());
    let value = matched.trim_matches('\'').to_string();

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Char, value, span));
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = lexer.matched(regex);
    let span = lexer.span_of(value.len());
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(kind, value, span));
}

fn unescape(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            // Unknown escapes keep the backslash
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source.to_string(), file);
    let patterns = lex.patterns.clone();

    while !lex.at_eof() {
        let pattern = patterns
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    Position(lex.pos as u32, Rc::clone(&lex.file)),
                ));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}
