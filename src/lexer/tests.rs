//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric, boolean, char and string literals
//! - Operators and punctuation
//! - The pull-based token stream
//! - Error cases

use rstest::rstest;

use super::{
    lexer::tokenize,
    stream::{TokenSource, TokenStream},
    tokens::TokenKind,
};
use crate::ast::types::NodeType;

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("and or mod not true false", Some("test.expr".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::And);
    assert_eq!(tokens[1].kind, TokenKind::Or);
    assert_eq!(tokens[2].kind, TokenKind::Mod);
    assert_eq!(tokens[3].kind, TokenKind::Not);
    assert_eq!(tokens[4].kind, TokenKind::Boolean);
    assert_eq!(tokens[4].value, "true");
    assert_eq!(tokens[5].kind, TokenKind::Boolean);
    assert_eq!(tokens[5].value, "false");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore android notice", None).unwrap();

    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, ["foo", "baz_123", "_underscore", "android", "notice", "EOF"]);
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 1.5e3", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Real);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[3].kind, TokenKind::Real);
    assert_eq!(tokens[3].value, "1.5e3");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings_and_chars() {
    let tokens = tokenize(r#""hello" "tab\there" "quote\"d" 'c' """#, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "quote\"d");
    assert_eq!(tokens[3].kind, TokenKind::Char);
    assert_eq!(tokens[3].value, "c");
    assert_eq!(tokens[4].kind, TokenKind::String);
    assert_eq!(tokens[4].value, "");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[rstest]
#[case("=", TokenKind::Equals)]
#[case("<>", TokenKind::NotEquals)]
#[case("<", TokenKind::Less)]
#[case("<=", TokenKind::LessEquals)]
#[case(">", TokenKind::Greater)]
#[case(">=", TokenKind::GreaterEquals)]
#[case("+", TokenKind::Plus)]
#[case("-", TokenKind::Dash)]
#[case("*", TokenKind::Star)]
#[case("/", TokenKind::Slash)]
#[case("(", TokenKind::OpenParen)]
#[case(")", TokenKind::CloseParen)]
#[case(",", TokenKind::Comma)]
fn test_tokenize_operator(#[case] source: &str, #[case] kind: TokenKind) {
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, kind);
    assert_eq!(tokens[0].value, source);
    assert_eq!(kind.to_string(), source);
}

#[test]
fn test_tokenize_mixed_expression() {
    let tokens = tokenize("x + 5 * (y - 3)", None).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        [
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Integer,
            TokenKind::Star,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Dash,
            TokenKind::Integer,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("ab <= 10", Some("test.expr".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[1].span.end.0, 5);
    assert_eq!(tokens[2].span.start.0, 6);
    assert_eq!(tokens[3].span.start.0, 8);
    assert_eq!(*tokens[3].span.start.1, "test.expr");
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  a\t+\n  b  ", None).unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("a + @", None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_literal_types() {
    assert_eq!(TokenKind::Integer.literal_type(), Some(NodeType::Integer));
    assert_eq!(TokenKind::Real.literal_type(), Some(NodeType::Real));
    assert_eq!(TokenKind::Boolean.literal_type(), Some(NodeType::Boolean));
    assert_eq!(TokenKind::Char.literal_type(), Some(NodeType::Char));
    assert_eq!(TokenKind::String.literal_type(), Some(NodeType::String));
    assert_eq!(TokenKind::Identifier.literal_type(), None);
    assert_eq!(TokenKind::Plus.literal_type(), None);
}

#[test]
fn test_stream_repeats_eof() {
    let tokens = tokenize("a", None).unwrap();
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = stream.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.span.start.0, 1);
    }
}

#[test]
fn test_stream_without_eof_synthesizes_one() {
    let mut tokens = tokenize("a b", None).unwrap();
    tokens.pop();
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().value, "a");
    assert_eq!(stream.next_token().value, "b");
    let eof = stream.next_token();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.span.start.0, 3);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}
