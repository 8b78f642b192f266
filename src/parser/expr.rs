//! Grammar rules, one function per precedence level.
//!
//! ```text
//! expression    = equality
//! equality      = comparison [ ("=" | "<>") comparison ]
//! comparison    = term [ ("<" | "<=" | ">" | ">=") term ]
//! term          = factor { ("+" | "-" | "or") factor }
//! factor        = unary { ("*" | "/" | "and" | "mod") unary }
//! unary         = ("+" | "-") unary | primary
//! primary       = function-call | IDENTIFIER | literal | "(" expression ")" | "not" primary
//! function-call = IDENTIFIER "(" [ expression { "," expression } ] ")"
//! ```
//!
//! Parenthesized expressions, prefix operators and call arguments each open a
//! nesting level through [`Parser::nested`].

use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, FnCallExpr, IdentifierExpr, LiteralExpr, UnaryExpr},
    },
    errors::errors::Error,
    lexer::{stream::TokenSource, tokens::TokenKind},
};

use super::parser::Parser;

const LITERALS: [TokenKind; 5] = [
    TokenKind::Integer,
    TokenKind::Real,
    TokenKind::Boolean,
    TokenKind::Char,
    TokenKind::String,
];

pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parse_equality(parser)
}

// Relational levels take at most one operator: `a = b = c` leaves the second `=` unconsumed.

pub fn parse_equality<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let expr = parse_comparison(parser)?;

    if parser.match_token(&[TokenKind::Equals, TokenKind::NotEquals]) {
        let operator = parser.previous().clone();
        let right = parse_comparison(parser)?;
        return Ok(BinaryExpr::new(expr, operator, right).into());
    }

    Ok(expr)
}

pub fn parse_comparison<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let expr = parse_term(parser)?;

    if parser.match_token(&[
        TokenKind::Less,
        TokenKind::LessEquals,
        TokenKind::Greater,
        TokenKind::GreaterEquals,
    ]) {
        let operator = parser.previous().clone();
        let right = parse_term(parser)?;
        return Ok(BinaryExpr::new(expr, operator, right).into());
    }

    Ok(expr)
}

pub fn parse_term<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let mut expr = parse_factor(parser)?;

    while parser.match_token(&[TokenKind::Plus, TokenKind::Dash, TokenKind::Or]) {
        let operator = parser.previous().clone();
        let right = parse_factor(parser)?;
        expr = BinaryExpr::new(expr, operator, right).into();
    }

    Ok(expr)
}

pub fn parse_factor<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let mut expr = parse_unary(parser)?;

    while parser.match_token(&[TokenKind::Star, TokenKind::Slash, TokenKind::And, TokenKind::Mod]) {
        let operator = parser.previous().clone();
        let right = parse_unary(parser)?;
        expr = BinaryExpr::new(expr, operator, right).into();
    }

    Ok(expr)
}

pub fn parse_unary<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    if parser.match_token(&[TokenKind::Plus, TokenKind::Dash]) {
        let operator = parser.previous().clone();
        let operand = parser.nested(parse_unary)?;
        return Ok(UnaryExpr::new(operator, operand).into());
    }

    parse_primary(parser)
}

pub fn parse_primary<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    if parser.match_token(&[TokenKind::Identifier]) {
        if parser.peek(&[TokenKind::OpenParen]) {
            return parse_fn_call(parser);
        }
        return Ok(IdentifierExpr::new(parser.previous().clone()).into());
    }

    if parser.match_token(&LITERALS) {
        return Ok(LiteralExpr::new(parser.previous().clone()).into());
    }

    if parser.match_token(&[TokenKind::Not]) {
        let operator = parser.previous().clone();
        let operand = parser.nested(parse_primary)?;
        return Ok(UnaryExpr::new(operator, operand).into());
    }

    parser.expect(TokenKind::OpenParen, "Expecting identifier or literal")?;
    let expr = parser.nested(parse_expr)?;
    parser.expect(TokenKind::CloseParen, "Expecting ')'")?;

    Ok(expr)
}

/// Parses the argument list of a call whose name was just consumed.
pub fn parse_fn_call<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let name = parser.previous().clone();
    parser.expect(TokenKind::OpenParen, "Expecting '(' after function name")?;

    let mut arguments = vec![];
    if !parser.peek(&[TokenKind::CloseParen]) {
        arguments.push(parser.nested(parse_expr)?);
        while parser.match_token(&[TokenKind::Comma]) {
            arguments.push(parser.nested(parse_expr)?);
        }
    }

    let close = parser.expect(TokenKind::CloseParen, "Expecting ')' after function arguments")?;

    Ok(FnCallExpr::new(name, arguments, &close).into())
}
