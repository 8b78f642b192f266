//! Pull-based access to tokens.
//!
//! The parser never sees a token vector; it asks a [`TokenSource`] for the
//! next token, one at a time.

use std::vec::IntoIter;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Anything the parser can pull tokens from.
///
/// Once the input is exhausted a source must return an `EOF` token, and keep
/// returning one on every later call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A [`TokenSource`] over an already tokenized vector.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        // Reuse the lexer's EOF so errors at the end point at the right offset.
        let eof = match tokens.iter().rev().find(|t| t.kind == TokenKind::EOF) {
            Some(token) => token.clone(),
            None => {
                let end = tokens
                    .last()
                    .map(|t| t.span.end.clone())
                    .unwrap_or_else(Position::null);
                MK_TOKEN!(
                    TokenKind::EOF,
                    String::from("EOF"),
                    Span {
                        start: end.clone(),
                        end,
                    }
                )
            }
        };

        TokenStream {
            tokens: tokens.into_iter(),
            eof,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) if token.kind != TokenKind::EOF => token,
            _ => {
                // Anything after the first EOF is ignored.
                self.tokens = Vec::new().into_iter();
                self.eof.clone()
            }
        }
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}
