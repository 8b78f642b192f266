//! Parser state and entry point.
//!
//! The parser holds exactly two tokens: `current`, which has not been consumed
//! yet, and `previous`, the last one consumed. Tokens are pulled from the
//! [`TokenSource`] one at a time as they are matched.

use tracing::{debug, trace};

use crate::{
    ast::ast::Expr,
    errors::errors::Error,
    lexer::{
        stream::TokenSource,
        tokens::{Token, TokenKind},
    },
};

use super::expr::parse_expr;

/// How many parentheses, prefix operators and call arguments may enclose each
/// other before parsing gives up. Every level costs several stack frames, so
/// the bound keeps deeply nested input from overflowing the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The main parser structure that maintains parsing state.
pub struct Parser<S: TokenSource> {
    /// Where further tokens come from
    source: S,
    /// The next token, not yet consumed
    current: Token,
    /// The last consumed token
    previous: Token,
    /// Nesting levels currently open, see [`MAX_NESTING_DEPTH`]
    depth: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser, priming `current` with the first token of `source`.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();

        Parser {
            previous: current.clone(),
            current,
            source,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the last consumed token.
    pub fn previous(&self) -> &Token {
        &self.previous
    }

    /// Consumes the current token if its kind is one of `kinds`.
    ///
    /// Returns false and leaves the position unchanged otherwise. This is the
    /// only operation that advances the parser.
    pub fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        if !self.current.is_one_of_many(kinds) {
            return false;
        }

        let next = self.source.next_token();
        self.previous = std::mem::replace(&mut self.current, next);
        trace!(token = %self.previous, "consumed");
        true
    }

    /// Like `match_token`, but never consumes.
    pub fn peek(&self, kinds: &[TokenKind]) -> bool {
        self.current.is_one_of_many(kinds)
    }

    /// Consumes a token of `kind`, or fails with a syntax error carrying `message`.
    ///
    /// # Returns
    ///
    /// The consumed token.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.match_token(&[kind]) {
            Ok(self.previous.clone())
        } else {
            Err(Error::unexpected(&self.current, message))
        }
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Fails at the current token once [`MAX_NESTING_DEPTH`] levels are open.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            debug!(token = %self.current, depth = self.depth, "nesting limit reached");
            return Err(Error::unexpected(&self.current, "expression nested too deeply"));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Checks whether the input is exhausted.
    pub fn is_at_end(&self) -> bool {
        self.peek(&[TokenKind::EOF])
    }
}

/// Parses one expression from `source`.
///
/// The whole input must be consumed: anything other than `EOF` after a
/// complete expression is a syntax error. No partial tree is ever returned.
pub fn parse<S: TokenSource>(source: S) -> Result<Expr, Error> {
    let mut parser = Parser::new(source);

    let expr = parse_expr(&mut parser)?;

    if !parser.is_at_end() {
        debug!(token = %parser.current_token(), "trailing input after expression");
        return Err(Error::unexpected(parser.current_token(), "end of input"));
    }

    debug!(expr = %expr, "parsed expression");
    Ok(expr)
}
