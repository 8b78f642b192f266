//! Parser module for building an expression tree.
//!
//! This module contains the recursive-descent parser that turns a stream of
//! tokens into an [`Expr`](crate::ast::ast::Expr). Each precedence level is a
//! function that calls the next tighter-binding one:
//!
//! - equality and comparison apply at most one operator
//! - term and factor fold left over any number of operators
//! - unary `+`/`-` recurse to the right; `not` binds at the primary level
//!
//! Any mismatch is reported as a syntax error immediately; there is no
//! recovery.

pub mod expr;
pub mod parser;
