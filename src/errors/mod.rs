//! Error types and error handling for the crate.
//!
//! This module defines the errors raised while turning an expression into a
//! document:
//!
//! - Unrecognised input from the lexer
//! - Syntax errors from the parser, carrying the offending token
//! - Write failures from the serializer

pub mod errors;
