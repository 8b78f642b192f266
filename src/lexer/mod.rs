//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts expression text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - The pull interface the parser reads tokens through

pub mod lexer;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
