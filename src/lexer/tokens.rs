use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{ast::types::NodeType, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("mod", TokenKind::Mod);
        map.insert("not", TokenKind::Not);
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,

    // Literals
    Integer,
    Real,
    Boolean,
    Char,
    String,

    OpenParen,
    CloseParen,
    Comma,

    Equals,    // =
    NotEquals, // <>

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Or,

    Star,
    Slash,
    And,
    Mod,

    Not,
}

impl TokenKind {
    /// The primitive type a literal of this kind carries, `None` for non-literals.
    pub fn literal_type(&self) -> Option<NodeType> {
        match self {
            TokenKind::Integer => Some(NodeType::Integer),
            TokenKind::Real => Some(NodeType::Real),
            TokenKind::Boolean => Some(NodeType::Boolean),
            TokenKind::Char => Some(NodeType::Char),
            TokenKind::String => Some(NodeType::String),
            _ => None,
        }
    }

    /// Source text of operators and punctuation.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Equals => "=",
            TokenKind::NotEquals => "<>",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Or => "or",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::And => "and",
            TokenKind::Mod => "mod",
            TokenKind::Not => "not",
            _ => return None,
        };

        Some(symbol)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.symbol_only() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} ({})", self.kind, self.value)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    fn symbol_only(&self) -> bool {
        !self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Real,
            TokenKind::Boolean,
            TokenKind::Char,
            TokenKind::String,
        ])
    }
}
