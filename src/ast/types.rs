//! Primitive type tags for expression nodes.
//!
//! The parser only copies these from literal tokens. Every other node starts
//! out `Unknown`; resolving it is the job of a later pass.

use std::fmt::Display;

/// Represents the primitive type of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeType {
    Integer,
    Real,
    Boolean,
    Char,
    String,
    #[default]
    Unknown,
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeType::Integer => "integer",
            NodeType::Real => "real",
            NodeType::Boolean => "boolean",
            NodeType::Char => "char",
            NodeType::String => "string",
            NodeType::Unknown => "unknown",
        };

        write!(f, "{}", name)
    }
}
