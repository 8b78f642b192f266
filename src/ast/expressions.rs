use crate::{lexer::tokens::Token, Span};

use super::{ast::Expr, types::NodeType};

// LITERALS

/// Literal Expression
/// Represents an integer, real, boolean, char or string literal in the AST.
///
/// The type is copied from the token kind when the node is built.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub token: Token,
    pub type_: NodeType,
}

impl LiteralExpr {
    pub fn new(token: Token) -> Self {
        let type_ = token.kind.literal_type().unwrap_or_default();
        LiteralExpr { token, type_ }
    }

    pub fn value(&self) -> &str {
        &self.token.value
    }
}

/// Identifier Expression
/// Represents a reference to a named value in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: Token,
    pub type_: NodeType,
}

impl IdentifierExpr {
    pub fn new(name: Token) -> Self {
        IdentifierExpr {
            name,
            type_: NodeType::Unknown,
        }
    }
}

// COMPLEX

/// Unary Expression
/// Represents `+`, `-` or `not` applied to a single operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub expr: Box<Expr>,
    pub type_: NodeType,
    pub span: Span,
}

impl UnaryExpr {
    pub fn new(operator: Token, expr: Expr) -> Self {
        let span = Span {
            start: operator.span.start.clone(),
            end: expr.get_span().end.clone(),
        };

        UnaryExpr {
            operator,
            expr: Box::new(expr),
            type_: NodeType::Unknown,
            span,
        }
    }
}

/// Binary Expression
/// Represents an operation between two expressions in the AST.
///
/// `left` is always the operand that appeared first in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub type_: NodeType,
    pub span: Span,
}

impl BinaryExpr {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        let span = Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        };

        BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            type_: NodeType::Unknown,
            span,
        }
    }
}

/// Function Call Expression
/// Represents a call of a named function with zero or more arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct FnCallExpr {
    pub name: Token,
    pub arguments: Vec<Expr>,
    pub type_: NodeType,
    pub span: Span,
}

impl FnCallExpr {
    /// `close` is the `)` ending the argument list.
    pub fn new(name: Token, arguments: Vec<Expr>, close: &Token) -> Self {
        let span = Span {
            start: name.span.start.clone(),
            end: close.span.end.clone(),
        };

        FnCallExpr {
            name,
            arguments,
            type_: NodeType::Unknown,
            span,
        }
    }
}
