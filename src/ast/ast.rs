use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BinaryExpr, FnCallExpr, IdentifierExpr, LiteralExpr, UnaryExpr},
    types::NodeType,
};

/// An expression node.
///
/// Every non-leaf variant owns its children, so a tree is released as a whole
/// when its root is dropped.
///
/// `==` compares spans too, so `(a + b)` and `a + b` are not equal. Use
/// [`Expr::same_shape`] to compare trees only.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Identifier(IdentifierExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    FnCall(FnCallExpr),
}

/// Visitor Trait
///
/// One method per expression variant. Adding a variant to [`Expr`] breaks
/// every implementor until it handles the new case.
pub trait Visitor {
    type Output;

    fn visit_literal(&mut self, literal: &LiteralExpr) -> Self::Output;
    fn visit_identifier(&mut self, identifier: &IdentifierExpr) -> Self::Output;
    fn visit_unary(&mut self, unary: &UnaryExpr) -> Self::Output;
    fn visit_binary(&mut self, binary: &BinaryExpr) -> Self::Output;
    fn visit_fn_call(&mut self, call: &FnCallExpr) -> Self::Output;
}

impl Expr {
    /// Dispatches to the visitor method for this variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Literal(literal) => visitor.visit_literal(literal),
            Expr::Identifier(identifier) => visitor.visit_identifier(identifier),
            Expr::Unary(unary) => visitor.visit_unary(unary),
            Expr::Binary(binary) => visitor.visit_binary(binary),
            Expr::FnCall(call) => visitor.visit_fn_call(call),
        }
    }

    /// Structural equality: variants, operators, values and type slots must
    /// match, positions are ignored.
    pub fn same_shape(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Literal(a), Expr::Literal(b)) => {
                a.token.kind == b.token.kind && a.value() == b.value() && a.type_ == b.type_
            }
            (Expr::Identifier(a), Expr::Identifier(b)) => {
                a.name.value == b.name.value && a.type_ == b.type_
            }
            (Expr::Unary(a), Expr::Unary(b)) => {
                a.operator.kind == b.operator.kind
                    && a.type_ == b.type_
                    && a.expr.same_shape(&b.expr)
            }
            (Expr::Binary(a), Expr::Binary(b)) => {
                a.operator.kind == b.operator.kind
                    && a.type_ == b.type_
                    && a.left.same_shape(&b.left)
                    && a.right.same_shape(&b.right)
            }
            (Expr::FnCall(a), Expr::FnCall(b)) => {
                a.name.value == b.name.value
                    && a.type_ == b.type_
                    && a.arguments.len() == b.arguments.len()
                    && a.arguments
                        .iter()
                        .zip(&b.arguments)
                        .all(|(x, y)| x.same_shape(y))
            }
            _ => false,
        }
    }

    /// Returns the primitive type slot of the node.
    pub fn get_type(&self) -> NodeType {
        match self {
            Expr::Literal(literal) => literal.type_,
            Expr::Identifier(identifier) => identifier.type_,
            Expr::Unary(unary) => unary.type_,
            Expr::Binary(binary) => binary.type_,
            Expr::FnCall(call) => call.type_,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(literal) => &literal.token.span,
            Expr::Identifier(identifier) => &identifier.name.span,
            Expr::Unary(unary) => &unary.span,
            Expr::Binary(binary) => &binary.span,
            Expr::FnCall(call) => &call.span,
        }
    }
}

impl From<LiteralExpr> for Expr {
    fn from(literal: LiteralExpr) -> Self {
        Expr::Literal(literal)
    }
}

impl From<IdentifierExpr> for Expr {
    fn from(identifier: IdentifierExpr) -> Self {
        Expr::Identifier(identifier)
    }
}

impl From<UnaryExpr> for Expr {
    fn from(unary: UnaryExpr) -> Self {
        Expr::Unary(unary)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(binary: BinaryExpr) -> Self {
        Expr::Binary(binary)
    }
}

impl From<FnCallExpr> for Expr {
    fn from(call: FnCallExpr) -> Self {
        Expr::FnCall(call)
    }
}

/// Prefix notation, ignoring spans: `(+ a (* b 2))`, `(call f x)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(literal) => match literal.type_ {
                NodeType::String => write!(f, "{:?}", literal.value()),
                NodeType::Char => write!(f, "'{}'", literal.value()),
                _ => write!(f, "{}", literal.value()),
            },
            Expr::Identifier(identifier) => write!(f, "{}", identifier.name.value),
            Expr::Unary(unary) => write!(f, "({} {})", unary.operator.kind, unary.expr),
            Expr::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.operator.kind, binary.left, binary.right
            ),
            Expr::FnCall(call) => {
                write!(f, "(call {}", call.name.value)?;
                for argument in &call.arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
