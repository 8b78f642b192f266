use std::{fs, path::Path};

use tracing::{debug, info};

use crate::{
    ast::{
        ast::{Expr, Visitor},
        expressions::{BinaryExpr, FnCallExpr, IdentifierExpr, LiteralExpr, UnaryExpr},
    },
    errors::errors::Error,
};

use super::document::{Element, Part};

/// Name of the element every saved document is wrapped in.
pub const ROOT_ELEMENT: &str = "Expression";

/// Turns an expression tree into an [`Element`] tree.
///
/// | node       | element        | attributes          | children      |
/// |------------|----------------|---------------------|---------------|
/// | literal    | `Literal`      | `value`, `type`     |               |
/// | identifier | `Identifier`   | `value`, `type`     |               |
/// | unary      | `Unary`        | `Operator`, `Type`  | operand       |
/// | binary     | `Binary`       | `Operator`, `Type`  | left, right   |
/// | call       | `FunctionCall` | `name`, `Type`      | each argument |
#[derive(Debug, Default)]
pub struct ExprXml;

impl ExprXml {
    pub fn new() -> Self {
        ExprXml
    }

    /// Visits `expr` and wraps the result in the root element.
    pub fn document(&mut self, expr: &Expr) -> Element {
        wrap(expr.accept(self))
    }

    /// Writes `node`, wrapped in the root element, to `path`.
    ///
    /// Any existing file is overwritten. The text is written in a single call.
    pub fn save_to(&self, path: impl AsRef<Path>, node: Element) -> Result<(), Error> {
        let path = path.as_ref();
        let text = wrap(node).to_string();

        fs::write(path, text.as_bytes()).map_err(|cause| {
            debug!(path = %path.display(), error = %cause, "write failed");
            Error::io(path, cause)
        })?;

        info!(path = %path.display(), bytes = text.len(), "wrote expression document");
        Ok(())
    }
}

/// Wraps a serialized node in the [`ROOT_ELEMENT`] document element.
pub fn wrap(node: Element) -> Element {
    Element::create(ROOT_ELEMENT, vec![node.into()])
}

impl Visitor for ExprXml {
    type Output = Element;

    fn visit_literal(&mut self, literal: &LiteralExpr) -> Element {
        Element::create(
            "Literal",
            vec![("value", literal.value()).into(), ("type", literal.type_).into()],
        )
    }

    fn visit_identifier(&mut self, identifier: &IdentifierExpr) -> Element {
        Element::create(
            "Identifier",
            vec![
                ("value", &identifier.name.value).into(),
                ("type", identifier.type_).into(),
            ],
        )
    }

    fn visit_unary(&mut self, unary: &UnaryExpr) -> Element {
        Element::create(
            "Unary",
            vec![
                ("Operator", unary.operator.kind).into(),
                ("Type", unary.type_).into(),
                Part::Child(unary.expr.accept(self)),
            ],
        )
    }

    fn visit_binary(&mut self, binary: &BinaryExpr) -> Element {
        Element::create(
            "Binary",
            vec![
                ("Operator", binary.operator.kind).into(),
                ("Type", binary.type_).into(),
                Part::Child(binary.left.accept(self)),
                Part::Child(binary.right.accept(self)),
            ],
        )
    }

    fn visit_fn_call(&mut self, call: &FnCallExpr) -> Element {
        let mut parts: Vec<Part> = vec![
            ("name", &call.name.value).into(),
            ("Type", call.type_).into(),
        ];
        parts.extend(call.arguments.iter().map(|argument| Part::Child(argument.accept(self))));

        Element::create("FunctionCall", parts)
    }
}
