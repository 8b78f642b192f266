/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The `Expr` sum type and the visitor trait over it
/// - expressions: Definitions for each expression node
/// - types: Primitive type tags carried by nodes
pub mod ast;
pub mod expressions;
pub mod types;
