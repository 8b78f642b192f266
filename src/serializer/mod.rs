//! Serialization of expression trees into XML documents.
//!
//! - document: the element tree and its XML rendering
//! - xml: the visitor mapping each expression node to an element

pub mod document;
pub mod xml;

#[cfg(test)]
mod tests;
