//! A minimal XML element tree.
//!
//! An [`Element`] has a name, ordered attributes and ordered content (child
//! elements and text). It renders itself as indented XML through `Display`.

use std::fmt::{self, Display, Write};

/// One item of an element's content.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

/// A piece handed to [`Element::create`].
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Appended as a child element.
    Child(Element),
    /// Set as an attribute, replacing any attribute of the same name.
    Attribute(String, String),
    /// Set as the element's text, replacing all existing content.
    Text(String),
}

impl From<Element> for Part {
    fn from(element: Element) -> Self {
        Part::Child(element)
    }
}

impl<N: Into<String>, V: Display> From<(N, V)> for Part {
    fn from((name, value): (N, V)) -> Self {
        Part::Attribute(name.into(), value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    attributes: Vec<(String, String)>,
    content: Vec<Content>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: vec![],
            content: vec![],
        }
    }

    /// Builds an element from parts, applied in order.
    pub fn create(name: impl Into<String>, parts: Vec<Part>) -> Self {
        let mut element = Element::new(name);

        for part in parts {
            match part {
                Part::Child(child) => element.add(child),
                Part::Attribute(name, value) => element.set_attribute(name, value),
                Part::Text(value) => element.set_text(value),
            }
        }

        element
    }

    pub fn add(&mut self, child: Element) {
        self.content.push(Content::Element(child));
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.content = vec![Content::Text(value.into())];
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn content(&self) -> &[Content] {
        &self.content
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.content.iter().filter_map(|content| match content {
            Content::Element(element) => Some(element),
            Content::Text(_) => None,
        })
    }

    /// Concatenated text content, `None` if there is none.
    pub fn text(&self) -> Option<String> {
        let mut texts = self.content.iter().filter_map(|content| match content {
            Content::Text(text) => Some(text.as_str()),
            Content::Element(_) => None,
        });

        let first = texts.next()?;
        Some(texts.fold(first.to_string(), |acc, text| acc + text))
    }

    fn write_indented(&self, f: &mut impl Write, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);

        write!(f, "{}<{}", indent, self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value, true))?;
        }

        if self.content.is_empty() {
            return write!(f, " />");
        }

        if let [Content::Text(text)] = self.content.as_slice() {
            return write!(f, ">{}</{}>", escape(text, false), self.name);
        }

        write!(f, ">")?;
        for content in &self.content {
            writeln!(f)?;
            match content {
                Content::Element(child) => child.write_indented(f, depth + 1)?,
                Content::Text(text) => write!(f, "{}  {}", indent, escape(text, false))?,
            }
        }
        write!(f, "\n{}</{}>", indent, self.name)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

fn escape(value: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
