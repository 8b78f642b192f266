//! Unit tests for the document tree and the expression serializer.

use super::{
    document::{Content, Element, Part},
    xml::{wrap, ExprXml, ROOT_ELEMENT},
};
use crate::parse_expression;

fn serialize(source: &str) -> Element {
    let expr = parse_expression(source, None).unwrap();
    expr.accept(&mut ExprXml::new())
}

#[test]
fn test_create_dispatches_parts() {
    let element = Element::create(
        "Node",
        vec![
            ("a", 1).into(),
            Element::new("Child").into(),
            ("b", "two").into(),
        ],
    );

    assert_eq!(element.attribute("a"), Some("1"));
    assert_eq!(element.attribute("b"), Some("two"));
    assert_eq!(element.children().count(), 1);
    assert_eq!(element.text(), None);
}

#[test]
fn test_create_replaces_attribute_in_place() {
    let element = Element::create(
        "Node",
        vec![("a", "1").into(), ("b", "2").into(), ("a", "3").into()],
    );

    let attributes: Vec<(&str, &str)> = element
        .attributes()
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    assert_eq!(attributes, [("a", "3"), ("b", "2")]);
}

#[test]
fn test_create_text_replaces_content() {
    let element = Element::create(
        "Node",
        vec![
            Element::new("Dropped").into(),
            Part::Text("hello".to_string()),
        ],
    );

    assert_eq!(element.content(), [Content::Text("hello".to_string())]);
    assert_eq!(element.text().as_deref(), Some("hello"));
    assert_eq!(element.to_string(), "<Node>hello</Node>");
}

#[test]
fn test_render_escapes_values() {
    let element = Element::create(
        "Literal",
        vec![("value", "a<b & \"c\">").into(), ("type", "string").into()],
    );

    assert_eq!(
        element.to_string(),
        "<Literal value=\"a&lt;b &amp; &quot;c&quot;&gt;\" type=\"string\" />"
    );
}

#[test]
fn test_render_empty_attribute_is_kept() {
    let element = Element::create("Literal", vec![("value", "").into()]);
    assert_eq!(element.to_string(), "<Literal value=\"\" />");
}

#[test]
fn test_literal_element() {
    let element = serialize("5");

    assert_eq!(element.name, "Literal");
    assert_eq!(element.attribute("value"), Some("5"));
    assert_eq!(element.attribute("type"), Some("integer"));
    assert_eq!(element.children().count(), 0);
    assert_eq!(element.to_string(), "<Literal value=\"5\" type=\"integer\" />");
}

#[test]
fn test_identifier_element() {
    let element = serialize("count");

    assert_eq!(
        element.to_string(),
        "<Identifier value=\"count\" type=\"unknown\" />"
    );
}

#[test]
fn test_unary_element() {
    let element = serialize("not done");

    assert_eq!(element.name, "Unary");
    assert_eq!(element.attribute("Operator"), Some("not"));
    assert_eq!(element.attribute("Type"), Some("unknown"));

    let children: Vec<&Element> = element.children().collect();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "Identifier");
}

#[test]
fn test_binary_element_keeps_child_order() {
    let element = serialize("a - 1");

    let names: Vec<&str> = element.attributes().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["Operator", "Type"]);
    assert_eq!(element.attribute("Operator"), Some("-"));

    let children: Vec<&Element> = element.children().collect();
    assert_eq!(children[0].attribute("value"), Some("a"));
    assert_eq!(children[1].attribute("value"), Some("1"));
}

#[test]
fn test_function_call_element() {
    let element = serialize("f(a, b + 1)");

    assert_eq!(element.name, "FunctionCall");
    assert_eq!(element.attribute("name"), Some("f"));
    assert_eq!(element.attribute("Type"), Some("unknown"));

    let children: Vec<&Element> = element.children().collect();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].name, "Identifier");
    assert_eq!(children[1].name, "Binary");
    assert_eq!(children[1].attribute("Operator"), Some("+"));

    assert_eq!(serialize("f()").to_string(), "<FunctionCall name=\"f\" Type=\"unknown\" />");
}

#[test]
fn test_document_wraps_in_root() {
    let expr = parse_expression("2 * (3 + x)", None).unwrap();
    let document = ExprXml::new().document(&expr);

    assert_eq!(document.name, ROOT_ELEMENT);
    assert_eq!(document.children().count(), 1);
    assert_eq!(
        document.to_string(),
        "<Expression>\n\
         \x20 <Binary Operator=\"*\" Type=\"unknown\">\n\
         \x20   <Literal value=\"2\" type=\"integer\" />\n\
         \x20   <Binary Operator=\"+\" Type=\"unknown\">\n\
         \x20     <Literal value=\"3\" type=\"integer\" />\n\
         \x20     <Identifier value=\"x\" type=\"unknown\" />\n\
         \x20   </Binary>\n\
         \x20 </Binary>\n\
         </Expression>"
    );
}

#[test]
fn test_wrap_matches_document() {
    let expr = parse_expression("f(a, -1)", None).unwrap();
    let mut serializer = ExprXml::new();

    let node = expr.accept(&mut serializer);
    let wrapped = wrap(node.clone());

    assert_eq!(wrapped.name, ROOT_ELEMENT);
    assert_eq!(wrapped.children().collect::<Vec<_>>(), [&node]);
    assert_eq!(wrapped.to_string(), serializer.document(&expr).to_string());
}

#[test]
fn test_serialization_is_deterministic() {
    let expr = parse_expression("max(a, -b) <= 'z' or \"s\" = c", None).unwrap();
    let mut serializer = ExprXml::new();

    let first = expr.accept(&mut serializer).to_string();
    let second = expr.accept(&mut serializer).to_string();
    assert_eq!(first, second);
}

#[test]
fn test_save_to_writes_wrapped_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expr.xml");
    std::fs::write(&path, "stale contents that are longer than the document").unwrap();

    let element = serialize("x");
    ExprXml::new().save_to(&path, element).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "<Expression>\n  <Identifier value=\"x\" type=\"unknown\" />\n</Expression>"
    );
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("expr.xml");

    let error = ExprXml::new().save_to(&path, serialize("x")).unwrap_err();

    assert!(error.is_io());
    assert!(error.to_string().contains("expr.xml"));
}
