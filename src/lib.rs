#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, stream::TokenStream},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod serializer;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes `source` and parses it as a single expression.
///
/// `file` names the source in error positions; `None` means the shell.
pub fn parse_expression(source: &str, file: Option<String>) -> Result<Expr, Error> {
    let tokens = tokenize(source, file)?;
    parse(TokenStream::new(tokens))
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset inside it.
/// Offsets at or past the end of `source` resolve to the end of the last line,
/// which is where an EOF token points.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last = (line_number, line.to_string(), line.trim_end_matches('\n').len());
        start = end;
        line_number += 1;
    }

    last
}

/// Renders an error against the text it was raised for.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token `)`, Expecting identifier or literal)
/// -> shell
///   |
/// 1 | (1 + )
///   | -----^
/// ```
pub fn format_error(error: &Error, source: &str, name: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", name));

    // Io errors carry no source position.
    if error.is_io() {
        out.push_str(&format!("{}\n", error));
        return out;
    }

    let (line, line_text, line_pos) = get_line_at_position(source, error.get_position().0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("(1 + ", 5);
        assert_eq!(line_number, 1);
        assert_eq!(line, "(1 + ");
        assert_eq!(line_pos, 5);
    }

    #[test]
    fn test_format_error_points_at_token() {
        let error = super::parse_expression("(1 + )", None).unwrap_err();
        let rendered = super::format_error(&error, "(1 + )", "shell");

        assert!(rendered.starts_with("Error: UnexpectedToken"));
        assert!(rendered.contains("-> shell"));
        assert!(rendered.contains("1 | (1 + )"));
        assert!(rendered.ends_with("  | -----^\n"));
    }
}
