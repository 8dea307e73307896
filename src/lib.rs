#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line text (including its newline)
/// and the offset of `position` within that line. An offset at the very end
/// of the source maps onto the last line so end-of-input errors can still be
/// pointed at.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // Past the last character
    let last = content.split_inclusive('\n').last().unwrap_or("");
    if last.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number.saturating_sub(1).max(1), last.to_string(), last.len()))
    }
}

#[cfg(test)]
mod tests {
    const SOURCE: &str = "print 1;\nx = 5;\n\nprint (x + 1);\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 6).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "print 1;\n");
        assert_eq!(line_pos, 6);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 20).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "print (x + 1);\n");
        assert_eq!(line_pos, 3);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("print 1", 7).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "print 1");
        assert_eq!(line_pos, 7);

        let (line_number, line, line_pos) =
            super::get_line_at_position(SOURCE, SOURCE.len() as u32).unwrap();
        assert_eq!(line_number, 5);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_get_line_out_of_range() {
        assert!(super::get_line_at_position("x", 5).is_none());
    }
}
