use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::Span;

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[A-Za-z]+$").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^-?[0-9]+$").unwrap();
}

/// What the parser can ask of the next token without consuming it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenShape {
    /// Exactly this text
    Literal(&'static str),
    /// One or more ASCII letters
    Identifier,
    /// A decimal integer that fits in an `i64`, optionally negative
    Integer,
    /// Any token at all
    Any,
}

impl TokenShape {
    pub const PRINT: TokenShape = TokenShape::Literal("print");
    pub const INPUT: TokenShape = TokenShape::Literal("input");
    pub const OPEN_PAREN: TokenShape = TokenShape::Literal("(");
    pub const CLOSE_PAREN: TokenShape = TokenShape::Literal(")");
    pub const PLUS: TokenShape = TokenShape::Literal("+");
    pub const ASSIGNMENT: TokenShape = TokenShape::Literal("=");
    pub const SEMICOLON: TokenShape = TokenShape::Literal(";");

    pub fn matches(&self, text: &str) -> bool {
        match self {
            TokenShape::Literal(literal) => *literal == text,
            TokenShape::Identifier => IDENTIFIER_PATTERN.is_match(text),
            TokenShape::Integer => INTEGER_PATTERN.is_match(text) && text.parse::<i64>().is_ok(),
            TokenShape::Any => true,
        }
    }
}

impl Display for TokenShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenShape::Literal(literal) => write!(f, "`{}`", literal),
            TokenShape::Identifier => write!(f, "identifier"),
            TokenShape::Integer => write!(f, "integer literal"),
            TokenShape::Any => write!(f, "any token"),
        }
    }
}

/// Joins shapes into a readable list, e.g. "`)` or `+`".
pub fn describe_shapes(shapes: &[TokenShape]) -> String {
    shapes
        .iter()
        .map(|shape| shape.to_string())
        .collect::<Vec<String>>()
        .join(" or ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nvalue: {},\nstart: {}}}", self.value, self.span.start.0)
    }
}

impl Token {
    pub fn is(&self, shape: &TokenShape) -> bool {
        shape.matches(&self.value)
    }

    pub fn as_integer(&self) -> Option<i64> {
        if self.is(&TokenShape::Integer) {
            self.value.parse().ok()
        } else {
            None
        }
    }
}
