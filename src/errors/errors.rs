use std::fmt::Display;

use thiserror::Error;

use crate::{get_line_at_position, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedEndOfInput { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SyntaxError { token, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                token, expected
            )),
            ErrorImpl::UnexpectedEndOfInput { expected } if expected == "`;`" => {
                ErrorTip::Suggestion(String::from(
                    "Unexpected end of input, did you miss a semicolon?",
                ))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Unexpected end of input, expected {}",
                expected
            )),
        }
    }

    /// Renders the error against the source it came from.
    ///
    /// ```text
    /// Error: SyntaxError (Unexpected token: `)`, expected `;`)
    /// -> main.pl
    ///   |
    /// 1 | print 1)
    ///   | -------^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut output = String::new();

        if let ErrorTip::None = self.get_tip() {
            output.push_str(&format!("Error: {}\n", self.get_error_name()));
        } else {
            output.push_str(&format!(
                "Error: {} ({})\n",
                self.get_error_name(),
                self.get_tip()
            ));
        }
        output.push_str(&format!("-> {}\n", self.position.1));

        let Some((line, line_text, line_pos)) = get_line_at_position(source, self.position.0)
        else {
            return output;
        };

        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        output.push_str(&format!("{:>padding$}\n", "|"));

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

        output
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("syntax error: unexpected token {token:?}, expected {expected}")]
    SyntaxError { token: String, expected: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
}
