use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    stream::{TokenSource, TokenStream},
    tokens::Token,
};

pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; every pattern is anchored to the current position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z]+").unwrap(), handler: word_handler },
        RegexPattern { regex: Regex::new("^-?[0-9]+").unwrap(), handler: word_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!("(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(")") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!("+") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!("=") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(";") },
        // Anything else is still handed to the parser, which rejects it
        RegexPattern { regex: Regex::new("^[^\\sa-zA-Z0-9()+=;]+").unwrap(), handler: word_handler },
    ];
}

/// On-demand scanner over source text.
///
/// The lexer always holds the next token already scanned, so the parser
/// can test its shape before deciding to consume it.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    lookahead: Option<Token>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source,
            pos: 0,
            file: file_name,
            lookahead: None,
        };
        lexer.lookahead = lexer.scan();
        lexer
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes from the current position.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.get_position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn scan(&mut self) -> Option<Token> {
        while !self.at_eof() {
            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|matched| (pattern.handler, matched.as_str().to_string()))
            });

            let Some((handler, matched)) = found else {
                // Unreachable while the catch-all pattern exists; hand over the rest verbatim
                let rest = self.remainder().to_string();
                return word_handler(self, &rest);
            };

            if let Some(token) = handler(self, &matched) {
                return Some(token);
            }
        }

        None
    }
}

impl TokenSource for Lexer {
    fn peek(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.lookahead.take();
        if token.is_some() {
            self.lookahead = self.scan();
        }
        token
    }

    fn end_position(&self) -> Position {
        Position(self.source.len() as u32, Rc::clone(&self.file))
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn word_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(String::from(matched), span))
}

/// Scans the whole source up front.
pub fn tokenize(source: String, file: Option<String>) -> TokenStream {
    let mut lexer = Lexer::new(source, file);
    let end = lexer.end_position();

    let mut tokens = vec![];
    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }

    TokenStream::new(tokens, end)
}
