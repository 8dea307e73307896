use std::rc::Rc;

use crate::{Position, Span};

use super::tokens::{Token, TokenShape};

/// Anything that hands out tokens one at a time with a single token of lookahead.
pub trait TokenSource {
    /// The next token, without consuming it.
    fn peek(&self) -> Option<&Token>;

    /// Consumes the next token whatever its shape.
    fn next_token(&mut self) -> Option<Token>;

    /// Position reported for errors raised once the tokens run out.
    fn end_position(&self) -> Position;

    fn has_next(&self, shape: &TokenShape) -> bool {
        self.peek().is_some_and(|token| token.is(shape))
    }

    /// Consumes the next token only if it has the given shape.
    fn next_matching(&mut self, shape: &TokenShape) -> Option<Token> {
        if self.has_next(shape) {
            self.next_token()
        } else {
            None
        }
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn peek(&self) -> Option<&Token> {
        (**self).peek()
    }

    fn next_token(&mut self) -> Option<Token> {
        (**self).next_token()
    }

    fn end_position(&self) -> Position {
        (**self).end_position()
    }
}

/// A token source over tokens that were already produced.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    end: Position,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, end: Position) -> Self {
        TokenStream { tokens, pos: 0, end }
    }

    /// Builds a stream from bare token texts, as if they were separated by single spaces.
    pub fn from_words(words: &[&str]) -> Self {
        let file = Rc::new(String::from("<words>"));
        let mut offset = 0;
        let mut tokens = Vec::with_capacity(words.len());

        for word in words {
            tokens.push(Token {
                value: word.to_string(),
                span: Span {
                    start: Position(offset as u32, Rc::clone(&file)),
                    end: Position((offset + word.len()) as u32, Rc::clone(&file)),
                },
            });
            offset += word.len() + 1;
        }

        let end = Position(offset.saturating_sub(1) as u32, file);
        TokenStream::new(tokens, end)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens not consumed yet.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.pos..]
    }
}

impl TokenSource for TokenStream {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn end_position(&self) -> Position {
        self.end.clone()
    }
}
