//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser owns the token source and keeps two ordered lookup tables:
//! - Statement handlers, keyed by the shape of a statement's first token
//! - NUD (null denotation) handlers, keyed by the shape of an expression's first token

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        stream::TokenSource,
        tokens::{describe_shapes, Token, TokenShape},
    },
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// The token source is the only cursor: every procedure advances the same
/// one through `&mut Parser`.
pub struct Parser<S: TokenSource> {
    /// Where tokens come from
    source: S,
    /// Statement handlers, tried in registration order
    stmt_lookup: StmtLookup<S>,
    /// Expression handlers, tried in registration order
    nud_lookup: NUDLookup<S>,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser with its lookup tables filled in.
    pub fn new(source: S) -> Self {
        let mut parser = Parser {
            source,
            stmt_lookup: Vec::new(),
            nud_lookup: Vec::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the next token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.source.peek()
    }

    /// Checks if the next token has the given shape.
    pub fn has_next(&self, shape: &TokenShape) -> bool {
        self.source.has_next(shape)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.source.has_next(&TokenShape::Any)
    }

    /// Consumes a token of the given shape.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the next token matches, otherwise consumes whatever
    /// is there and returns the matching Error.
    pub fn expect(&mut self, shape: TokenShape) -> Result<Token, Error> {
        match self.source.next_matching(&shape) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(&[shape])),
        }
    }

    /// Builds the error for a token that matched none of `expected`.
    ///
    /// The offending token is consumed so its text can go into the message.
    /// With no token left this is an end-of-input error instead.
    pub fn unexpected(&mut self, expected: &[TokenShape]) -> Error {
        let expected = describe_shapes(expected);

        match self.source.next_token() {
            Some(token) => Error::new(
                ErrorImpl::SyntaxError {
                    token: token.value,
                    expected,
                },
                token.span.start,
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEndOfInput { expected },
                self.source.end_position(),
            ),
        }
    }

    /// Registers a statement handler for a token shape.
    pub fn stmt(&mut self, shape: TokenShape, stmt_fn: StmtHandler<S>) {
        self.stmt_lookup.push((shape, stmt_fn));
    }

    /// Registers a null denotation (expression) handler for a token shape.
    pub fn nud(&mut self, shape: TokenShape, nud_fn: NUDHandler<S>) {
        self.nud_lookup.push((shape, nud_fn));
    }

    /// First statement handler whose shape matches the next token.
    pub fn find_stmt_handler(&self) -> Option<StmtHandler<S>> {
        self.stmt_lookup
            .iter()
            .find(|(shape, _)| self.has_next(shape))
            .map(|(shape, handler)| {
                trace!(%shape, "statement alternative");
                *handler
            })
    }

    /// First expression handler whose shape matches the next token.
    pub fn find_nud_handler(&self) -> Option<NUDHandler<S>> {
        self.nud_lookup
            .iter()
            .find(|(shape, _)| self.has_next(shape))
            .map(|(shape, handler)| {
                trace!(%shape, "expression alternative");
                *handler
            })
    }

    pub fn stmt_shapes(&self) -> Vec<TokenShape> {
        self.stmt_lookup.iter().map(|(shape, _)| *shape).collect()
    }

    pub fn nud_shapes(&self) -> Vec<TokenShape> {
        self.nud_lookup.iter().map(|(shape, _)| *shape).collect()
    }

    /// Gives the token source back, positioned wherever parsing stopped.
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Parses every statement a token source yields.
///
/// # Returns
///
/// The Program on success. On the first malformed construct the Error is
/// returned and nothing of the partial tree survives.
pub fn parse<S: TokenSource>(source: S) -> Result<Program, Error> {
    let mut parser = Parser::new(source);
    let mut body = vec![];

    while parser.has_tokens() {
        let stmt = parse_stmt(&mut parser)?;
        trace!(?stmt, "parsed statement");
        body.push(stmt);
    }

    debug!(statements = body.len(), "parsed program");
    Ok(Program::new(body))
}

/// Lexes and parses source text in one step.
pub fn parse_source(source: &str, file: Option<String>) -> Result<Program, Error> {
    parse(Lexer::new(source.to_string(), file))
}
