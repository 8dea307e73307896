//! Lexical analysis module for the front end.
//!
//! This module contains the token source the parser reads from. It handles:
//!
//! - Splitting source text into tokens using anchored regex patterns
//! - Shape tests (fixed text, identifier, integer) on the next token
//! - Token position tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod stream;
pub mod tokens;
