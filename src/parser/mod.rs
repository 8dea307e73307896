//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! token source into a [`Program`](crate::ast::ast::Program). It handles:
//!
//! - Program parsing (statements until the tokens run out)
//! - Statement parsing (print, assignment, trailing semicolon)
//! - Expression parsing (literals, input, variables, parenthesised addition)
//!
//! Every decision is made on one token of lookahead and never revisited.
//! The first error aborts the whole parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
