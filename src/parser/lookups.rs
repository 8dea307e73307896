use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::{stream::TokenSource, tokens::TokenShape},
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler<S> = fn(&mut Parser<S>) -> Result<Stmt, Error>;
pub type NUDHandler<S> = fn(&mut Parser<S>) -> Result<Expr, Error>;

// Ordered: the first shape that matches wins
pub type StmtLookup<S> = Vec<(TokenShape, StmtHandler<S>)>;
pub type NUDLookup<S> = Vec<(TokenShape, NUDHandler<S>)>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Keywords look like identifiers, so fixed literals must be registered
    // ahead of the identifier fallback.

    // Expressions
    parser.nud(TokenShape::OPEN_PAREN, parse_grouping_expr);
    parser.nud(TokenShape::Integer, parse_number_expr);
    parser.nud(TokenShape::INPUT, parse_input_expr);
    parser.nud(TokenShape::Identifier, parse_variable_expr);

    // Statements
    parser.stmt(TokenShape::PRINT, parse_print_stmt);
    parser.stmt(TokenShape::Identifier, parse_assign_stmt);
}
