use crate::{
    ast::statements::Stmt,
    errors::errors::Error,
    lexer::{stream::TokenSource, tokens::TokenShape},
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// Parses one statement including its terminating `;`.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, Error> {
    let Some(handler) = parser.find_stmt_handler() else {
        let expected = parser.stmt_shapes();
        return Err(parser.unexpected(&expected));
    };

    let stmt = handler(parser)?;

    parser.expect(TokenShape::SEMICOLON)?;

    Ok(stmt)
}

pub fn parse_print_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, Error> {
    parser.expect(TokenShape::PRINT)?;

    let expression = parse_expr(parser)?;

    Ok(Stmt::Print { expression })
}

pub fn parse_assign_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, Error> {
    let identifier = parser.expect(TokenShape::Identifier)?.value;

    parser.expect(TokenShape::ASSIGNMENT)?;

    let value = parse_expr(parser)?;

    Ok(Stmt::Assign { identifier, value })
}
