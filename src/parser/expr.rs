use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{stream::TokenSource, tokens::TokenShape},
};

use super::parser::Parser;

pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let Some(handler) = parser.find_nud_handler() else {
        let expected = parser.nud_shapes();
        return Err(parser.unexpected(&expected));
    };

    handler(parser)
}

/// `( expr )` or `( expr + expr )`
pub fn parse_grouping_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.expect(TokenShape::OPEN_PAREN)?;

    let left = parse_expr(parser)?;

    if parser.has_next(&TokenShape::CLOSE_PAREN) {
        parser.expect(TokenShape::CLOSE_PAREN)?;
        return Ok(left);
    }

    if parser.has_next(&TokenShape::PLUS) {
        parser.expect(TokenShape::PLUS)?;
        let right = parse_expr(parser)?;
        parser.expect(TokenShape::CLOSE_PAREN)?;

        return Ok(Expr::Plus {
            left: Box::new(left),
            right: Box::new(right),
        });
    }

    Err(parser.unexpected(&[TokenShape::CLOSE_PAREN, TokenShape::PLUS]))
}

pub fn parse_number_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let token = parser.expect(TokenShape::Integer)?;

    match token.as_integer() {
        Some(value) => Ok(Expr::Number { value }),
        None => Err(Error::new(
            ErrorImpl::SyntaxError {
                expected: TokenShape::Integer.to_string(),
                token: token.value,
            },
            token.span.start,
        )),
    }
}

pub fn parse_input_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.expect(TokenShape::INPUT)?;

    Ok(Expr::Input)
}

pub fn parse_variable_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let name = parser.expect(TokenShape::Identifier)?.value;

    Ok(Expr::Variable { name })
}
