//! Integration tests for the front end.
//!
//! These tests drive the complete pipeline from source text through the
//! lexer and the parser to a Program, or to the first error.

use printlang::{
    ast::{ast::Program, expressions::Expr, statements::Stmt},
    errors::errors::ErrorImpl,
    lexer::{
        lexer::{tokenize, Lexer},
        stream::TokenSource,
    },
    parser::parser::{parse, parse_source},
};

fn parse_text(source: &str) -> Result<Program, printlang::errors::errors::Error> {
    parse_source(source, Some("test.pl".to_string()))
}

#[test]
fn test_print_number_literal() {
    let program = parse_text("print 1;").unwrap();
    assert_eq!(program.statements(), &[Stmt::print(Expr::number(1))]);
}

#[test]
fn test_assign_number_literal() {
    let program = parse_text("x = 5;").unwrap();
    assert_eq!(program.statements(), &[Stmt::assign("x", Expr::number(5))]);
}

#[test]
fn test_assign_addition() {
    let program = parse_text("x = (1 + 2);").unwrap();
    assert_eq!(
        program.statements(),
        &[Stmt::assign("x", Expr::plus(Expr::number(1), Expr::number(2)))]
    );
}

#[test]
fn test_print_input() {
    let program = parse_text("print input;").unwrap();
    assert_eq!(program.statements(), &[Stmt::print(Expr::Input)]);
}

#[test]
fn test_print_parenthesised_variable() {
    let program = parse_text("print (x);").unwrap();
    assert_eq!(program.statements(), &[Stmt::print(Expr::variable("x"))]);
}

#[test]
fn test_missing_trailing_semicolon() {
    let error = parse_text("print 1").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert!(error.is_end_of_input());
}

#[test]
fn test_empty_source() {
    let program = parse_text("").unwrap();
    assert!(program.is_empty());
    assert_eq!(program, Program::default());
}

#[test]
fn test_whole_program() {
    let source = r#"
        a = input;
        b = input;
        sum = (a + b);
        print sum;
        print ((sum + 1) + -1);
    "#;
    let program = parse_text(source).unwrap();

    assert_eq!(program.len(), 5);
    assert_eq!(
        program.statements()[4],
        Stmt::print(Expr::plus(
            Expr::plus(Expr::variable("sum"), Expr::number(1)),
            Expr::number(-1)
        ))
    );
}

#[test]
fn test_lazy_and_eager_sources_agree() {
    let source = "x = (input + 2);\nprint (x + x);\n";

    let lazy = parse(Lexer::new(source.to_string(), None)).unwrap();
    let eager = parse(tokenize(source.to_string(), None)).unwrap();

    assert_eq!(lazy, eager);
}

#[test]
fn test_rendered_program_parses_back() {
    let source = "x=(((1))+(y+input));print(x);";
    let program = parse_text(source).unwrap();

    assert_eq!(program.to_string(), "x = (1 + (y + input));\nprint x;\n");
    assert_eq!(parse_text(&program.to_string()).unwrap(), program);
}

#[test]
fn test_error_stops_at_first_bad_statement() {
    let mut lexer = Lexer::new("x = 1;\ny = ;\nprint y;".to_string(), None);
    let error = parse(&mut lexer).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::SyntaxError {
            token: ";".to_string(),
            expected: "`(` or integer literal or `input` or identifier".to_string()
        }
    );
    // Nothing after the offending token was touched
    assert_eq!(lexer.peek().map(|token| token.value.as_str()), Some("print"));
}

#[test]
fn test_error_rendering() {
    let source = "x = 1;\nprint (x 1);\n";
    let error = parse_text(source).unwrap_err();

    assert_eq!(
        error.render(source),
        "Error: SyntaxError (Unexpected token: `1`, expected `)` or `+`)\n\
         -> test.pl\n  |\n\
         2 | print (x 1);\n  \
         | ---------^\n"
    );
}

#[test]
fn test_end_of_input_rendering() {
    let source = "print (1 + 2)";
    let error = parse_text(source).unwrap_err();
    let rendered = error.render(source);

    assert!(rendered.contains("did you miss a semicolon?"));
    assert!(rendered.ends_with("1 | print (1 + 2)\n  | -------------^\n"));
}
