use super::{ast::Program, expressions::Expr, statements::Stmt};

#[test]
fn test_expression_display() {
    assert_eq!(Expr::number(-3).to_string(), "-3");
    assert_eq!(Expr::Input.to_string(), "input");
    assert_eq!(Expr::variable("x").to_string(), "x");
    assert_eq!(
        Expr::plus(Expr::number(1), Expr::plus(Expr::variable("y"), Expr::Input)).to_string(),
        "(1 + (y + input))"
    );
}

#[test]
fn test_statement_display() {
    assert_eq!(Stmt::print(Expr::number(1)).to_string(), "print 1;");
    assert_eq!(
        Stmt::assign("x", Expr::plus(Expr::number(1), Expr::number(2))).to_string(),
        "x = (1 + 2);"
    );
}

#[test]
fn test_program_display() {
    let program = Program::new(vec![
        Stmt::assign("x", Expr::Input),
        Stmt::print(Expr::variable("x")),
    ]);

    assert_eq!(program.to_string(), "x = input;\nprint x;\n");
    assert_eq!(Program::default().to_string(), "");
}

#[test]
fn test_program_keeps_order() {
    let program = Program::new(vec![
        Stmt::print(Expr::number(1)),
        Stmt::print(Expr::number(2)),
    ]);

    assert_eq!(program.len(), 2);
    assert!(!program.is_empty());
    let printed: Vec<String> = program.iter().map(|stmt| stmt.to_string()).collect();
    assert_eq!(printed, vec!["print 1;", "print 2;"]);
    assert_eq!(program.into_statements()[1], Stmt::print(Expr::number(2)));
}

#[test]
fn test_plus_operands_are_ordered() {
    assert_ne!(
        Expr::plus(Expr::number(1), Expr::number(2)),
        Expr::plus(Expr::number(2), Expr::number(1))
    );
}
