use std::fmt::Display;

/// Expression
///
/// Addition only exists in parenthesised form in source, so a tree of
/// `Plus` nodes never needs precedence information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number { value: i64 },
    /// Reads a value from the program's input when run
    Input,
    Variable { name: String },
    Plus { left: Box<Expr>, right: Box<Expr> },
}

impl Expr {
    pub fn number(value: i64) -> Self {
        Expr::Number { value }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable { name: name.into() }
    }

    pub fn plus(left: Expr, right: Expr) -> Self {
        Expr::Plus {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number { value } => write!(f, "{}", value),
            Expr::Input => write!(f, "input"),
            Expr::Variable { name } => write!(f, "{}", name),
            Expr::Plus { left, right } => write!(f, "({} + {})", left, right),
        }
    }
}
