use std::fmt::Display;

use super::expressions::Expr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `print <expr>;`
    Print { expression: Expr },
    /// `<identifier> = <expr>;`
    Assign { identifier: String, value: Expr },
}

impl Stmt {
    pub fn print(expression: Expr) -> Self {
        Stmt::Print { expression }
    }

    pub fn assign(identifier: impl Into<String>, value: Expr) -> Self {
        Stmt::Assign {
            identifier: identifier.into(),
            value,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Print { expression } => write!(f, "print {};", expression),
            Stmt::Assign { identifier, value } => write!(f, "{} = {};", identifier, value),
        }
    }
}
