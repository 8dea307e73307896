/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root
/// - expressions: The closed set of expression shapes
/// - statements: The closed set of statement shapes
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
