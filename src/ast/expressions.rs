use crate::lexer::tokens::Token;

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// String Expression
/// Represents a string literal in the AST, with escapes already decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
}

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// This includes member expressions (`a.b`) as well as arithmetic operations (`a + b`).
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Prefix Expression
/// Represents a unary prefix operation (`-x`, `!x`) in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: Box<Expr>,
}

/// Assignment Expression
/// Represents `=`, `+=` and `-=` in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub operator: Token,
    pub value: Box<Expr>,
}

/// Object Instantiation Expression
/// `Point(1, 2)` creates an instance of the object type `Point`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjInitExpr {
    pub name: String,
    pub arguments: Vec<Expr>,
}

/// Group Instantiation Expression
/// `[1, 2, 3]`
#[derive(Debug, Clone, PartialEq)]
pub struct GrpInitExpr {
    pub elements: Vec<Expr>,
}
