use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, GrpInitExpr, NumberExpr, ObjInitExpr, PrefixExpr, StringExpr,
        SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, ObjDeclStmt, VarDeclStmt},
    types::{GroupType, SymbolType},
};

/// Expression
///
/// Every value expression the parser can produce. Children are owned, so an
/// expression is always a strict tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    Assignment(AssignmentExpr),
    ObjInit(ObjInitExpr),
    GrpInit(GrpInitExpr),
}

impl Expr {
    /// Short human-readable name of the variant, used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Expr::Number(number) => format!("number `{}`", number.value),
            Expr::String(string) => format!("string {:?}", string.value),
            Expr::Symbol(symbol) => format!("symbol `{}`", symbol.value),
            Expr::Prefix(prefix) => format!("prefix `{}` expression", prefix.operator.value),
            Expr::Binary(binary) => format!("binary `{}` expression", binary.operator.value),
            Expr::Assignment(assignment) => {
                format!("assignment `{}` expression", assignment.operator.value)
            }
            Expr::ObjInit(init) => format!("instantiation of `{}`", init.name),
            Expr::GrpInit(_) => String::from("group literal"),
        }
    }
}

/// Statement
///
/// The program root is always `Stmt::Block`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
    ObjDecl(ObjDeclStmt),
}

/// Type
///
/// A type annotation as written in source. Names are not resolved here.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Symbol(SymbolType),
    Group(GroupType),
}
