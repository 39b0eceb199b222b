use std::slice::Iter;

use super::ast::{Expr, Stmt, Type};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// What a variable declaration states about its variable. A declaration
/// always carries a type, a value, or both.
#[derive(Debug, Clone, PartialEq)]
pub enum VarBinding {
    Typed(Type),
    Inferred(Expr),
    Annotated { explicit_type: Type, value: Expr },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub is_constant: bool,
    pub binding: VarBinding,
}

impl VarDeclStmt {
    pub fn explicit_type(&self) -> Option<&Type> {
        match &self.binding {
            VarBinding::Typed(explicit_type) | VarBinding::Annotated { explicit_type, .. } => {
                Some(explicit_type)
            }
            VarBinding::Inferred(_) => None,
        }
    }

    pub fn assigned_value(&self) -> Option<&Expr> {
        match &self.binding {
            VarBinding::Inferred(value) | VarBinding::Annotated { value, .. } => Some(value),
            VarBinding::Typed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub name: String,
    pub property_type: Type,
}

/// `obj Name { prop: type; ... }`. Property names are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjDeclStmt {
    pub name: String,
    pub properties: Vec<ObjectProperty>,
}

impl ObjDeclStmt {
    pub fn property(&self, name: &str) -> Option<&ObjectProperty> {
        self.properties.iter().find(|property| property.name == name)
    }
}
