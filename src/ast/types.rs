//! Type annotations in the AST.
//!
//! Types are kept exactly as written: a `SymbolType` names a primitive or a
//! declared object type without resolving it, and a `GroupType` is a
//! fixed-size group whose size was a literal in the source.

use super::ast::Type;

/// Represents a symbolic type reference that needs resolution.
///
/// During parsing, type references are stored as symbols and later
/// resolved to concrete types by whatever consumes the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolType {
    pub name: String,
}

/// `grp<underlying, size>`
#[derive(Debug, Clone, PartialEq)]
pub struct GroupType {
    pub underlying: Box<Type>,
    pub size: usize,
}
