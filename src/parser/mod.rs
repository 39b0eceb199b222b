//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! and for type annotations, and handles:
//!
//! - Statement parsing (variable and object declarations, blocks)
//! - Expression parsing (binary ops, assignment, instantiation, literals)
//! - Type parsing for type annotations
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! with binding powers for precedence handling. Parsing stops at the first
//! error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod pratt;
pub mod stmt;
pub mod types;
