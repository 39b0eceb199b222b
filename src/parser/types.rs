//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Symbol types (a bare identifier such as `int` or an object name)
//! - Group types (`grp<element, size>`, a fixed-size array)
//!
//! It runs the same precedence-climbing loop as value expressions, over
//! its own NUD/LED/binding power tables.

use crate::{
    ast::{
        ast::{Expr, Type},
        types::{GroupType, SymbolType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser, pratt::parse_pratt};

/// Initializes the type parsing lookup tables.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_symbol_type);
    parser.type_nud(TokenKind::Grp, parse_group_type);
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<Type, Error> {
    parse_pratt::<Type>(parser, bp)
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(Type::Symbol(SymbolType { name: token.value }))
}

/// `grp<underlying, size>` where `size` is a whole-number literal.
pub fn parse_group_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::Grp)?;
    parser.expect(TokenKind::Less)?;
    let underlying = parse_type(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Comma)?;

    // Bounded at Relational so the closing `>` is not read as a comparison
    let size_expr = parse_expr(parser, BindingPower::Relational)?;
    parser.expect(TokenKind::Greater)?;

    let size = match literal_size(&size_expr) {
        Some(value) => group_size(value)?,
        None => {
            return Err(Error::new(ErrorImpl::NonLiteralGroupSize {
                found: size_expr.describe(),
            }))
        }
    };

    Ok(Type::Group(GroupType {
        underlying: Box::new(underlying),
        size,
    }))
}

/// A number literal, optionally negated.
fn literal_size(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Number(number) => Some(number.value),
        Expr::Prefix(prefix) if prefix.operator.kind == TokenKind::Dash => {
            match prefix.right_expr.as_ref() {
                Expr::Number(number) => Some(-number.value),
                _ => None,
            }
        }
        _ => None,
    }
}

fn group_size(value: f64) -> Result<usize, Error> {
    if value.fract() != 0.0 || value < 0.0 || value > usize::MAX as f64 {
        return Err(Error::new(ErrorImpl::InvalidGroupSize {
            literal: value.to_string(),
        }));
    }

    Ok(value as usize)
}
