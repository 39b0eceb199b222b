//! The precedence-climbing loop shared by value expressions and type expressions.
//!
//! Each grammar supplies its own prefix, infix and binding-power tables
//! through [`Denotation`]; the loop itself is identical for both.

use tracing::trace;

use crate::{
    ast::ast::{Expr, Type},
    errors::errors::{Error, ErrorImpl},
};

use super::{
    lookups::{BindingPower, Grammar},
    parser::Parser,
};

/// A node family with its own precedence-climbing grammar.
pub trait Denotation: Sized {
    fn grammar(parser: &Parser) -> &Grammar<Self>;
}

impl Denotation for Expr {
    fn grammar(parser: &Parser) -> &Grammar<Self> {
        parser.get_expr_grammar()
    }
}

impl Denotation for Type {
    fn grammar(parser: &Parser) -> &Grammar<Self> {
        parser.get_type_grammar()
    }
}

/// Parses one `N`, extending it with infix handlers while the lookahead binds
/// tighter than `bp`.
pub fn parse_pratt<N: Denotation>(parser: &mut Parser, bp: BindingPower) -> Result<N, Error> {
    parser.enter_nesting()?;
    let parsed = climb::<N>(parser, bp);
    parser.leave_nesting();

    parsed
}

fn climb<N: Denotation>(parser: &mut Parser, bp: BindingPower) -> Result<N, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let grammar = N::grammar(parser);
    let nud_fn = grammar.nud_handler(token_kind).ok_or_else(|| {
        Error::new(ErrorImpl::MissingNudHandler {
            grammar: grammar.kind(),
            token: token_kind,
            lexeme: parser.current_token().value.clone(),
        })
    })?;

    let mut left = nud_fn(parser)?;

    // While the current token binds tighter than bp, continue extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let grammar = N::grammar(parser);
        let token_bp = grammar.binding_power(token_kind);

        if token_bp <= bp {
            break;
        }

        // Only reachable if a binding power is ever registered without a handler;
        // `Grammar::led` always records both.
        let led_fn = grammar.led_handler(token_kind).ok_or_else(|| {
            Error::new(ErrorImpl::MissingLedHandler {
                grammar: grammar.kind(),
                token: token_kind,
                lexeme: parser.current_token().value.clone(),
            })
        })?;

        trace!(grammar = %grammar.kind(), token = %token_kind, bp = ?token_bp, "led");
        left = led_fn(parser, left, token_bp)?;
    }

    Ok(left)
}
