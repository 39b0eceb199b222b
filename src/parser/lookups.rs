use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::{Error, GrammarKind},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Comma,
    Assignment,
    Logical,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler<N> = fn(&mut Parser) -> Result<N, Error>;
pub type LEDHandler<N> = fn(&mut Parser, N, BindingPower) -> Result<N, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup<N> = HashMap<TokenKind, NUDHandler<N>>;
pub type LEDLookup<N> = HashMap<TokenKind, LEDHandler<N>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// The three tables one precedence-climbing grammar is driven by.
pub struct Grammar<N> {
    kind: GrammarKind,
    nud_lookup: NUDLookup<N>,
    led_lookup: LEDLookup<N>,
    binding_power_lookup: BPLookup,
}

impl<N> Grammar<N> {
    pub fn new(kind: GrammarKind) -> Self {
        Grammar {
            kind,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    pub fn kind(&self) -> GrammarKind {
        self.kind
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<N>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a left denotation (infix) handler together with its binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<N>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    pub fn nud_handler(&self, kind: TokenKind) -> Option<NUDHandler<N>> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn led_handler(&self, kind: TokenKind) -> Option<LEDHandler<N>> {
        self.led_lookup.get(&kind).copied()
    }

    /// Tokens without an infix handler bind at `Default`, which ends any expression.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }
}

pub fn create_token_lookups(parser: &mut Parser) {
    parser.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PlusEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::MinusEquals, BindingPower::Assignment, parse_assignment_expr);

    // Logical
    parser.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::DotDot, BindingPower::Logical, parse_binary_expr);

    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Equals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Call/Member
    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_obj_init_expr);
    parser.led(TokenKind::Dot, BindingPower::Member, parse_member_expr);
    parser.nud(TokenKind::OpenBracket, parse_grp_init_expr);

    // Statements
    parser.stmt(TokenKind::Const, parse_var_decl_stmt);
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::Obj, parse_obj_decl_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}
