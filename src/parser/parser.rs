//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and parsing entry points.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression and type parsing, and a token-indexed table for statements.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation), LED (left denotation) and binding power tables
//!   for value expressions
//! - The same three tables for type expressions
//!
//! Tables are built once per parser and never change while it runs.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, Type},
        statements::BlockStmt,
    },
    errors::errors::{Error, ErrorImpl, GrammarKind},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{create_token_lookups, BindingPower, Grammar, LEDHandler, NUDHandler, StmtHandler, StmtLookup},
    stmt::parse_stmt,
    types::{create_token_type_lookups, parse_type},
};

/// Deepest nesting of expressions, types and blocks a parse accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables for parsing
/// statements, expressions, and types. It tracks the current position in
/// the token stream and provides methods for token consumption.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// How many nested constructs are currently open
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Tables for value expressions
    expr_grammar: Grammar<Expr>,
    /// Tables for type expressions
    type_grammar: Grammar<Type>,
}

impl Parser {
    /// Creates a parser over `tokens` with its lookup tables populated.
    ///
    /// Fails if the stream does not end with an `EOF` token.
    pub fn new(tokens: Vec<Token>) -> Result<Self, Error> {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            return Err(Error::new(ErrorImpl::MissingEndOfInput));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
            stmt_lookup: HashMap::new(),
            expr_grammar: Grammar::new(GrammarKind::Expression),
            type_grammar: Grammar::new(GrammarKind::Type),
        };

        create_token_lookups(&mut parser);
        create_token_type_lookups(&mut parser);

        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past the trailing `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        trace!(pos = current, kind = %self.tokens[current].kind, "advance");

        if current + 1 < self.tokens.len() {
            self.pos += 1;
        }

        &self.tokens[current]
    }

    /// Expects a token of the specified kind, explaining a mismatch with `message`.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        message: Option<&str>,
    ) -> Result<Token, Error> {
        let token = self.current_token();

        if token.kind != expected_kind {
            let error = match message {
                Some(message) => ErrorImpl::UnexpectedTokenDetailed {
                    expected: expected_kind,
                    received: token.kind,
                    message: String::from(message),
                },
                None => ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: token.kind,
                    lexeme: token.value.clone(),
                },
            };

            return Err(Error::new(error));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Opens one more level of nesting, failing past `MAX_NESTING_DEPTH`.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the handler registered for statements starting with `kind`.
    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_expr_grammar(&self) -> &Grammar<Expr> {
        &self.expr_grammar
    }

    pub fn get_type_grammar(&self) -> &Grammar<Type> {
        &self.type_grammar
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<Expr>) {
        self.expr_grammar.led(kind, binding_power, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<Expr>) {
        self.expr_grammar.nud(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<Type>) {
        self.type_grammar.nud(kind, nud_fn);
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance
/// with fresh lookup tables and parses statements until EOF. The first
/// error aborts the parse.
pub fn parse(tokens: Vec<Token>) -> Result<BlockStmt, Error> {
    let mut parser = Parser::new(tokens)?;
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    debug!(statements = body.len(), "parsed");
    Ok(BlockStmt { body })
}

/// Parses a single type expression that must span the whole token stream.
pub fn parse_type_annotation(tokens: Vec<Token>) -> Result<Type, Error> {
    let mut parser = Parser::new(tokens)?;
    let parsed = parse_type(&mut parser, BindingPower::Default)?;
    parser.expect(TokenKind::EOF)?;

    Ok(parsed)
}
