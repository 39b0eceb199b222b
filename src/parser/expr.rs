use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, GrpInitExpr, NumberExpr, ObjInitExpr, PrefixExpr,
            StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl, GrammarKind},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, pratt::parse_pratt};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parse_pratt::<Expr>(parser, bp)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    match token.kind {
        TokenKind::Number => match token.value.parse() {
            Ok(value) => Ok(Expr::Number(NumberExpr { value })),
            Err(_) => Err(Error::new(ErrorImpl::NumberParseError { token: token.value })),
        },
        TokenKind::Identifier => Ok(Expr::Symbol(SymbolExpr { value: token.value })),
        TokenKind::String => Ok(Expr::String(StringExpr { value: token.value })),
        _ => Err(Error::new(ErrorImpl::MissingNudHandler {
            grammar: GrammarKind::Expression,
            token: token.kind,
            lexeme: token.value,
        })),
    }
}

/// Left-associative: the right operand stops at operators of the same power.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        right_expr: Box::new(rhs),
    }))
}

/// Right-associative: `a = b = c` parses as `a = (b = c)`.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    // One level below Assignment so a following `=` is taken by the right operand
    let rhs = parse_expr(parser, BindingPower::Comma)?;

    Ok(Expr::Assignment(AssignmentExpr {
        assignee: Box::new(left),
        operator,
        value: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses `expr (, expr)*` up to and including `closing`.
fn parse_expr_list(parser: &mut Parser, closing: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut items = vec![];

    while parser.current_token_kind() != closing {
        items.push(parse_expr(parser, BindingPower::Comma)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(closing)?;

    Ok(items)
}

/// `Name(args...)`
pub fn parse_obj_init_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let name = match left {
        Expr::Symbol(symbol) => symbol.value,
        other => {
            return Err(Error::new(ErrorImpl::InvalidObjectTarget {
                found: other.describe(),
            }))
        }
    };

    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expr::ObjInit(ObjInitExpr { name, arguments }))
}

/// `[elements...]`
pub fn parse_grp_init_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let elements = parse_expr_list(parser, TokenKind::CloseBracket)?;

    Ok(Expr::GrpInit(GrpInitExpr { elements }))
}

pub fn parse_member_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let member = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(member),
    }))
}
