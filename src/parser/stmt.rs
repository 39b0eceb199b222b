use tracing::trace;

use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ExpressionStmt, ObjDeclStmt, ObjectProperty, VarBinding, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

/// Delegates to the handler registered for the current token, otherwise
/// parses an expression terminated by `;`.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind();

    if let Some(stmt_fn) = parser.get_stmt_handler(token_kind) {
        trace!(token = %token_kind, "statement handler");
        return stmt_fn(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let is_constant = parser.advance().kind == TokenKind::Const;
    let identifier = parser
        .expect_error(
            TokenKind::Identifier,
            Some("expected identifier during variable declaration"),
        )?
        .value;

    let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    let assigned_value = if parser.current_token_kind() != TokenKind::Semicolon {
        parser.expect(TokenKind::Assignment)?;
        Some(parse_expr(parser, BindingPower::Assignment)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    let binding = match (explicit_type, assigned_value) {
        (_, None) if is_constant => {
            return Err(Error::new(ErrorImpl::ConstantWithoutInitializer { name: identifier }))
        }
        (None, None) => {
            return Err(Error::new(ErrorImpl::MissingTypeOrInitializer { name: identifier }))
        }
        (Some(explicit_type), None) => VarBinding::Typed(explicit_type),
        (None, Some(value)) => VarBinding::Inferred(value),
        (Some(explicit_type), Some(value)) => VarBinding::Annotated { explicit_type, value },
    };

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        is_constant,
        binding,
    }))
}

pub fn parse_obj_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Obj)?;
    let name = parser
        .expect_error(TokenKind::Identifier, Some("expected object name after `obj`"))?
        .value;

    parser.expect(TokenKind::OpenCurly)?;

    let mut properties: Vec<ObjectProperty> = Vec::new();
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        let property = parser
            .expect_error(TokenKind::Identifier, Some("expected property name inside object"))?
            .value;
        parser.expect_error(
            TokenKind::Colon,
            Some("value type must be explicitly declared inside object"),
        )?;
        let property_type = parse_type(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Semicolon)?;

        if properties.iter().any(|existing| existing.name == property) {
            return Err(Error::new(ErrorImpl::DuplicateProperty {
                object: name,
                property,
            }));
        }

        properties.push(ObjectProperty {
            name: property,
            property_type,
        });
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::ObjDecl(ObjDeclStmt { name, properties }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.enter_nesting()?;
    let block = parse_block_body(parser);
    parser.leave_nesting();

    block
}

fn parse_block_body(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut body = Vec::new();
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::Block(BlockStmt { body }))
}
