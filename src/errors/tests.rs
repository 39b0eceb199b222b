//! Unit tests for error handling.
//!
//! This module contains tests for error classification, names, tips and messages.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip, GrammarKind};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedToken {
        remainder: "@".to_string(),
    });

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_missing_handler_errors() {
    let nud = Error::new(ErrorImpl::MissingNudHandler {
        grammar: GrammarKind::Expression,
        token: TokenKind::Star,
        lexeme: "*".to_string(),
    });
    let led = Error::new(ErrorImpl::MissingLedHandler {
        grammar: GrammarKind::Type,
        token: TokenKind::OpenBracket,
        lexeme: "[".to_string(),
    });

    assert_eq!(nud.kind(), ErrorKind::MissingHandler);
    assert_eq!(led.kind(), ErrorKind::MissingHandler);
    assert_eq!(nud.to_string(), "no expression prefix handler for Star (\"*\")");
    assert_eq!(led.get_tip().to_string(), "`[` cannot continue a type");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(ErrorImpl::UnexpectedToken {
        expected: TokenKind::Semicolon,
        received: TokenKind::EOF,
        lexeme: "EOF".to_string(),
    });

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.kind(), ErrorKind::Expectation);
    assert_eq!(error.to_string(), "expected Semicolon but received EOF (\"EOF\")");
    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `EOF`, did you miss a semicolon?"
    );
}

#[test]
fn test_unexpected_token_detailed_error() {
    let error = Error::new(ErrorImpl::UnexpectedTokenDetailed {
        expected: TokenKind::Identifier,
        received: TokenKind::Assignment,
        message: "expected identifier during variable declaration".to_string(),
    });

    assert_eq!(error.kind(), ErrorKind::Expectation);
    assert_eq!(
        error.get_tip().to_string(),
        "expected identifier during variable declaration"
    );
}

#[test]
fn test_semantic_errors() {
    let errors = [
        ErrorImpl::NumberParseError { token: "1.2.3".to_string() },
        ErrorImpl::DuplicateProperty {
            object: "P".to_string(),
            property: "a".to_string(),
        },
        ErrorImpl::ConstantWithoutInitializer { name: "x".to_string() },
        ErrorImpl::MissingTypeOrInitializer { name: "x".to_string() },
        ErrorImpl::NonLiteralGroupSize { found: "symbol `x`".to_string() },
        ErrorImpl::InvalidGroupSize { literal: "2.5".to_string() },
        ErrorImpl::InvalidObjectTarget { found: "group literal".to_string() },
        ErrorImpl::NestingTooDeep { limit: 256 },
    ];

    for error_impl in errors {
        let error = Error::new(error_impl);
        assert_eq!(error.kind(), ErrorKind::Semantic, "{}", error.get_error_name());
        assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
    }
}

#[test]
fn test_duplicate_property_message_names_property() {
    let error = Error::new(ErrorImpl::DuplicateProperty {
        object: "P".to_string(),
        property: "a".to_string(),
    });

    assert_eq!(
        error.to_string(),
        "property \"a\" previously defined in object \"P\""
    );
}

#[test]
fn test_missing_end_of_input() {
    let error = Error::new(ErrorImpl::MissingEndOfInput);

    assert_eq!(error.get_error_name(), "MissingEndOfInput");
    assert_eq!(error.kind(), ErrorKind::Expectation);
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn takes_std_error(_: &dyn std::error::Error) {}

    let error = Error::new(ErrorImpl::MissingEndOfInput);
    takes_std_error(&error);
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 });

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "nesting exceeds the limit of 256 levels");
}
