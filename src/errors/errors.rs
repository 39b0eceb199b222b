use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A failure raised while tokenizing or parsing. The first error aborts the run.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lexical,
            ErrorImpl::MissingNudHandler { .. } | ErrorImpl::MissingLedHandler { .. } => {
                ErrorKind::MissingHandler
            }
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::MissingEndOfInput => ErrorKind::Expectation,
            ErrorImpl::NumberParseError { .. }
            | ErrorImpl::DuplicateProperty { .. }
            | ErrorImpl::ConstantWithoutInitializer { .. }
            | ErrorImpl::MissingTypeOrInitializer { .. }
            | ErrorImpl::NonLiteralGroupSize { .. }
            | ErrorImpl::InvalidGroupSize { .. }
            | ErrorImpl::InvalidObjectTarget { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Semantic,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MissingNudHandler { .. } => "MissingNudHandler",
            ErrorImpl::MissingLedHandler { .. } => "MissingLedHandler",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::MissingEndOfInput => "MissingEndOfInput",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::DuplicateProperty { .. } => "DuplicateProperty",
            ErrorImpl::ConstantWithoutInitializer { .. } => "ConstantWithoutInitializer",
            ErrorImpl::MissingTypeOrInitializer { .. } => "MissingTypeOrInitializer",
            ErrorImpl::NonLiteralGroupSize { .. } => "NonLiteralGroupSize",
            ErrorImpl::InvalidGroupSize { .. } => "InvalidGroupSize",
            ErrorImpl::InvalidObjectTarget { .. } => "InvalidObjectTarget",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::MissingNudHandler { grammar, lexeme, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a {}",
                lexeme, grammar
            )),
            ErrorImpl::MissingLedHandler { grammar, lexeme, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot continue a {}",
                lexeme, grammar
            )),
            ErrorImpl::UnexpectedToken { expected, lexeme, .. } => {
                if *expected == TokenKind::Semicolon {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, did you miss a semicolon?",
                        lexeme
                    ))
                } else {
                    ErrorTip::Suggestion(format!("Expected {} before `{}`", expected, lexeme))
                }
            }
            ErrorImpl::UnexpectedTokenDetailed { message, .. } => {
                ErrorTip::Suggestion(message.clone())
            }
            ErrorImpl::MissingEndOfInput => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::DuplicateProperty { object, property } => ErrorTip::Suggestion(format!(
                "Remove or rename the second `{}` in `{}`",
                property, object
            )),
            ErrorImpl::ConstantWithoutInitializer { name } => ErrorTip::Suggestion(format!(
                "Give `{}` a value, e.g. `const {} = ...;`",
                name, name
            )),
            ErrorImpl::MissingTypeOrInitializer { name } => ErrorTip::Suggestion(format!(
                "Annotate `{}` with a type or assign it a value",
                name
            )),
            ErrorImpl::NonLiteralGroupSize { .. } | ErrorImpl::InvalidGroupSize { .. } => {
                ErrorTip::Suggestion(String::from(
                    "Group sizes must be written as a whole number, e.g. `grp<int, 4>`",
                ))
            }
            ErrorImpl::InvalidObjectTarget { .. } => ErrorTip::Suggestion(String::from(
                "Objects are created by naming their type, e.g. `Point(1, 2)`",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Split the construct into smaller declarations, at most {} levels deep",
                limit
            )),
        }
    }
}

/// The broad class of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    MissingHandler,
    Expectation,
    Semantic,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Which precedence-climbing grammar a handler lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarKind {
    Expression,
    Type,
}

impl Display for GrammarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarKind::Expression => write!(f, "expression"),
            GrammarKind::Type => write!(f, "type"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised input near {remainder:?}")]
    UnrecognisedToken { remainder: String },
    #[error("no {grammar} prefix handler for {token} ({lexeme:?})")]
    MissingNudHandler {
        grammar: GrammarKind,
        token: TokenKind,
        lexeme: String,
    },
    #[error("no {grammar} infix handler for {token} ({lexeme:?})")]
    MissingLedHandler {
        grammar: GrammarKind,
        token: TokenKind,
        lexeme: String,
    },
    #[error("expected {expected} but received {received} ({lexeme:?})")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
        lexeme: String,
    },
    #[error("expected {expected} but received {received}: {message}")]
    UnexpectedTokenDetailed {
        expected: TokenKind,
        received: TokenKind,
        message: String,
    },
    #[error("token stream is not terminated by EOF")]
    MissingEndOfInput,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("property {property:?} previously defined in object {object:?}")]
    DuplicateProperty { object: String, property: String },
    #[error("constant {name:?} must be initialized")]
    ConstantWithoutInitializer { name: String },
    #[error("variable {name:?} needs an explicit type or an initializer")]
    MissingTypeOrInitializer { name: String },
    #[error("expected a numeric literal for group size, found {found:?}")]
    NonLiteralGroupSize { found: String },
    #[error("group size {literal:?} is not a non-negative whole number")]
    InvalidGroupSize { literal: String },
    #[error("only a type name can be instantiated, found {found}")]
    InvalidObjectTarget { found: String },
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}
