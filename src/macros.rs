//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-spelling tokens
//!
//! These macros reduce boilerplate in the lexer's rule table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a default lexer handler for fixed-spelling tokens.
///
/// Generates a handler that pushes a token of the given kind carrying the
/// matched text and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, len: usize| {
            let matched = String::from(lexer.matched(len));
            lexer.push($crate::MK_TOKEN!($kind, matched));
            lexer.advance_n(len);
        }
    };
}
