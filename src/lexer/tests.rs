//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and decimals)
//! - String literals with escape sequences
//! - Operators and punctuation, including rule ordering
//! - Comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "var const obj grp func import return if else for while typeof in true false from";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::Const);
    assert_eq!(tokens[2].kind, TokenKind::Obj);
    assert_eq!(tokens[3].kind, TokenKind::Grp);
    assert_eq!(tokens[4].kind, TokenKind::Func);
    assert_eq!(tokens[5].kind, TokenKind::Import);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::If);
    assert_eq!(tokens[8].kind, TokenKind::Else);
    assert_eq!(tokens[9].kind, TokenKind::For);
    assert_eq!(tokens[10].kind, TokenKind::While);
    assert_eq!(tokens[11].kind, TokenKind::Typeof);
    assert_eq!(tokens[12].kind, TokenKind::In);
    assert_eq!(tokens[13].kind, TokenKind::True);
    assert_eq!(tokens[14].kind, TokenKind::False);
    assert_eq!(tokens[15].kind, TokenKind::From);
    assert_eq!(tokens[16].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 17);
    assert!(tokens[..16].iter().all(|token| token.kind.is_reserved()));
}

#[test]
fn test_tokenize_keyword_prefixes_stay_identifiers() {
    let tokens = tokenize("variable constant grps _var").unwrap();

    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].value, "variable");
    assert_eq!(tokens[3].value, "_var");
    assert!(!tokens[0].kind.is_reserved());
    assert!(!TokenKind::EOF.is_reserved());
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_range_between_numbers() {
    let tokens = tokenize("1..5").unwrap();

    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].kind, TokenKind::DotDot);
    assert_eq!(tokens[2].value, "5");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "world" "multiple words""#;
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" "odd\q""#;
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "hexA");
    assert_eq!(tokens[4].value, "odd\\q");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokenize(r#""""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % == != < > <= >= = && || !"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] . .. , ; : ?"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Dot,
            TokenKind::DotDot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Question,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_compound_operators() {
    assert_eq!(
        kinds("++ -- += -="),
        vec![
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_longest_spelling_wins_without_spaces() {
    assert_eq!(
        kinds("a<=b"),
        vec![TokenKind::Identifier, TokenKind::LessEquals, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(kinds(".."), vec![TokenKind::DotDot, TokenKind::EOF]);
    assert_eq!(kinds("..."), vec![TokenKind::DotDot, TokenKind::Dot, TokenKind::EOF]);
    assert_eq!(kinds("x+=1"), vec![
        TokenKind::Identifier,
        TokenKind::PlusEquals,
        TokenKind::Number,
        TokenKind::EOF,
    ]);
}

#[test]
fn test_tokenize_punctuation_keeps_matched_text() {
    let tokens = tokenize("<= ;").unwrap();

    assert_eq!(tokens[0].value, "<=");
    assert_eq!(tokens[1].value, ";");
    assert_eq!(tokens[2].value, "EOF");
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("var x = 5; // this is a comment\nvar y = 10;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].value, "5");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Var);
    assert_eq!(tokens[6].value, "y");
    assert_eq!(tokens[9].kind, TokenKind::Semicolon);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("var x = 42;").unwrap();

    assert_eq!(tokens.len(), 6); // var, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_object_declaration() {
    let tokens = tokenize("obj Point { x: int; y: grp<int, 2>; }").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Obj);
    assert_eq!(tokens[1].value, "Point");
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].value, "x");
    assert_eq!(tokens[4].kind, TokenKind::Colon);
    assert_eq!(tokens[9].kind, TokenKind::Grp);
    assert_eq!(tokens[10].kind, TokenKind::Less);
    assert_eq!(tokens[13].kind, TokenKind::Number);
    assert_eq!(tokens[14].kind, TokenKind::Greater);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  var   x   =   42  \n\t").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("var x = @ + 1").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(
        error.get_impl(),
        &crate::errors::errors::ErrorImpl::UnrecognisedToken {
            remainder: String::from("@ + 1")
        }
    );
}

#[test]
fn test_tokenize_unterminated_string() {
    let result = tokenize("\"never closed");
    assert!(result.is_err());
}

#[test]
fn test_tokenize_lone_ampersand_is_rejected() {
    assert!(tokenize("a & b").is_err());
    assert!(tokenize("a | b").is_err());
}

#[test]
fn test_token_display() {
    let tokens = tokenize("x ;").unwrap();

    assert_eq!(tokens[0].to_string(), "Identifier (x)");
    assert_eq!(tokens[1].to_string(), "Semicolon ()");
}
