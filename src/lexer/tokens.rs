use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("const", TokenKind::Const);
        map.insert("obj", TokenKind::Obj);
        map.insert("grp", TokenKind::Grp);
        map.insert("func", TokenKind::Func);
        map.insert("import", TokenKind::Import);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("typeof", TokenKind::Typeof);
        map.insert("in", TokenKind::In);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("from", TokenKind::From);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    DotDot,
    Semicolon,
    Colon,
    Question,
    Comma,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Var,
    Const,
    Obj,
    Grp,
    Func,
    Import,
    Return,
    If,
    Else,
    For,
    While,
    Typeof,
    In,
    True,
    False,
    From,
}

impl TokenKind {
    /// Returns true for kinds whose lexeme carries information beyond the kind itself.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::Identifier | TokenKind::Number
        )
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_literal() {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{} ()", self.kind)
        }
    }
}
