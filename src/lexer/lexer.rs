use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the byte length of the text matched at the cursor.
pub type RegexHandler = fn(&mut Lexer, usize);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    /// Anchors `pattern` to the cursor so a rule only fires on a match starting there.
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Order resolves overlaps: the first matching rule wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("[0-9]+(\\.[0-9]+)?", number_handler),
        RegexPattern::new("\\s+", skip_handler),
        RegexPattern::new("\"[^\"]*\"", string_handler),
        RegexPattern::new("//[^\n]*", skip_handler),
        RegexPattern::new("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket)),
        RegexPattern::new("\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket)),
        RegexPattern::new("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        RegexPattern::new("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        RegexPattern::new("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        RegexPattern::new("==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        RegexPattern::new("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        RegexPattern::new("!", MK_DEFAULT_HANDLER!(TokenKind::Not)),
        RegexPattern::new("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        RegexPattern::new("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals)),
        RegexPattern::new("<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        RegexPattern::new(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals)),
        RegexPattern::new(">", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        RegexPattern::new("\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or)),
        RegexPattern::new("&&", MK_DEFAULT_HANDLER!(TokenKind::And)),
        RegexPattern::new("\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::DotDot)),
        RegexPattern::new("\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot)),
        RegexPattern::new(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        RegexPattern::new(":", MK_DEFAULT_HANDLER!(TokenKind::Colon)),
        RegexPattern::new("\\?", MK_DEFAULT_HANDLER!(TokenKind::Question)),
        RegexPattern::new(",", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new("\\+\\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus)),
        RegexPattern::new("--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus)),
        RegexPattern::new("\\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals)),
        RegexPattern::new("-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals)),
        RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new("-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        RegexPattern::new("/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        RegexPattern::new("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        RegexPattern::new("%", MK_DEFAULT_HANDLER!(TokenKind::Percent)),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, value = %token.value, "push");
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// The `len` bytes starting at the cursor.
    pub fn matched(&self, len: usize) -> &str {
        &self.source[self.pos..self.pos + len]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, len: usize) {
    let matched = String::from(lexer.matched(len));
    lexer.push(MK_TOKEN!(TokenKind::Number, matched));
    lexer.advance_n(len);
}

fn skip_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_n(len);
}

fn string_handler(lexer: &mut Lexer, len: usize) {
    let string_literal = unescape(&lexer.matched(len)[1..len - 1]);

    lexer.push(MK_TOKEN!(TokenKind::String, string_literal));
    lexer.advance_n(len);
}

fn unescape(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();

                while hex.len() < 2 {
                    match chars.peek() {
                        Some(digit) if digit.is_ascii_hexdigit() => {
                            hex.push(*digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        // No digits followed, keep the escape as written
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            _ => result.push(ch), // Keep the backslash
        }
    }

    result
}

fn symbol_handler(lexer: &mut Lexer, len: usize) {
    let value = String::from(lexer.matched(len));
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, value));
    lexer.advance_n(len);
}

/// Scans `source` into tokens, terminated by exactly one `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let rule = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|matched| (pattern.handler, matched.end()))
        });

        match rule {
            Some((handler, len)) => handler(&mut lex, len),
            None => {
                return Err(Error::new(ErrorImpl::UnrecognisedToken {
                    remainder: lex.remainder().to_string(),
                }))
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF")));
    debug!(tokens = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
