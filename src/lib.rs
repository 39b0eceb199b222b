#![allow(clippy::module_inception)]

use crate::{ast::statements::BlockStmt, errors::errors::Error};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Tokenizes and parses `source` into its root block.
pub fn parse_source(source: &str) -> Result<BlockStmt, Error> {
    let tokens = lexer::lexer::tokenize(source)?;
    parser::parser::parse(tokens)
}
