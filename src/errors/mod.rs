//! Error types and error handling for the front end.
//!
//! This module defines the error types produced while tokenizing and
//! parsing. It includes:
//!
//! - A single `Error` value carried through every `Result`
//! - Specific error variants for each failure
//! - Classification into lexical, missing-handler, expectation and semantic failures
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
