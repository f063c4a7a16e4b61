//! Lexical analysis module.
//!
//! This module contains the streaming lexer that turns source text into
//! tokens for a parser, one token per request. It handles:
//!
//! - Pulling input line by line from a `LineSource`
//! - Recognition of keywords, identifiers and number literals
//! - `#` comments and whitespace handling
//! - Line and column tracking for every token

pub mod lexer;
pub mod source;
pub mod tokens;
