//! Error types reported alongside the lexer.
//!
//! The lexer itself never fails on bad input; odd characters and malformed
//! numbers come through as tokens. Errors here cover the checked
//! `Lexer::expect` and read failures of a `ReaderSource`.

pub mod errors;

#[cfg(test)]
mod tests;
