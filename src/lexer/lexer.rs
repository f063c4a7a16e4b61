use std::{borrow::Cow, rc::Rc};

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location,
};

use super::{
    source::{BufferSource, LineSource},
    tokens::{LocatedToken, Token, RESERVED_LOOKUP},
};

pub const DEFAULT_FILE_NAME: &str = "shell";

/// Pull-based lexer over a [`LineSource`].
///
/// Only one token is current at a time. `next_token` replaces it, reading as
/// many characters as the next token needs plus one character of lookahead.
pub struct Lexer<'a, S: LineSource<'a>> {
    source: S,
    cur_tok: Token,
    last_location: Location,
    /// The last character read from the source, `None` once it is exhausted.
    last_char: Option<u8>,
    cur_line: u32,
    cur_col: u32,
    line_buffer: Cow<'a, str>,
    buffer_pos: usize,
}

impl<'a> Lexer<'a, BufferSource<'a>> {
    pub fn from_buffer(buffer: &'a str, file: Option<String>) -> Self {
        Lexer::new(BufferSource::new(buffer), file)
    }
}

impl<'a, S: LineSource<'a>> Lexer<'a, S> {
    pub fn new(source: S, file: Option<String>) -> Self {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from(DEFAULT_FILE_NAME)));
        trace!(target: "toy::lexer", file = %file_name, "Creating new Lexer");

        Lexer {
            source,
            cur_tok: Token::Eof,
            last_location: Location::new(file_name, 0, 0),
            last_char: Some(b' '),
            cur_line: 0,
            cur_col: 0,
            // Consuming this newline pulls in the first real line and moves
            // the counters to line 1.
            line_buffer: Cow::Borrowed("\n"),
            buffer_pos: 0,
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.cur_tok
    }

    /// Moves to the next token and returns it.
    pub fn next_token(&mut self) -> &Token {
        self.cur_tok = self.get_tok();
        debug!(
            target: "toy::lexer",
            token = %self.cur_tok,
            line = self.last_location.line,
            col = self.last_location.col,
            "Lexed token"
        );
        &self.cur_tok
    }

    /// Moves past `expected`, which the caller guarantees is the current
    /// token.
    pub fn consume(&mut self, expected: &Token) {
        debug_assert_eq!(expected, &self.cur_tok, "consume Token mismatch expectation");
        self.next_token();
    }

    /// Checked form of [`Lexer::consume`]. On a mismatch the lexer does not
    /// move and the error points at the current token.
    pub fn expect(&mut self, expected: &Token) -> Result<Token, Error> {
        if &self.cur_tok != expected {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected.to_string(),
                    found: self.cur_tok.to_string(),
                },
                self.last_location.clone(),
            ));
        }

        Ok(self.next_token().clone())
    }

    pub fn identifier(&self) -> Option<&str> {
        match &self.cur_tok {
            Token::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self.cur_tok {
            Token::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Location of the first character of the current token.
    pub fn last_location(&self) -> &Location {
        &self.last_location
    }

    pub fn located(&self) -> LocatedToken {
        LocatedToken {
            token: self.cur_tok.clone(),
            location: self.last_location.clone(),
        }
    }

    pub fn file(&self) -> &Rc<String> {
        &self.last_location.file
    }

    /// Line of the last character read, which may be past the current token.
    pub fn line(&self) -> u32 {
        self.cur_line
    }

    /// Column of the last character read, which may be past the current token.
    pub fn col(&self) -> u32 {
        self.cur_col
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn get_next_char(&mut self) -> Option<u8> {
        let next_char = *self.line_buffer.as_bytes().get(self.buffer_pos)?;
        self.cur_col += 1;
        self.buffer_pos += 1;

        if self.buffer_pos >= self.line_buffer.len() {
            self.line_buffer = self.source.next_line();
            self.buffer_pos = 0;
        }

        if next_char == b'\n' {
            self.cur_line += 1;
            self.cur_col = 0;
        }

        Some(next_char)
    }

    fn get_tok(&mut self) -> Token {
        loop {
            while self.last_char.is_some_and(is_space) {
                self.last_char = self.get_next_char();
            }

            self.last_location.line = self.cur_line;
            self.last_location.col = self.cur_col;

            let Some(c) = self.last_char else {
                // Don't eat the end of input, it stays current from here on.
                return Token::Eof;
            };

            // Identifier: [a-zA-Z][a-zA-Z0-9_]*
            if c.is_ascii_alphabetic() {
                let mut identifier = String::from(char::from(c));
                loop {
                    self.last_char = self.get_next_char();
                    match self.last_char {
                        Some(c) if c.is_ascii_alphanumeric() || c == b'_' => {
                            identifier.push(char::from(c))
                        }
                        _ => break,
                    }
                }

                return match RESERVED_LOOKUP.get(identifier.as_str()) {
                    Some(keyword) => keyword.clone(),
                    None => Token::Identifier(identifier),
                };
            }

            // Number: [0-9.]+
            if is_number_char(c) {
                let mut number = String::new();
                while let Some(c) = self.last_char.filter(|c| is_number_char(*c)) {
                    number.push(char::from(c));
                    self.last_char = self.get_next_char();
                }

                return Token::Number(parse_number(&number));
            }

            if c == b'#' {
                // Comment until end of line, then start over.
                loop {
                    self.last_char = self.get_next_char();
                    if matches!(self.last_char, None | Some(b'\n' | b'\r')) {
                        break;
                    }
                }
                continue;
            }

            self.last_char = self.get_next_char();
            return Token::Char(char::from(c));
        }
    }
}

fn is_space(c: u8) -> bool {
    // Same set as C's isspace, which includes vertical tab.
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn is_number_char(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.'
}

fn parse_number(number: &str) -> f64 {
    number.parse().unwrap_or_else(|_| {
        debug!(target: "toy::lexer", number, "Malformed number literal, using 0");
        0.0
    })
}

/// Lexes an in-memory buffer to the end, returning every token including
/// the final `Eof`.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<LocatedToken> {
    let mut lex = Lexer::from_buffer(source, file);
    let mut tokens = vec![];

    loop {
        lex.next_token();
        tokens.push(lex.located());

        if lex.current_token() == &Token::Eof {
            break;
        }
    }

    tokens
}
