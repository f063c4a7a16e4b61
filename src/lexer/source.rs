//! Suppliers of input for the lexer.
//!
//! The lexer never reads input itself. It asks a [`LineSource`] for the next
//! chunk whenever the current one runs out, and treats an empty chunk as the
//! end of input.

use std::{borrow::Cow, io::BufRead, rc::Rc};

use tracing::{trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location,
};

/// Supplies the lexer with input, one chunk at a time.
///
/// Chunks are concatenated as-is, so a chunk must already carry its line
/// ending if the lexer is to see one. Once exhausted, every further call
/// must keep returning an empty chunk.
pub trait LineSource<'a> {
    fn next_line(&mut self) -> Cow<'a, str>;
}

/// Serves an in-memory buffer one line at a time.
#[derive(Debug, Clone)]
pub struct BufferSource<'a> {
    buffer: &'a str,
    current: usize,
}

impl<'a> BufferSource<'a> {
    pub fn new(buffer: &'a str) -> Self {
        BufferSource { buffer, current: 0 }
    }

    /// The part of the buffer not handed out yet.
    pub fn remainder(&self) -> &'a str {
        &self.buffer[self.current..]
    }
}

impl<'a> LineSource<'a> for BufferSource<'a> {
    fn next_line(&mut self) -> Cow<'a, str> {
        let rest = self.remainder();
        let len = match rest.find('\n') {
            Some(newline) => newline + 1,
            None => rest.len(),
        };

        self.current += len;
        Cow::Borrowed(&rest[..len])
    }
}

/// Reads lines from any buffered reader, e.g. a file or stdin.
///
/// A read failure ends the input. The error is kept so the caller can tell
/// a truncated read apart from a real end of file.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    error: Option<std::io::Error>,
    done: bool,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            reader,
            error: None,
            done: false,
        }
    }

    /// Takes the read error that ended the input, if there was one.
    pub fn take_error(&mut self, file: Rc<String>) -> Option<Error> {
        self.error.take().map(|err| {
            Error::new(
                ErrorImpl::ReadFailed {
                    message: err.to_string(),
                },
                Location::new(file, 0, 0),
            )
        })
    }
}

impl<'a, R: BufRead> LineSource<'a> for ReaderSource<R> {
    fn next_line(&mut self) -> Cow<'a, str> {
        if self.done {
            return Cow::Borrowed("");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                trace!(target: "toy::lexer", "Reader exhausted");
                self.done = true;
                Cow::Borrowed("")
            }
            Ok(_) => Cow::Owned(line),
            Err(err) => {
                warn!(target: "toy::lexer", error = %err, "Failed to read next line, ending input");
                self.error = Some(err);
                self.done = true;
                Cow::Borrowed("")
            }
        }
    }
}
