#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;

pub use lexer::{
    lexer::{tokenize, Lexer},
    source::{BufferSource, LineSource, ReaderSource},
    tokens::{LocatedToken, Token},
};

/// A location in a source. Lines and columns start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: Rc<String>,
    pub line: u32,
    pub col: u32,
}

impl Location {
    pub fn new(file: Rc<String>, line: u32, col: u32) -> Self {
        Location { file, line, col }
    }

    pub fn null() -> Self {
        Location::new(Rc::new(String::from("<null>")), 0, 0)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}

/// Returns the text of the 1-based `line` in `source`, line ending included.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source.split_inclusive('\n').nth(index)
}

pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> test.toy
          |
        2 | return x
          | -------^
    */

    let location = error.get_location();
    let mut out = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };
    out.push_str(&format!("-> {}\n", location.file));

    let Some(line_text) = get_line(source, location.line) else {
        return out;
    };

    let line_string = location.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = (location.col as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.bytes().take_while(|c| c.is_ascii_whitespace()).count();
    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Location,
    };

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\n\n  Testing { }\n";

        assert_eq!(super::get_line(source, 1), Some("Hello, world!\n"));
        assert_eq!(super::get_line(source, 3), Some("\n"));
        assert_eq!(super::get_line(source, 4), Some("  Testing { }\n"));
        assert_eq!(super::get_line(source, 0), None);
        assert_eq!(super::get_line(source, 5), None);
    }

    #[test]
    fn test_format_error_points_at_column() {
        let source = "def f() {\n  return x\n}";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: "`;`".to_string(),
                found: "`}`".to_string(),
            },
            Location::new(Rc::new("test.toy".to_string()), 2, 10),
        );

        let rendered = super::format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (Expected `;`, found `}`)");
        assert_eq!(lines[1], "-> test.toy");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | return x");
        assert_eq!(lines[4], "  | -------^");
    }

    #[test]
    fn test_format_error_tab_indented_line() {
        let source = "var a = 1;\n\tvar b = 2 @;";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: "`;`".to_string(),
                found: "`@`".to_string(),
            },
            Location::new(Rc::new("test.toy".to_string()), 2, 12),
        );

        let rendered = super::format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "2 | var b = 2 @;");
        assert_eq!(lines[4], "  | ----------^");
        assert_eq!(lines[3].find('@'), lines[4].find('^'));
    }

    #[test]
    fn test_format_error_without_line() {
        let error = Error::new(
            ErrorImpl::ReadFailed {
                message: "stream did not contain valid UTF-8".to_string(),
            },
            Location::new(Rc::new("input".to_string()), 0, 0),
        );

        assert_eq!(super::format_error(&error, ""), "Error: ReadFailed\n-> input\n");
    }

    #[test]
    fn test_location_display() {
        let location = Location::new(Rc::new("a.toy".to_string()), 3, 7);
        assert_eq!(location.to_string(), "a.toy:3:7");
        assert_eq!(Location::null().to_string(), "<null>:0:0");
    }
}
