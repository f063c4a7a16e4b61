use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, rc::Rc};

use crate::Location;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("return", Token::Return);
        map.insert("var", Token::Var);
        map.insert("def", Token::Def);
        map
    };
}

/// A single token produced by the lexer.
///
/// Punctuation and any character the lexer does not recognise are carried
/// as `Char`, leaving it to the parser to reject the ones it does not expect.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Eof,

    // Reserved
    Return,
    Var,
    Def,

    Identifier(String),
    Number(f64),

    Char(char),
}

impl Token {
    pub const SEMICOLON: Token = Token::Char(';');
    pub const PAREN_OPEN: Token = Token::Char('(');
    pub const PAREN_CLOSE: Token = Token::Char(')');
    pub const BRACKET_OPEN: Token = Token::Char('{');
    pub const BRACKET_CLOSE: Token = Token::Char('}');
    pub const SBRACKET_OPEN: Token = Token::Char('[');
    pub const SBRACKET_CLOSE: Token = Token::Char(']');

    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Return | Token::Var | Token::Def)
    }

    /// True for the fixed punctuation set understood by the grammar.
    pub fn is_punctuation(&self) -> bool {
        matches!(self, Token::Char(';' | '(' | ')' | '{' | '}' | '[' | ']'))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Eof => write!(f, "<eof>"),
            Token::Return => write!(f, "return"),
            Token::Var => write!(f, "var"),
            Token::Def => write!(f, "def"),
            Token::Identifier(name) => write!(f, "identifier `{}`", name),
            Token::Number(value) => write!(f, "number `{}`", value),
            Token::Char(c) => write!(f, "`{}`", c.escape_default()),
        }
    }
}

/// A token paired with the location it started at.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedToken {
    pub token: Token,
    pub location: Location,
}

impl LocatedToken {
    pub fn file(&self) -> &Rc<String> {
        &self.location.file
    }
}

impl Display for LocatedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.token, self.location)
    }
}
