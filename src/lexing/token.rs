use crate::source::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Operator,
    Literal,
    Comment,
    Whitespace,
    /// A single character the lexer does not recognize, `;` included.
    Unknown,
    EOF,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    pub fn lexeme(&self) -> &str {
        self.span.lexeme()
    }
}

impl ContainsSpan for Token {
    fn span(&self) -> &Span {
        &self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Token(kind: {:?}, lexeme: {})",
            self.kind,
            self.lexeme()
        )
    }
}

pub trait TokenString {
    fn token_string(&self) -> String;
}

impl TokenString for [Token] {
    fn token_string(&self) -> String {
        let toks: Vec<String> = self.iter().map(|t| t.to_string()).collect();
        format!("Vec({})", toks.join(", "))
    }
}
