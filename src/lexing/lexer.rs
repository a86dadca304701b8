use super::token::*;
use crate::program::LexedProgram;
use crate::source::*;
use log::trace;

/// Decides when [`Lexer::lex`] stops pulling tokens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LexMode {
    /// Lex until end of input; unrecognized characters become `Unknown` tokens.
    ToEnd,
    /// Stop at the first `Unknown` token as well as at end of input.
    HaltOnUnrecognized,
}

impl Default for LexMode {
    fn default() -> Self {
        LexMode::ToEnd
    }
}

impl LexMode {
    fn stops_at(self, kind: TokenKind) -> bool {
        match (self, kind) {
            (_, TokenKind::EOF) => true,
            (LexMode::HaltOnUnrecognized, TokenKind::Unknown) => true,
            _ => false,
        }
    }
}

pub struct Lexer {
    source: Source,
    start: usize,
    current: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: Source) -> Self {
        Lexer {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn lex(mut self, mode: LexMode) -> LexedProgram {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = mode.stops_at(token.kind);
            tokens.push(token);
            if done {
                break;
            }
        }

        LexedProgram {
            source: self.source,
            tokens,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.current;

        let token = match self.peek() {
            None => self.make_token(TokenKind::EOF),
            Some(character) if is_identifier_start(character) => self.identifier(),
            Some(character) if character.is_ascii_digit() => self.literal(),
            Some(_) => {
                self.advance();
                self.make_token(TokenKind::Unknown)
            }
        };

        trace!(target: "lexer", "{}", token);
        token
    }

    fn skip_whitespace(&mut self) {
        while let Some(character) = self.peek() {
            match character {
                '\n' => self.line += 1,
                ' ' | '\t' | '\r' | '\x0B' | '\x0C' => (),
                _ => break,
            }
            self.advance();
        }
    }

    fn identifier(&mut self) -> Token {
        self.advance_while(|c| is_identifier_start(c) || c.is_ascii_digit());
        self.make_token(TokenKind::Identifier)
    }

    fn literal(&mut self) -> Token {
        self.advance_while(|c| c.is_ascii_digit());
        self.make_token(TokenKind::Literal)
    }

    fn advance_while<F>(&mut self, test: F)
    where
        F: Fn(char) -> bool,
    {
        while let Some(character) = self.peek() {
            if !test(character) {
                break;
            }
            self.advance();
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let span = Span::new(
            &self.source,
            self.start,
            self.current - self.start,
            self.line,
        );
        Token::new(kind, span)
    }

    fn advance(&mut self) {
        if let Some(character) = self.peek() {
            self.current += character.len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        if self.current >= self.source.length() {
            None
        } else {
            self.source.character(self.current)
        }
    }
}

fn is_identifier_start(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}
