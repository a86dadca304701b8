use super::ast::*;
use crate::diagnostic::*;
use crate::lexing::*;
use crate::program::*;
use crate::source::*;
use log::trace;
use std::rc::Rc;

type Result<T> = DiagnosticResult<T>;

pub struct Parser {
    source: Source,
    tokens: Vec<Token>,
    index: usize,
    reporter: Rc<dyn Reporter>,
}

impl Parser {
    pub fn new(program: LexedProgram, reporter: Rc<dyn Reporter>) -> Self {
        Parser {
            source: program.source,
            tokens: program.tokens,
            index: 0,
            reporter,
        }
    }

    pub fn parse(mut self) -> ParsedProgram {
        let root = self.program();
        ParsedProgram {
            source: self.source,
            root,
        }
    }

    fn program(&mut self) -> Node {
        let mut program = Node::program();

        while !self.is_at_end() {
            let start = self.index;
            match self.statement() {
                Ok(stmt) => {
                    trace!(target: "parser", "Parsed statement {}", stmt.text);
                    program.add_child(stmt);
                }
                Err(diagnostic) => {
                    self.reporter.report(diagnostic);
                    if self.index == start {
                        self.synchronize();
                    }
                }
            }
        }

        program
    }

    fn statement(&mut self) -> Result<Node> {
        let token = self.peek();
        if token.kind != TokenKind::Identifier {
            let message = format!("Unexpected token: {}", token.lexeme());
            return Err(Diagnostic::error(&token, &message));
        }

        let stmt = Node::statement(token.lexeme());
        self.advance();

        let terminator = self.peek();
        if terminator.lexeme() == ";" {
            self.advance();
            Ok(stmt)
        } else {
            Err(Diagnostic::error(
                &terminator,
                "Expected semicolon after identifier.",
            ))
        }
    }

    /// Skips the token a failed statement could not consume so the next
    /// attempt starts further along.
    fn synchronize(&mut self) {
        trace!(target: "parser", "Skipping {}", self.peek());
        self.advance();
    }

    fn peek(&self) -> Token {
        match self.tokens.get(self.index) {
            Some(token) => token.clone(),
            None => self.end_of_input(),
        }
    }

    fn end_of_input(&self) -> Token {
        let index = self.source.length();
        let line = self.tokens.last().map(|t| t.span.line).unwrap_or(1);
        Token::new(TokenKind::EOF, Span::new(&self.source, index, 0, line))
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn is_at_end(&self) -> bool {
        match self.tokens.get(self.index) {
            Some(token) => token.kind == TokenKind::EOF,
            None => true,
        }
    }
}
