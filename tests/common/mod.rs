pub use stmtree::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_span {

    use stmtree::source::*;

    pub fn new(index: usize, length: usize) -> Span {
        Span::new(&text(""), index, length, 1)
    }
}

#[allow(dead_code)]
pub mod test_token {

    use stmtree::lexing::*;
    use stmtree::program::LexedProgram;
    use stmtree::source::{self, Span};

    pub fn test(kind: TokenKind, text: &str) -> Token {
        let span = Span::new(&source::text(text), 0, text.len(), 1);
        Token::new(kind, span)
    }

    pub fn identifier(name: &str) -> Token {
        test(TokenKind::Identifier, name)
    }

    pub fn literal(digits: &str) -> Token {
        test(TokenKind::Literal, digits)
    }

    pub fn semicolon() -> Token {
        test(TokenKind::Unknown, ";")
    }

    pub fn unknown(character: &str) -> Token {
        test(TokenKind::Unknown, character)
    }

    pub fn eof() -> Token {
        test(TokenKind::EOF, "")
    }

    /// Lays the tokens out one after another in a fresh source, separated by
    /// single spaces.
    pub fn join(tokens: &[Token]) -> LexedProgram {
        let combined = tokens
            .iter()
            .map(|t| t.lexeme())
            .collect::<Vec<_>>()
            .join(" ");
        let new_source = source::text(&combined);
        let mut index = 0;
        let tokens = tokens
            .iter()
            .map(|t| {
                let length = t.span.length;
                let new_t = Token::new(t.kind, Span::new(&new_source, index, length, 1));
                index += length + 1;
                new_t
            })
            .collect();
        LexedProgram {
            source: new_source,
            tokens,
        }
    }
}

pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl TestReporter {
    pub fn new() -> (Rc<dyn Reporter>, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            Rc::new(TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            }),
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

#[allow(dead_code)]
pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!(
            "Expected {} {}, got {}",
            expected.len(),
            kind,
            got.len(),
        );
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}

#[allow(dead_code)]
pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}
