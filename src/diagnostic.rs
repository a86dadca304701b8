use crate::source::*;
use colored::*;
use log::debug;
use std::fmt;
use std::io::{self, IsTerminal};
use std::rc::Rc;

pub type DiagnosticResult<T> = Result<T, Diagnostic>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn error<T: ContainsSpan>(item: &T, message: &str) -> Self {
        Diagnostic {
            severity: Severity::Error,
            span: item.span().clone(),
            message: String::from(message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Diagnostic(message: {}, span: {:?})", self.message, self.span)
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        let diagnostics: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        format!("Vec({})", diagnostics.join(", "))
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

/// Writes each diagnostic's message as a single line on stderr. The line is
/// only styled when stderr itself is a terminal.
pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        debug!(target: "diagnostic", "{} at {}", diagnostic.message, diagnostic.span.location());

        eprintln!("{}", styled(&diagnostic, io::stderr().is_terminal()));
    }
}

fn styled(diagnostic: &Diagnostic, colorize: bool) -> String {
    if !colorize {
        return diagnostic.message.clone();
    }
    match diagnostic.severity {
        Severity::Error => diagnostic.message.red().to_string(),
    }
}
