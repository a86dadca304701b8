pub mod diagnostic;
pub mod lexing;
pub mod parsing;
pub mod program;
pub mod source;

use diagnostic::*;
use lexing::*;
use parsing::*;
pub use program::*;
pub use source::{load, text, Source};
use log::debug;
use std::rc::Rc;

pub struct Output {
    pub program: ParsedProgram,
    pub trace: Vec<String>,
    pub serialized: String,
}

/// Runs the whole pipeline, printing the visitor trace and the serialized
/// tree to stdout and diagnostics to stderr.
pub fn run(source: Source, mode: LexMode) {
    let reporter: Rc<dyn Reporter> = DefaultReporter::new();
    let parsed = parse(source, mode, reporter);

    let mut printer = TracePrinter::new();
    printer.print(&parsed.root);

    println!("Serialized AST: {}", Serializer::serialize(&parsed.root));
}

pub fn run_with_reporter(source: Source, mode: LexMode, reporter: Rc<dyn Reporter>) -> Output {
    let parsed = parse(source, mode, reporter);

    let mut printer = TracePrinter::collect();
    printer.print(&parsed.root);
    let serialized = Serializer::serialize(&parsed.root);

    Output {
        program: parsed,
        trace: printer.into_collected(),
        serialized,
    }
}

fn parse(source: Source, mode: LexMode, reporter: Rc<dyn Reporter>) -> ParsedProgram {
    let lexed = Lexer::new(source).lex(mode);
    debug!(target: "lexer", "Lexed {} tokens", lexed.tokens.len());

    let parsed = Parser::new(lexed, reporter).parse();
    debug!(target: "parser", "Parsed {} statements", parsed.root.children.len());

    parsed
}
