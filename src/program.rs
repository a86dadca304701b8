use crate::lexing::Token;
use crate::parsing::Node;
use crate::source::Source;

pub struct LexedProgram {
    pub source: Source,
    pub tokens: Vec<Token>,
}

pub struct ParsedProgram {
    pub source: Source,
    pub root: Node,
}
