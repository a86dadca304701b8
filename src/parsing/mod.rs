mod ast;
mod parser;
mod serializer;
mod visitor;

pub use ast::{Node, NodeKind};
pub use parser::Parser;
pub use serializer::Serializer;
pub use visitor::TracePrinter;
