use super::ast::*;
use std::fmt::Write;

/// Renders a tree as nested `{ "type": ..., "value": ..., "children": [...] }`
/// entries.
///
/// Labels and text are embedded verbatim, without escaping. Callers must only
/// pass trees whose text is safe to embed; every identifier the lexer produces
/// is.
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn serialize(node: &Node) -> String {
        let mut serializer = Serializer {
            output: String::new(),
        };
        serializer.node(node);
        serializer.output
    }

    fn node(&mut self, node: &Node) {
        // Writing into a String cannot fail.
        let _ = write!(
            self.output,
            "{{ \"type\": \"{}\", \"value\": \"{}\", \"children\": [",
            node.label(),
            node.text
        );
        for (index, child) in node.children.iter().enumerate() {
            if index > 0 {
                self.output.push_str(", ");
            }
            self.node(child);
        }
        self.output.push_str("] }");
    }
}
