use super::ast::*;

enum TraceMode {
    Stdout,
    Collect(Vec<String>),
}

/// Visits a tree in pre-order, emitting one line per node.
pub struct TracePrinter {
    mode: TraceMode,
}

impl TracePrinter {
    pub fn new() -> TracePrinter {
        TracePrinter {
            mode: TraceMode::Stdout,
        }
    }

    pub fn collect() -> TracePrinter {
        TracePrinter {
            mode: TraceMode::Collect(Vec::new()),
        }
    }

    pub fn print(&mut self, root: &Node) {
        self.visit(root);
    }

    pub fn visit(&mut self, node: &Node) {
        self.write_ln(&format!(
            "Visited node of type {} with value {}",
            node.label(),
            node.text
        ));
        for child in &node.children {
            self.visit(child);
        }
    }

    pub fn collected(&self) -> &[String] {
        match &self.mode {
            TraceMode::Collect(collection) => collection,
            _ => &[],
        }
    }

    pub fn into_collected(self) -> Vec<String> {
        match self.mode {
            TraceMode::Collect(collection) => collection,
            _ => Vec::new(),
        }
    }

    fn write_ln(&mut self, line: &str) {
        match &mut self.mode {
            TraceMode::Stdout => println!("{}", line),
            TraceMode::Collect(collection) => collection.push(String::from(line)),
        }
    }
}
