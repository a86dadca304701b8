use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    Program,
    Statement,
}

impl NodeKind {
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Statement => "Statement",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A node of the syntax tree. Children are owned by their parent; the tree is
/// never shared or restructured once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, text: &str) -> Self {
        Node {
            kind,
            text: String::from(text),
            children: Vec::new(),
        }
    }

    pub fn program() -> Self {
        Node::new(NodeKind::Program, "")
    }

    pub fn statement(text: &str) -> Self {
        Node::new(NodeKind::Statement, text)
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Calls `action` for this node and every descendant in pre-order,
    /// passing each node's depth below `self`.
    pub fn walk<F>(&self, action: &mut F)
    where
        F: FnMut(&Node, usize),
    {
        self.walk_at(0, action);
    }

    fn walk_at<F>(&self, depth: usize, action: &mut F)
    where
        F: FnMut(&Node, usize),
    {
        action(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, action);
        }
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_, _| count += 1);
        count
    }
}
