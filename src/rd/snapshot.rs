//! Tree Snapshot - a normalized intermediate representation of either tree
//!
//! Parse trees carry tokens of the grammar's own type, trace trees carry plain text. The
//! snapshot flattens both into the same labelled structure so that every serializer
//! (treeviz, json, yaml) walks one shape and focuses solely on presentation.

use serde::{Deserialize, Serialize};

/// A snapshot of a tree node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// The kind of node: "NonTerminal", "Terminal" or "Trace"
    pub node_type: String,

    /// The text shown for the node
    pub label: String,

    /// Child nodes in order
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Add a child snapshot
    pub fn with_child(mut self, child: TreeSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Add multiple children
    pub fn with_children(mut self, children: Vec<TreeSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeSnapshot::node_count).sum::<usize>()
    }
}

/// Anything that can be rendered by the formatters.
pub trait ToSnapshot {
    fn to_snapshot(&self) -> TreeSnapshot;
}

impl ToSnapshot for TreeSnapshot {
    fn to_snapshot(&self) -> TreeSnapshot {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let snapshot = TreeSnapshot::new("NonTerminal", "Expr")
            .with_child(TreeSnapshot::new("Terminal", "1"))
            .with_children(vec![
                TreeSnapshot::new("Terminal", "+"),
                TreeSnapshot::new("Terminal", "2"),
            ]);

        assert_eq!(snapshot.children.len(), 3);
        assert_eq!(snapshot.children[1].label, "+");
        assert_eq!(snapshot.node_count(), 4);
    }
}
