//! Trace tree
//!
//!     The trace tree is the audit log of a parse. Every non-terminal call gets a node,
//!     closed with its result as `Name(true)` or `Name(false)`, and every match attempt adds
//!     a leaf describing what was compared: `got = expected`, `got ≠ expected` or
//!     `<no tokens left> ≠ expected`. Unlike the parse tree nothing is ever discarded, so
//!     failed alternatives stay visible.

use crate::rd::formats::treeviz::to_treeviz_str;
use crate::rd::snapshot::{ToSnapshot, TreeSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder printed in place of a token when the input is exhausted.
pub const NO_TOKENS_LEFT: &str = "<no tokens left>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceTree {
    pub label: String,
    pub children: Vec<TraceTree>,
}

impl TraceTree {
    pub fn new(label: impl Into<String>) -> Self {
        TraceTree {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Entry for a token that equals the expected one.
    pub fn matched(got: impl fmt::Display, expected: impl fmt::Display) -> Self {
        Self::new(format!("{got} = {expected}"))
    }

    /// Entry for a token that differs from the expected one.
    pub fn mismatched(got: impl fmt::Display, expected: impl fmt::Display) -> Self {
        Self::new(format!("{got} ≠ {expected}"))
    }

    /// Entry for a match attempted after the last token.
    pub fn exhausted(expected: impl fmt::Display) -> Self {
        Self::mismatched(NO_TOKENS_LEFT, expected)
    }

    pub fn add(&mut self, child: TraceTree) {
        self.children.push(child);
    }

    /// Append the non-terminal result to the label.
    pub fn close(&mut self, result: bool) {
        self.label.push_str(&format!("({result})"));
    }

    /// Number of nodes in this tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TraceTree::node_count).sum::<usize>()
    }

    /// All labels in depth-first order, this node first.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels = vec![self.label.as_str()];
        for child in &self.children {
            labels.extend(child.labels());
        }
        labels
    }

    pub fn render(&self) -> String {
        to_treeviz_str(&self.to_snapshot())
    }
}

impl ToSnapshot for TraceTree {
    fn to_snapshot(&self) -> TreeSnapshot {
        TreeSnapshot::new("Trace", self.label.clone())
            .with_children(self.children.iter().map(ToSnapshot::to_snapshot).collect())
    }
}

impl fmt::Display for TraceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
