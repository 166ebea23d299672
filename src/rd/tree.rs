//! Parse tree
//!
//!     A parse tree node is labelled either with a non-terminal name or with a consumed
//!     token. Non-terminal nodes are built by the frame that owns them and are moved into
//!     their parent when that frame commits, so a node is never shared between two places.
//!     Terminal nodes are always leaves.

use crate::rd::formats::treeviz::to_treeviz_str;
use crate::rd::snapshot::{ToSnapshot, TreeSnapshot};
use crate::rd::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Label<T> {
    NonTerminal(String),
    Terminal(T),
}

impl<T: fmt::Display> fmt::Display for Label<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::NonTerminal(name) => write!(f, "{name}"),
            Label::Terminal(token) => write!(f, "{token}"),
        }
    }
}

/// A node of the parse tree with its ordered children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree<T> {
    pub label: Label<T>,
    pub children: Vec<Tree<T>>,
}

impl<T: Token> Tree<T> {
    pub fn non_terminal(name: impl Into<String>) -> Self {
        Tree {
            label: Label::NonTerminal(name.into()),
            children: Vec::new(),
        }
    }

    pub fn terminal(token: T) -> Self {
        Tree {
            label: Label::Terminal(token),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, child: Tree<T>) {
        self.children.push(child);
    }

    /// The non-terminal name, if this is a non-terminal node.
    pub fn name(&self) -> Option<&str> {
        match &self.label {
            Label::NonTerminal(name) => Some(name),
            Label::Terminal(_) => None,
        }
    }

    /// The token, if this is a terminal node.
    pub fn token(&self) -> Option<&T> {
        match &self.label {
            Label::NonTerminal(_) => None,
            Label::Terminal(token) => Some(token),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.label, Label::Terminal(_))
    }

    /// Tokens of all leaves, left to right.
    pub fn leaves(&self) -> Vec<&T> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, into: &mut Vec<&'a T>) {
        if let Label::Terminal(token) = &self.label {
            into.push(token);
        }
        for child in &self.children {
            child.collect_leaves(into);
        }
    }

    /// Render as the box-drawing tree diagram.
    pub fn render(&self) -> String {
        to_treeviz_str(&self.to_snapshot())
    }
}

impl<T: Token> ToSnapshot for Tree<T> {
    fn to_snapshot(&self) -> TreeSnapshot {
        let node_type = match self.label {
            Label::NonTerminal(_) => "NonTerminal",
            Label::Terminal(_) => "Terminal",
        };
        TreeSnapshot::new(node_type, self.label.to_string())
            .with_children(self.children.iter().map(ToSnapshot::to_snapshot).collect())
    }
}

impl<T: Token> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<String> {
        let mut number = Tree::non_terminal("Number");
        number.add(Tree::terminal("1".to_string()));
        let mut expr = Tree::non_terminal("Expr");
        expr.add(number);
        expr.add(Tree::terminal("+".to_string()));
        expr
    }

    #[test]
    fn test_accessors() {
        let tree = sample();
        assert_eq!(tree.name(), Some("Expr"));
        assert_eq!(tree.token(), None);
        assert!(tree.children[1].is_terminal());
        assert_eq!(tree.children[1].token().map(String::as_str), Some("+"));
    }

    #[test]
    fn test_leaves_in_order() {
        let tree = sample();
        let leaves: Vec<&str> = tree.leaves().into_iter().map(String::as_str).collect();
        assert_eq!(leaves, vec!["1", "+"]);
    }

    #[test]
    fn test_display_renders_diagram() {
        let expected = "Expr\n├─ Number\n│  └─ 1\n└─ +\n";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_snapshot_kinds() {
        let snapshot = sample().to_snapshot();
        assert_eq!(snapshot.node_type, "NonTerminal");
        assert_eq!(snapshot.children[0].children[0].node_type, "Terminal");
        assert_eq!(snapshot.children[0].children[0].label, "1");
    }
}
