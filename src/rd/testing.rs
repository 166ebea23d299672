//! Fluent assertions for parse and trace trees
//!
//!     Grammar tests tend to either compare full renderings, which is exact but brittle when
//!     an unrelated rule changes, or walk `children[0].children[1]` by hand, which is
//!     unreadable. These helpers sit in between: navigate to the part of the tree the test is
//!     about and check only that.
//!
//!     ```rust,ignore
//!     assert_tree(&tree)
//!         .name("Expr")
//!         .child_count(2)
//!         .child(1, |expr_prime| {
//!             expr_prime.name("Expr'").child(0, |op| op.token("+"));
//!         })
//!         .leaves(&["1", "+", "2"]);
//!     ```
//!
//!     Tokens are compared through their `Display` output so the same assertions work for
//!     any token type.

use crate::rd::token::Token;
use crate::rd::trace::TraceTree;
use crate::rd::tree::Tree;

pub fn assert_tree<T: Token>(tree: &Tree<T>) -> TreeAssertion<'_, T> {
    TreeAssertion {
        tree,
        path: tree.label.to_string(),
    }
}

pub fn assert_trace(trace: &TraceTree) -> TraceAssertion<'_> {
    TraceAssertion {
        trace,
        path: trace.label.clone(),
    }
}

pub struct TreeAssertion<'a, T: Token> {
    tree: &'a Tree<T>,
    path: String,
}

impl<'a, T: Token> TreeAssertion<'a, T> {
    /// The node is the non-terminal `expected`.
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.tree.name(),
            Some(expected),
            "{}: expected non-terminal {expected}",
            self.path
        );
        self
    }

    /// The node is a terminal printing as `expected`.
    pub fn token(self, expected: &str) -> Self {
        let got = self.tree.token().map(ToString::to_string);
        assert_eq!(
            got.as_deref(),
            Some(expected),
            "{}: expected terminal {expected}",
            self.path
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.tree.children.len(),
            expected,
            "{}: unexpected number of children",
            self.path
        );
        self
    }

    /// Run assertions on the child at `index`.
    pub fn child<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(TreeAssertion<'a, T>),
    {
        let Some(child) = self.tree.children.get(index) else {
            panic!(
                "{}: no child {index}, only {} children",
                self.path,
                self.tree.children.len()
            );
        };
        check(TreeAssertion {
            tree: child,
            path: format!("{}/{}", self.path, child.label),
        });
        self
    }

    /// The leaves, left to right, print as `expected`.
    pub fn leaves(self, expected: &[&str]) -> Self {
        let got: Vec<String> = self.tree.leaves().iter().map(|t| t.to_string()).collect();
        assert_eq!(got, expected, "{}: unexpected leaves", self.path);
        self
    }

    /// The subtree renders exactly as `expected`.
    pub fn renders(self, expected: &str) -> Self {
        assert_eq!(self.tree.render(), expected, "{}: unexpected rendering", self.path);
        self
    }
}

pub struct TraceAssertion<'a> {
    trace: &'a TraceTree,
    path: String,
}

impl<'a> TraceAssertion<'a> {
    pub fn label(self, expected: &str) -> Self {
        assert_eq!(self.trace.label, expected, "{}: unexpected label", self.path);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.trace.children.len(),
            expected,
            "{}: unexpected number of children",
            self.path
        );
        self
    }

    pub fn child<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(TraceAssertion<'a>),
    {
        let Some(child) = self.trace.children.get(index) else {
            panic!(
                "{}: no child {index}, only {} children",
                self.path,
                self.trace.children.len()
            );
        };
        check(TraceAssertion {
            trace: child,
            path: format!("{}/{}", self.path, child.label),
        });
        self
    }

    /// Some node anywhere below (or at) this one has exactly the label `expected`.
    pub fn contains(self, expected: &str) -> Self {
        assert!(
            self.trace.labels().contains(&expected),
            "{}: no entry {expected:?} in trace",
            self.path
        );
        self
    }

    /// Every non-terminal node below this one was closed with a result.
    pub fn all_closed(self) -> Self {
        fn check(trace: &TraceTree, path: &str) {
            let is_entry = trace.label.contains(" = ") || trace.label.contains(" ≠ ");
            if !is_entry {
                assert!(
                    trace.label.ends_with("(true)") || trace.label.ends_with("(false)"),
                    "{path}: non-terminal {} was not closed",
                    trace.label
                );
            }
            for child in &trace.children {
                check(child, path);
            }
        }
        check(self.trace, &self.path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<String> {
        let mut number = Tree::non_terminal("Number");
        number.add(Tree::terminal("7".to_string()));
        let mut factor = Tree::non_terminal("Factor");
        factor.add(Tree::terminal("-".to_string()));
        factor.add(number);
        factor
    }

    #[test]
    fn test_tree_assertions_pass() {
        assert_tree(&sample())
            .name("Factor")
            .child_count(2)
            .child(0, |minus| {
                minus.token("-").child_count(0);
            })
            .child(1, |number| {
                number.name("Number").child(0, |leaf| {
                    leaf.token("7");
                });
            })
            .leaves(&["-", "7"])
            .renders("Factor\n├─ -\n└─ Number\n   └─ 7\n");
    }

    #[test]
    #[should_panic(expected = "Factor/Number: expected non-terminal Term")]
    fn test_failure_reports_path() {
        assert_tree(&sample()).child(1, |number| {
            number.name("Term");
        });
    }

    #[test]
    #[should_panic(expected = "no child 5")]
    fn test_missing_child() {
        assert_tree(&sample()).child(5, |_| {});
    }

    #[test]
    fn test_trace_assertions() {
        let mut inner = TraceTree::new("Number");
        inner.close(true);
        let mut root = TraceTree::new("Factor");
        root.add(TraceTree::mismatched("7", "("));
        root.add(inner);
        root.close(true);

        assert_trace(&root)
            .label("Factor(true)")
            .child_count(2)
            .child(0, |entry| {
                entry.label("7 ≠ (");
            })
            .contains("Number(true)")
            .all_closed();
    }

    #[test]
    #[should_panic(expected = "was not closed")]
    fn test_unclosed_trace_detected() {
        assert_trace(&TraceTree::new("Expr")).all_closed();
    }
}
