//! Treeviz formatter for parse and trace trees
//!
//! One line per node. The root label stands alone on the first line, every other node is
//! drawn with a connector to its parent:
//!
//!     Expr
//!     ├─ Term
//!     │  └─ Factor
//!     └─ Expr'
//!        └─ +
//!
//! A child uses `├─ ` unless it is the last of its siblings, which uses `└─ `. The prefix
//! handed down to a child's own children grows by `│  ` below a non-last child and by three
//! spaces below the last one. Every line, the last included, ends with `\n`.
//!
//! Tests compare this output byte for byte, so nothing here may add padding or trim.

use crate::rd::formats::registry::{FormatError, Formatter};
use crate::rd::snapshot::TreeSnapshot;

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const PIPE: &str = "│  ";
const SPACE: &str = "   ";

fn format_snapshot(output: &mut String, snapshot: &TreeSnapshot, prefix: &str, is_last: bool) {
    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(&snapshot.label);
    output.push('\n');

    let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
    format_children(output, snapshot, &child_prefix);
}

fn format_children(output: &mut String, snapshot: &TreeSnapshot, prefix: &str) {
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(output, child, prefix, i == child_count - 1);
    }
}

/// Render a snapshot as a treeviz diagram.
pub fn to_treeviz_str(snapshot: &TreeSnapshot) -> String {
    let mut output = format!("{}\n", snapshot.label);
    format_children(&mut output, snapshot, "");
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, snapshot: &TreeSnapshot) -> Result<String, FormatError> {
        Ok(to_treeviz_str(snapshot))
    }

    fn description(&self) -> &str {
        "Box-drawing tree diagram, one line per node"
    }
}
