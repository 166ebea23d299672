//! Bundled grammars
//!
//!     Grammars are not part of the engine; these two exist to exercise it from the command
//!     line and in the tests, and as worked examples of writing non-terminals:
//!
//!         - arithmetic: expressions over string tokens, with ε productions through `skip`.
//!         - domain: RFC 1035 domain names over a typed token enum, with `backtrack`.
//!
//!     Each grammar comes with a small logos lexer turning source text into its tokens.

pub mod arithmetic;
pub mod domain;

use crate::rd::error::ParseError;
use crate::rd::snapshot::{ToSnapshot, TreeSnapshot};
use crate::rd::token::Token;
use crate::rd::ParseOutput;
use std::fmt;

/// Error produced by the bundled lexers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Source text no token rule accepts
    InvalidToken { text: String, offset: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidToken { text, offset } => {
                write!(f, "invalid token '{text}' at offset {offset}")
            }
        }
    }
}

impl std::error::Error for LexError {}

/// A grammar selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Arithmetic,
    Domain,
}

impl Grammar {
    pub fn all() -> &'static [Grammar] {
        &[Grammar::Arithmetic, Grammar::Domain]
    }

    pub fn from_name(name: &str) -> Option<Grammar> {
        Self::all().iter().copied().find(|g| g.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grammar::Arithmetic => "arithmetic",
            Grammar::Domain => "domain",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Grammar::Arithmetic => "Arithmetic expressions with + - * / and parentheses",
            Grammar::Domain => "Domain names in the RFC 1035 preferred syntax",
        }
    }

    /// The grammar rules in EBNF-like notation.
    pub fn notation(&self) -> &'static str {
        match self {
            Grammar::Arithmetic => arithmetic::GRAMMAR,
            Grammar::Domain => domain::GRAMMAR,
        }
    }

    /// Lex and parse `source`.
    pub fn run(&self, source: &str) -> Result<GrammarOutput, LexError> {
        match self {
            Grammar::Arithmetic => Ok(GrammarOutput::from_parse(
                arithmetic::lex(source)?,
                arithmetic::parse,
            )),
            Grammar::Domain => Ok(GrammarOutput::from_parse(
                domain::lex(source)?,
                domain::parse,
            )),
        }
    }
}

/// Result of running a grammar, with both trees flattened to snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarOutput {
    pub tokens: Vec<String>,
    pub tree: Option<TreeSnapshot>,
    pub trace: Option<TreeSnapshot>,
    pub error: Option<ParseError>,
}

impl GrammarOutput {
    fn from_parse<T: Token>(tokens: Vec<T>, parse: fn(Vec<T>) -> ParseOutput<T>) -> Self {
        let printed = tokens.iter().map(ToString::to_string).collect();
        let output = parse(tokens);
        GrammarOutput {
            tokens: printed,
            tree: output.tree.as_ref().map(ToSnapshot::to_snapshot),
            trace: output.trace.as_ref().map(ToSnapshot::to_snapshot),
            error: output.error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.tree.is_some()
    }
}
