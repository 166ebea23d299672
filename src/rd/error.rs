//! Errors
//!
//!     Two kinds of failure are kept apart:
//!
//!         - [`ParseError`]: the input does not derive from the grammar. This is an ordinary
//!           outcome, reported once the root non-terminal exits. The trace tree explains it.
//!         - [`ProtocolError`]: the grammar code broke the Enter/Exit contract. This is a bug
//!           in the grammar, not in the input, and the builder panics with it immediately
//!           rather than continue on corrupted state.

use std::fmt;

/// Why a parse did not produce a parse tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The root non-terminal returned false.
    ParsingFailed,
    /// The root non-terminal succeeded without consuming every token.
    TokensLeft,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ParsingFailed => write!(f, "parsing error"),
            ParseError::TokensLeft => write!(f, "tokens left after parsing"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Misuse of the builder protocol by grammar code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// An operation that needs an open non-terminal was called with none open.
    NotEntered { operation: &'static str },
    /// A non-terminal was closed without a result.
    MissingResult { non_terminal: String },
}

impl ProtocolError {
    /// Abort with this error as the panic message.
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self)
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::NotEntered { operation } => {
                write!(f, "cannot {operation}. must Enter a non-terminal first")
            }
            ProtocolError::MissingResult { non_terminal } => {
                write!(f, "Exit result cannot be empty (non-terminal {non_terminal})")
            }
        }
    }
}

impl std::error::Error for ProtocolError {}
