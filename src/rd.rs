//! Main module for rd library functionality

pub mod builder;
pub mod cursor;
pub mod error;
pub mod formats;
pub mod grammars;
pub mod snapshot;
pub mod stack;
pub mod testing;
pub mod token;
pub mod trace;
pub mod tree;

pub use builder::{parse, Builder, NonTerminal, ParseOutput};
pub use error::{ParseError, ProtocolError};
pub use token::Token;
pub use trace::TraceTree;
pub use tree::{Label, Tree};
