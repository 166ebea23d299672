//! # rd
//!
//! A builder for hand-written recursive descent parsers.
//!
//! Each grammar non-terminal is a plain function that takes the [`Builder`](rd::builder::Builder),
//! enters itself, consumes tokens or calls other non-terminals, and exits with its result.
//! The builder keeps the token cursor, backtracks failed alternatives and builds two trees
//! while doing so:
//!
//!     - the parse tree: the successful derivation, one node per committed non-terminal
//!       and one leaf per consumed token.
//!     - the trace tree: every match attempt and every non-terminal outcome, successful or
//!       not. This is the tool for understanding why a grammar did what it did.
//!
//! File Layout
//!
//! src/rd
//!   ├── cursor, stack      Plumbing: token position and open frames
//!   ├── tree, trace        The two tree kinds
//!   ├── builder            The Enter/Exit/Match protocol
//!   ├── snapshot, formats  Rendering of either tree (treeviz, json, yaml)
//!   └── grammars           Bundled grammars used by the cli and the tests
//!
//! For assertion helpers used in tests, see the [testing module](rd::testing).

pub mod rd;
