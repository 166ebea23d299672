//! Token requirements
//!
//!     The builder never looks inside a token. It compares tokens for equality when matching,
//!     prints them into trace labels and parse tree leaves, and clones them into the parse
//!     tree when they are consumed. Any type with those three capabilities is a token:
//!     plain strings, characters, or a lexer's token enum.

use std::fmt;

/// A value the builder can consume.
///
/// Implemented for every `Clone + PartialEq + Display` type, there is nothing to implement
/// by hand.
pub trait Token: Clone + PartialEq + fmt::Display {}

impl<T> Token for T where T: Clone + PartialEq + fmt::Display {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_token<T: Token>(_: &T) {}

    #[test]
    fn test_common_types_are_tokens() {
        assert_token(&"+".to_string());
        assert_token(&'a');
        assert_token(&42u32);
        assert_token(&"literal");
    }
}
