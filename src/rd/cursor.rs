//! Token cursor
//!
//!     The cursor is a position in an immutable token sequence. The position counts consumed
//!     tokens: it starts at 0, before the first token, and equals the sequence length once
//!     everything has been consumed. It only moves forward one token at a time through
//!     [`Cursor::next`], and moves back either by a single step ([`Cursor::retreat`], undoing a
//!     failed match) or to a saved position ([`Cursor::reset`], backtracking).

use crate::rd::token::Token;

/// A position inside a token sequence owned by the cursor.
#[derive(Debug, Clone)]
pub struct Cursor<T: Token> {
    tokens: Vec<T>,
    position: usize,
}

impl<T: Token> Cursor<T> {
    pub fn new(tokens: Vec<T>) -> Self {
        Cursor {
            tokens,
            position: 0,
        }
    }

    /// Consume and return the next token, or `None` if no tokens are left.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Undo the last [`Cursor::next`].
    ///
    /// Panics if nothing has been consumed.
    pub fn retreat(&mut self) {
        assert!(self.position > 0, "cannot retreat before the first token");
        self.position -= 1;
    }

    /// Look at a token without consuming it. Offset 1 is the token `next` would return.
    pub fn peek(&self, offset: usize) -> Option<&T> {
        if offset == 0 {
            return None;
        }
        self.tokens.get(self.position + offset - 1)
    }

    /// Move back to a previously saved position.
    pub fn reset(&mut self, position: usize) {
        debug_assert!(position <= self.tokens.len());
        self.position = position;
    }

    /// Number of consumed tokens.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }
}
