//! Frame and trace stacks
//!
//!     One frame per open non-terminal call: the cursor position at Enter time and the parse
//!     node being built. The frame owns its node until Exit moves it into the parent frame or
//!     drops it. The trace stack runs in parallel with one open trace node per call; it is
//!     never rolled back by backtracking.

use crate::rd::token::Token;
use crate::rd::trace::TraceTree;
use crate::rd::tree::Tree;

/// Bookkeeping for one open non-terminal call.
#[derive(Debug, Clone)]
pub struct Frame<T: Token> {
    /// Cursor position when the non-terminal was entered.
    pub saved: usize,
    pub node: Tree<T>,
    /// Set by `skip`, consumed by this frame's exit.
    pub skip: bool,
}

impl<T: Token> Frame<T> {
    pub fn new(name: impl Into<String>, saved: usize) -> Self {
        Frame {
            saved,
            node: Tree::non_terminal(name),
            skip: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameStack<T: Token> {
    frames: Vec<Frame<T>>,
}

impl<T: Token> FrameStack<T> {
    pub fn new() -> Self {
        FrameStack { frames: Vec::new() }
    }

    pub fn push(&mut self, frame: Frame<T>) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame<T>> {
        self.frames.pop()
    }

    pub fn peek(&self) -> Option<&Frame<T>> {
        self.frames.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut Frame<T>> {
        self.frames.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl<T: Token> Default for FrameStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TraceStack {
    traces: Vec<TraceTree>,
}

impl TraceStack {
    pub fn new() -> Self {
        TraceStack { traces: Vec::new() }
    }

    pub fn push(&mut self, trace: TraceTree) {
        self.traces.push(trace);
    }

    pub fn pop(&mut self) -> Option<TraceTree> {
        self.traces.pop()
    }

    pub fn peek_mut(&mut self) -> Option<&mut TraceTree> {
        self.traces.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }
}
