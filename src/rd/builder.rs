//! Builder
//!
//!     The builder is the engine every non-terminal function talks to. It owns the token
//!     cursor, the stack of open non-terminal frames, the parallel stack of open trace nodes,
//!     and, once the root non-terminal has exited, the final parse tree, trace tree and error.
//!
//! The Protocol
//!
//!     A non-terminal function enters itself first, then consumes tokens and calls other
//!     non-terminals, then exits exactly once with its result:
//!
//!         fn term(b: &mut Builder<String>) -> bool {
//!             let mut b = b.enter("Term");
//!             let ok = factor(&mut b) && term_prime(&mut b);
//!             b.exit(ok)
//!         }
//!
//!     `enter` returns a [`NonTerminal`] guard that derefs to the builder. Its `exit` records
//!     the result and closes the frame; if the guard is dropped on some other path without a
//!     result, closing it is a protocol error.
//!
//!     Terminals are consumed with:
//!         - `match_token`: compare the next token with an expected one. On a match the token
//!           becomes a leaf of the current node; on a mismatch the cursor does not move.
//!           Either way the attempt is recorded in the trace tree.
//!         - `next` + `add`: take the next token, inspect it, and add it as a leaf when it
//!           is acceptable (e.g. any number or identifier).
//!         - `peek`, `check`, `check_or_end`: look ahead without consuming or tracing.
//!
//!     Alternatives are handled with:
//!         - `backtrack`: reset the cursor to where the current non-terminal started and drop
//!           what it has built so far, keeping it open for the next alternative.
//!         - `skip`: declare the current non-terminal an ε match. On exit the cursor goes back
//!           to where it started and nothing is added to the parent.
//!
//! Exit
//!
//!     Closing a frame does, in this order of precedence:
//!         1. skipped: reset the cursor to the frame start, contribute nothing.
//!         2. root and true: the node becomes the parse tree, unless tokens are left.
//!         3. true: the node is appended to the parent node.
//!         4. root and false: the parse fails with "parsing error".
//!         5. false: reset the cursor to the frame start and drop the node.
//!     Independently of the above, the frame's trace node is closed with its result and
//!     appended to the parent trace node, or becomes the trace tree for the root.

use crate::rd::cursor::Cursor;
use crate::rd::error::{ParseError, ProtocolError};
use crate::rd::stack::{Frame, FrameStack, TraceStack};
use crate::rd::token::Token;
use crate::rd::trace::TraceTree;
use crate::rd::tree::Tree;
use log::{debug, trace};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Engine state for one parse of one token sequence.
#[derive(Debug)]
pub struct Builder<T: Token> {
    cursor: Cursor<T>,
    frames: FrameStack<T>,
    traces: TraceStack,
    parse_tree: Option<Tree<T>>,
    trace_tree: Option<TraceTree>,
    error: Option<ParseError>,
}

impl<T: Token> Builder<T> {
    pub fn new(tokens: Vec<T>) -> Self {
        Builder {
            cursor: Cursor::new(tokens),
            frames: FrameStack::new(),
            traces: TraceStack::new(),
            parse_tree: None,
            trace_tree: None,
            error: None,
        }
    }

    /// Enter a non-terminal. The returned guard closes it when exited or dropped.
    pub fn enter(&mut self, name: impl Into<String>) -> NonTerminal<'_, T> {
        self.open(name);
        NonTerminal {
            builder: self,
            result: None,
        }
    }

    /// Run `body` as the non-terminal `name` and return its result.
    pub fn rule<F>(&mut self, name: impl Into<String>, body: F) -> bool
    where
        F: FnOnce(&mut Builder<T>) -> bool,
    {
        let mut nt = self.enter(name);
        let ok = body(&mut *nt);
        nt.exit(ok)
    }

    /// Push a frame and a trace node for `name`.
    ///
    /// This is the unguarded half of [`Builder::enter`]; the caller must pair it with exactly
    /// one [`Builder::close`].
    pub fn open(&mut self, name: impl Into<String>) {
        let name = name.into();
        trace!("enter {} at {}", name, self.cursor.position());
        self.traces.push(TraceTree::new(name.clone()));
        self.frames.push(Frame::new(name, self.cursor.position()));
    }

    /// Pop the current frame and commit, discard or finalize it according to `result`.
    ///
    /// Panics with a [`ProtocolError`] if no frame is open or `result` is `None`.
    pub fn close(&mut self, result: Option<bool>) {
        let name = match self.frames.peek() {
            Some(frame) => frame.node.name().unwrap_or_default().to_string(),
            None => ProtocolError::NotEntered { operation: "Exit" }.raise(),
        };
        let Some(result) = result else {
            ProtocolError::MissingResult { non_terminal: name }.raise()
        };
        let Some(mut frame) = self.frames.pop() else {
            ProtocolError::NotEntered { operation: "Exit" }.raise()
        };
        trace!("exit {} with {}", name, result);

        let is_root = self.frames.is_empty();
        if frame.skip {
            self.cursor.reset(frame.saved);
            if is_root {
                frame.node.children.clear();
                self.finish_root(frame, result);
            }
        } else if is_root {
            self.finish_root(frame, result);
        } else if result {
            if let Some(parent) = self.frames.peek_mut() {
                parent.node.add(frame.node);
            }
        } else {
            self.cursor.reset(frame.saved);
        }

        if let Some(mut closed) = self.traces.pop() {
            closed.close(result);
            match self.traces.peek_mut() {
                Some(parent) => parent.add(closed),
                None => self.trace_tree = Some(closed),
            }
        }
    }

    fn finish_root(&mut self, frame: Frame<T>, result: bool) {
        if !result {
            self.cursor.reset(frame.saved);
            self.error = Some(ParseError::ParsingFailed);
        } else if !self.cursor.is_exhausted() {
            self.error = Some(ParseError::TokensLeft);
        } else {
            self.parse_tree = Some(frame.node);
        }
        if let Some(err) = self.error {
            debug!("parse failed at position {}: {}", self.cursor.position(), err);
        }
    }

    /// Consume the next token. `None` if no tokens are left.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<T> {
        self.must_enter("Next");
        self.cursor.next().cloned()
    }

    /// Match the next token against `expected`.
    ///
    /// On a match the token is added to the current non-terminal. On a mismatch the cursor
    /// is left where it was. The attempt is recorded in the trace tree either way.
    pub fn match_token<Q>(&mut self, expected: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: fmt::Display + ?Sized,
    {
        self.must_enter("Match");
        let (entry, ok) = match self.cursor.next().cloned() {
            None => (TraceTree::exhausted(expected), false),
            Some(got) if !<T as PartialEq<Q>>::eq(&got, expected) => {
                self.cursor.retreat();
                (TraceTree::mismatched(&got, expected), false)
            }
            Some(got) => {
                let entry = TraceTree::matched(&got, expected);
                self.add(got);
                (entry, true)
            }
        };
        if let Some(current) = self.traces.peek_mut() {
            current.add(entry);
        }
        ok
    }

    /// Add `token` as a leaf of the current non-terminal.
    pub fn add(&mut self, token: T) {
        self.top_mut("Add").node.add(Tree::terminal(token));
    }

    /// Reset the cursor to the start of the current non-terminal and discard its children.
    pub fn backtrack(&mut self) {
        let frame = self.top_mut("Backtrack");
        frame.node.children.clear();
        let saved = frame.saved;
        debug!("backtrack {} to {}", frame.node.label, saved);
        self.cursor.reset(saved);
    }

    /// Mark the current non-terminal as an ε match, see the module docs.
    pub fn skip(&mut self) {
        self.top_mut("Skip").skip = true;
    }

    /// The token `offset` positions ahead, 1 being the next one. Nothing is consumed.
    pub fn peek(&self, offset: usize) -> Option<&T> {
        self.must_enter("Peek");
        self.cursor.peek(offset)
    }

    /// Whether the token `offset` positions ahead equals `expected`.
    pub fn check<Q>(&self, expected: &Q, offset: usize) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.peek(offset)
            .is_some_and(|token| <T as PartialEq<Q>>::eq(token, expected))
    }

    /// Like [`Builder::check`], but also true when the input ends before `offset`.
    pub fn check_or_end<Q>(&self, expected: &Q, offset: usize) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        match self.peek(offset) {
            None => true,
            Some(token) => <T as PartialEq<Q>>::eq(token, expected),
        }
    }

    /// The parse tree, set once the root non-terminal exited successfully.
    pub fn parse_tree(&self) -> Option<&Tree<T>> {
        self.parse_tree.as_ref()
    }

    /// The trace tree, set once the root non-terminal exited, whatever its result.
    pub fn trace_tree(&self) -> Option<&TraceTree> {
        self.trace_tree.as_ref()
    }

    /// The parse error, set once the root non-terminal exited unsuccessfully.
    pub fn err(&self) -> Option<ParseError> {
        self.error
    }

    /// Number of consumed tokens.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Number of open non-terminals.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The node of the innermost open non-terminal.
    pub fn current_node(&self) -> Option<&Tree<T>> {
        self.frames.peek().map(|frame| &frame.node)
    }

    pub fn tokens(&self) -> &[T] {
        self.cursor.tokens()
    }

    /// Whether the root non-terminal has exited.
    pub fn is_finished(&self) -> bool {
        self.trace_tree.is_some()
    }

    pub fn into_output(self) -> ParseOutput<T> {
        ParseOutput {
            tree: self.parse_tree,
            trace: self.trace_tree,
            error: self.error,
        }
    }

    fn must_enter(&self, operation: &'static str) {
        if self.frames.is_empty() {
            ProtocolError::NotEntered { operation }.raise();
        }
    }

    fn top_mut(&mut self, operation: &'static str) -> &mut Frame<T> {
        match self.frames.peek_mut() {
            Some(frame) => frame,
            None => ProtocolError::NotEntered { operation }.raise(),
        }
    }
}

/// Guard for an open non-terminal, returned by [`Builder::enter`].
///
/// Derefs to the builder so the non-terminal body can keep consuming tokens and calling
/// other non-terminals through it.
pub struct NonTerminal<'b, T: Token> {
    builder: &'b mut Builder<T>,
    result: Option<bool>,
}

impl<T: Token> NonTerminal<'_, T> {
    /// Close the non-terminal with `result` and return it.
    pub fn exit(mut self, result: bool) -> bool {
        self.result = Some(result);
        result
    }
}

impl<T: Token> Deref for NonTerminal<'_, T> {
    type Target = Builder<T>;

    fn deref(&self) -> &Builder<T> {
        self.builder
    }
}

impl<T: Token> DerefMut for NonTerminal<'_, T> {
    fn deref_mut(&mut self) -> &mut Builder<T> {
        self.builder
    }
}

impl<T: Token> Drop for NonTerminal<'_, T> {
    fn drop(&mut self) {
        if self.result.is_none() && std::thread::panicking() {
            return;
        }
        self.builder.close(self.result);
    }
}

/// Everything a finished parse produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput<T> {
    pub tree: Option<Tree<T>>,
    pub trace: Option<TraceTree>,
    pub error: Option<ParseError>,
}

impl<T: Token> ParseOutput<T> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.tree.is_some()
    }

    pub fn into_result(self) -> Result<Tree<T>, ParseError> {
        match (self.tree, self.error) {
            (_, Some(err)) => Err(err),
            (Some(tree), None) => Ok(tree),
            (None, None) => Err(ParseError::ParsingFailed),
        }
    }
}

/// Parse `tokens` starting from the `root` non-terminal.
pub fn parse<T, F>(tokens: Vec<T>, root: F) -> ParseOutput<T>
where
    T: Token,
    F: FnOnce(&mut Builder<T>) -> bool,
{
    let mut builder = Builder::new(tokens);
    let ok = root(&mut builder);
    let mut output = builder.into_output();
    if !ok && output.error.is_none() {
        output.error = Some(ParseError::ParsingFailed);
    }
    output
}
