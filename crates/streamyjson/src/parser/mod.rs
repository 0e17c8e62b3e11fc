//! The incremental parser.
//!
//! Overview
//! - [`StreamingParser::consume`] walks a chunk one character at a time
//!   through a seven-state machine. All state (current state, nesting stack,
//!   key scratch buffer, partial tree) survives between calls, so a document
//!   may be split at any character boundary and still produce the same tree.
//! - Values are attached to their parent as soon as their opening token is
//!   seen: an object at `{`, a string leaf at its opening `"`. A snapshot
//!   taken mid-value therefore shows the value in its partial state.
//! - Keys are not attached until their value starts, so a half-read key never
//!   appears in the tree.
//!
//! Nesting
//! - The root object is created with the parser and is never on the stack.
//!   The stack holds handles of the nested objects that are still open,
//!   innermost last; an empty stack means writes go to the root.
//! - A `}` with nothing on the stack is a no-op, which is also how the
//!   closing brace of the root itself is handled.
//!
//! Leniency
//! - Whitespace outside keys and string values is skipped before anything
//!   else happens.
//! - In lenient mode a character with no transition in the current state is
//!   dropped. In strict mode it aborts the call with a
//!   [`SyntaxError::StructuralViolation`] before any mutation, leaving the
//!   parser exactly as it was after the previous character.
//!
//! ```
//! use streamyjson::{ParserOptions, StreamingParser};
//!
//! let mut parser = StreamingParser::new(ParserOptions::default());
//! parser.consume(r#"{"a": {"b": "#).unwrap();
//! assert_eq!(parser.snapshot().to_string(), r#"{"a":{}}"#);
//! parser.consume(r#""c"}}"#).unwrap();
//! assert_eq!(parser.snapshot().to_string(), r#"{"a":{"b":"c"}}"#);
//! ```

mod error;
mod options;
mod state;


use alloc::{string::String, vec::Vec};

pub use error::{ParserError, SyntaxError};
pub use options::ParserOptions;
pub use state::{Expected, ParseState};

use crate::{
    factory::{StdFactory, ValueFactory},
    tree::{ObjectId, ObjectRef, StringId, Tree},
    value::Value,
};

/// Internal state, carrying the handle of the leaf being filled while inside
/// a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    ExpectKeyOrEnd,
    InKey,
    ExpectColon,
    ExpectValue,
    InValue(StringId),
    ExpectCommaOrEnd,
}

impl From<State> for ParseState {
    fn from(state: State) -> Self {
        match state {
            State::Start => ParseState::Start,
            State::ExpectKeyOrEnd => ParseState::ExpectKeyOrEnd,
            State::InKey => ParseState::InKey,
            State::ExpectColon => ParseState::ExpectColon,
            State::ExpectValue => ParseState::ExpectValue,
            State::InValue(_) => ParseState::InValue,
            State::ExpectCommaOrEnd => ParseState::ExpectCommaOrEnd,
        }
    }
}

/// An incremental parser for objects whose values are strings or objects.
///
/// The parser owns the tree it builds. Feed it chunks with
/// [`consume`](Self::consume) and inspect the tree at any point with
/// [`snapshot`](Self::snapshot), [`root`](Self::root) or
/// [`export_with`](Self::export_with). It never signals completion; the
/// caller decides when no more input is coming.
///
/// A parser is a plain single-owner value. Callers that feed it from several
/// threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct StreamingParser {
    tree: Tree,
    root: ObjectId,
    stack: Vec<ObjectId>,
    state: State,
    key: String,
    options: ParserOptions,
    line: usize,
    column: usize,
}

impl Default for StreamingParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl StreamingParser {
    /// Creates a parser with an empty root object.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        let mut tree = Tree::default();
        let root = tree.new_object();
        Self {
            tree,
            root,
            stack: Vec::new(),
            state: State::Start,
            key: String::new(),
            options,
            line: 1,
            column: 1,
        }
    }

    /// The options this parser was created with.
    #[must_use]
    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Processes every character of `chunk`, in order.
    ///
    /// # Errors
    ///
    /// Only a strict parser fails. It returns
    /// [`SyntaxError::StructuralViolation`] for the first character that has
    /// no transition in the current state. Characters after it in the same
    /// chunk are not processed; the tree, state and position are left as of
    /// the last accepted character.
    pub fn consume(&mut self, chunk: &str) -> Result<(), ParserError> {
        for c in chunk.chars() {
            if !self.state().is_content() && self.is_whitespace(c) {
                self.advance_position(c);
                continue;
            }

            if self.options.strict {
                if let Some(expected) = self.state().expected() {
                    if !expected.contains(c) {
                        return Err(self.structural_violation(c, expected));
                    }
                }
            }

            self.process_char(c);
            self.advance_position(c);
        }
        Ok(())
    }

    /// Exports the tree as it stands, including partial values.
    ///
    /// The result is always [`Value::Object`].
    #[must_use]
    pub fn snapshot(&self) -> Value {
        self.export_with(&StdFactory)
    }

    /// Exports the tree into a caller-chosen representation.
    pub fn export_with<F: ValueFactory>(&self, factory: &F) -> F::Any {
        self.root().export(factory)
    }

    /// Consumes the parser and exports its tree.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.snapshot()
    }

    /// A borrowed view of the top-level object.
    #[must_use]
    pub fn root(&self) -> ObjectRef<'_> {
        self.tree.view(self.root)
    }

    /// The tree being built. Detached values replaced by a later duplicate
    /// key remain in it, but are unreachable from [`root`](Self::root).
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The current state of the machine.
    #[must_use]
    pub fn state(&self) -> ParseState {
        self.state.into()
    }

    /// Number of nested objects currently open, not counting the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Discards everything parsed so far and starts a new document with the
    /// same options.
    ///
    /// A strict parser does not recover from a violation on its own; this is
    /// how a caller starts over.
    pub fn reset(&mut self) {
        log::debug!(
            "resetting parser at {}:{} in state {:?}",
            self.line,
            self.column,
            self.state()
        );
        *self = Self::new(self.options);
    }

    fn process_char(&mut self, c: char) {
        self.state = match (self.state, c) {
            (State::Start, '{') => State::ExpectKeyOrEnd,

            (State::ExpectKeyOrEnd, '"') => {
                self.key.clear();
                State::InKey
            }
            (State::ExpectKeyOrEnd | State::ExpectCommaOrEnd, '}') => {
                self.close_object();
                State::ExpectCommaOrEnd
            }

            (State::InKey, '"') => State::ExpectColon,
            (State::InKey, c) => {
                self.key.push(c);
                State::InKey
            }

            (State::ExpectColon, ':') => State::ExpectValue,

            (State::ExpectValue, '"') => {
                let key = core::mem::take(&mut self.key);
                let leaf = self.tree.insert_string(self.current_object(), key);
                State::InValue(leaf)
            }
            (State::ExpectValue, '{') => {
                let key = core::mem::take(&mut self.key);
                let object = self.tree.insert_object(self.current_object(), key);
                self.stack.push(object);
                log::trace!("opened object {object:?} at depth {}", self.stack.len());
                State::ExpectKeyOrEnd
            }

            (State::InValue(_), '"') => State::ExpectCommaOrEnd,
            (State::InValue(leaf), c) => {
                self.tree.append(leaf, c);
                State::InValue(leaf)
            }

            (State::ExpectCommaOrEnd, ',') => State::ExpectKeyOrEnd,

            (state, c) => {
                log::trace!(
                    "ignoring {c:?} in state {:?} at {}:{}",
                    ParseState::from(state),
                    self.line,
                    self.column
                );
                state
            }
        };
    }

    /// Where the next member is written.
    fn current_object(&self) -> ObjectId {
        self.stack.last().copied().unwrap_or(self.root)
    }

    fn close_object(&mut self) {
        if let Some(object) = self.stack.pop() {
            log::trace!("closed object {object:?} at depth {}", self.stack.len() + 1);
        }
    }

    fn is_whitespace(&self, c: char) -> bool {
        matches!(c, ' ' | '\n' | '\t' | '\r')
            || (self.options.allow_unicode_whitespace && c.is_whitespace())
    }

    fn advance_position(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn structural_violation(&self, found: char, expected: Expected) -> ParserError {
        let err = ParserError {
            source: SyntaxError::StructuralViolation { found, expected },
            line: self.line,
            column: self.column,
        };
        log::debug!("strict parser rejected input: {err}");
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        err
    }
}

/// Parses a complete text in one call.
///
/// Equivalent to creating a parser with `options`, consuming `text` and
/// taking a [`snapshot`](StreamingParser::snapshot).
///
/// # Errors
///
/// Returns the first strict-mode violation when `options.strict` is set.
///
/// # Examples
///
/// ```
/// use streamyjson::{ParserOptions, parse};
///
/// let value = parse(r#"{"foo": "bar"#, ParserOptions::default()).unwrap();
/// assert_eq!(value.to_string(), r#"{"foo":"bar"}"#);
///
/// let strict = ParserOptions { strict: true, ..Default::default() };
/// let err = parse("x", strict).unwrap_err();
/// assert_eq!(err.to_string(), "unexpected character 'x', expected '{' at 1:1");
/// ```
pub fn parse(text: &str, options: ParserOptions) -> Result<Value, ParserError> {
    let mut parser = StreamingParser::new(options);
    parser.consume(text)?;
    Ok(parser.into_value())
}
