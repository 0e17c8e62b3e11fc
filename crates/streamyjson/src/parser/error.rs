use thiserror::Error;

use super::state::Expected;

/// A strict-mode rejection, with the position of the offending character.
///
/// Lines and columns are 1-based and count characters, not bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ParserError {
    /// What went wrong.
    pub source: SyntaxError,
    /// Line of the offending character.
    pub line: usize,
    /// Column of the offending character.
    pub column: usize,
}

/// The reasons a strict parser stops.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character that cannot start or continue any token in the current
    /// state.
    #[error("unexpected character {found:?}, expected {expected}")]
    StructuralViolation {
        /// The rejected character.
        found: char,
        /// The characters that would have been accepted.
        expected: Expected,
    },
}
