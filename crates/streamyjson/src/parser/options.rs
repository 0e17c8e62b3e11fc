/// Configuration options for the streaming parser.
///
/// # Examples
///
/// ```rust
/// use streamyjson::{ParserOptions, StreamingParser};
///
/// let options = ParserOptions {
///     strict: true,
///     ..Default::default()
/// };
/// let mut parser = StreamingParser::new(options);
/// assert!(parser.consume("[").is_err());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to reject structurally unexpected characters.
    ///
    /// When `false`, a character that has no transition in the current state
    /// is ignored and parsing continues, which suits speculative or noisy
    /// streams. When `true`, [`consume`](crate::StreamingParser::consume)
    /// fails on the first such character.
    ///
    /// # Default
    ///
    /// `false`
    pub strict: bool,

    /// Whether to skip any Unicode whitespace between tokens.
    ///
    /// By default only space (U+0020), line feed (U+000A), carriage return
    /// (U+000D) and horizontal tab (U+0009) are skipped. Whitespace inside
    /// keys and string values is always kept.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on strict-mode violations instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    pub panic_on_error: bool,
}
