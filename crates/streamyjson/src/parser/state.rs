use core::fmt;

/// Where the parser is within the document grammar.
///
/// There is no terminal state: after the top-level object closes the parser
/// stays in [`ExpectCommaOrEnd`](ParseState::ExpectCommaOrEnd) and keeps
/// applying whatever transitions trailing input triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseState {
    /// Before the opening `{` of the document.
    Start,
    /// After `{` or `,`: a key or `}` comes next.
    ExpectKeyOrEnd,
    /// Inside a quoted key.
    InKey,
    /// After a key: `:` comes next.
    ExpectColon,
    /// After `:`: a string or an object comes next.
    ExpectValue,
    /// Inside a quoted string value.
    InValue,
    /// After a value: `,` or `}` comes next.
    ExpectCommaOrEnd,
}

impl ParseState {
    /// The characters a strict parser accepts in this state.
    ///
    /// Inside keys and string values every character is content, so those
    /// states return `None`.
    ///
    /// ```
    /// use streamyjson::ParseState;
    ///
    /// let expected = ParseState::ExpectValue.expected().unwrap();
    /// assert_eq!(expected.chars(), ['"', '{']);
    /// assert_eq!(ParseState::InKey.expected(), None);
    /// ```
    #[must_use]
    pub const fn expected(self) -> Option<Expected> {
        match self {
            ParseState::Start => Some(Expected(&['{'])),
            ParseState::ExpectKeyOrEnd => Some(Expected(&['"', '}'])),
            ParseState::ExpectColon => Some(Expected(&[':'])),
            ParseState::ExpectValue => Some(Expected(&['"', '{'])),
            ParseState::ExpectCommaOrEnd => Some(Expected(&[',', '}'])),
            ParseState::InKey | ParseState::InValue => None,
        }
    }

    /// Whether characters in this state are key or value content.
    #[must_use]
    pub const fn is_content(self) -> bool {
        matches!(self, ParseState::InKey | ParseState::InValue)
    }
}

/// A fixed set of acceptable structural characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expected(&'static [char]);

impl Expected {
    /// The accepted characters.
    #[must_use]
    pub const fn chars(self) -> &'static [char] {
        self.0
    }

    /// Whether `c` is accepted.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl fmt::Debug for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0).finish()
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "{c:?}")?;
        }
        Ok(())
    }
}
