//! Owned value types produced when a parse tree is exported.
//!
//! This module defines the [`Value`] enum, the standard-library rendition of
//! the two value kinds the parser understands, and the JSON rendering used by
//! its [`Display`](core::fmt::Display) impl.
use alloc::{collections::BTreeMap, string::String};

/// An object's members, ordered by key.
pub type Map = BTreeMap<String, Value>;

/// A value in the supported JSON subset: a string or an object of values.
///
/// # Examples
///
/// ```
/// use streamyjson::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
// The untagged representation keeps serialized values shaped like the JSON
// they were parsed from.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A string leaf.
    String(String),
    /// An object node.
    Object(Map),
}

impl Default for Value {
    /// The empty object, which is what a parser reports before any input.
    fn default() -> Self {
        Self::Object(Map::new())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    ///
    /// # Examples
    ///
    /// ```
    /// use streamyjson::Value;
    ///
    /// assert!(Value::default().is_object());
    /// assert!(!Value::from("foo").is_object());
    /// ```
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the string contents if the value is a string leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Object(_) => None,
        }
    }

    /// Returns the members if the value is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            Self::String(_) => None,
        }
    }

    /// Looks up `key` if the value is an object.
    ///
    /// Strings have no members, so this returns `None` for them as it does
    /// for absent keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamyjson::{ParserOptions, parse};
    ///
    /// let value = parse(r#"{"a": {"b": "c"}}"#, ParserOptions::default()).unwrap();
    /// let inner = value.get("a").and_then(|a| a.get("b"));
    /// assert_eq!(inner.and_then(|b| b.as_str()), Some("c"));
    /// assert_eq!(value.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

/// Writes `src` as the body of a JSON string literal, escaping quotes,
/// backslashes and control characters.
pub(crate) fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() && (c as u32) <= 0xFFFF => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use rstest::rstest;

    use super::*;

    fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
        Value::Object(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[rstest]
    #[case::empty(Value::default(), "{}")]
    #[case::string(Value::from("bar"), "\"bar\"")]
    #[case::pair(object([("foo", "bar".into())]), r#"{"foo":"bar"}"#)]
    #[case::sorted_keys(object([("b", "2".into()), ("a", "1".into())]), r#"{"a":"1","b":"2"}"#)]
    #[case::nested(object([("a", object([("b", "c".into())]))]), r#"{"a":{"b":"c"}}"#)]
    #[case::escapes(Value::from("q\"b\\n\nt\t"), r#""q\"b\\n\nt\t""#)]
    #[case::control(Value::from("\u{1}"), r#""\u0001""#)]
    fn display_renders_json(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn accessors_follow_variant() {
        let value = object([("s", "x".into()), ("o", Value::default())]);
        assert!(value.is_object());
        assert_eq!(value.get("s").and_then(Value::as_str), Some("x"));
        assert!(value.get("o").is_some_and(Value::is_object));
        assert_eq!(value.get("s").and_then(|s| s.get("anything")), None);
        assert_eq!(Value::from("x").as_object(), None);
    }

    #[test]
    fn serializes_untagged() {
        let value = object([("a", object([("b", "c".into())])), ("d", "e".into())]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"a":{"b":"c"},"d":"e"}"#);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
