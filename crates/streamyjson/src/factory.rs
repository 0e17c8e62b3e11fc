use alloc::{borrow::ToOwned, string::String};

use crate::value::{Map, Value};

/// Abstraction over constructing values in a caller's data model.
///
/// [`Tree::export`](crate::Tree::export) walks the parse tree and builds the
/// result through a factory, so a binding layer can produce its host
/// language's strings and dictionaries directly instead of going through
/// [`Value`].
#[allow(clippy::wrong_self_convention)]
pub trait ValueFactory {
    /// The string scalar type.
    type Str;
    /// The string-keyed associative container type.
    type Object;
    /// The type that can hold either of the above.
    type Any;

    /// Builds a string scalar from the contents of a leaf.
    fn new_string(&self, s: &str) -> Self::Str;
    /// Builds an empty container.
    fn new_object(&self) -> Self::Object;

    /// Adds a member to a container under construction.
    fn insert_object(&self, obj: &mut Self::Object, key: &str, val: Self::Any);

    /// Wraps a string scalar.
    fn into_any_str(&self, s: Self::Str) -> Self::Any;
    /// Wraps a finished container.
    fn into_any_object(&self, o: Self::Object) -> Self::Any;
}

/// Factory producing [`Value`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFactory;

impl ValueFactory for StdFactory {
    type Str = String;
    type Object = Map;
    type Any = Value;

    #[inline]
    fn new_string(&self, s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn new_object(&self) -> Self::Object {
        Map::new()
    }

    #[inline]
    fn insert_object(&self, obj: &mut Self::Object, key: &str, val: Self::Any) {
        obj.insert(key.to_owned(), val);
    }

    #[inline]
    fn into_any_str(&self, s: Self::Str) -> Self::Any {
        Value::String(s)
    }

    #[inline]
    fn into_any_object(&self, o: Self::Object) -> Self::Any {
        Value::Object(o)
    }
}
