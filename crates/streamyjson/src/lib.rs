//! An incremental parser for a subset of JSON: objects whose values are
//! strings or nested objects.
//!
//! Input arrives in chunks of any size, for example token by token from a
//! language model. After every chunk the parser exposes the best-effort tree
//! of everything consumed so far, with partially read strings and objects
//! already in place.
//!
//! ```
//! use streamyjson::{ParserOptions, StreamingParser};
//!
//! let mut parser = StreamingParser::new(ParserOptions::default());
//! for chunk in [r#"{"city": "Zür"#, r#"ich", "geo": {"lat"#, r#"": "47.37"}}"#] {
//!     parser.consume(chunk).unwrap();
//!     println!("{}", parser.snapshot());
//! }
//! assert_eq!(
//!     parser.snapshot().to_string(),
//!     r#"{"city":"Zürich","geo":{"lat":"47.37"}}"#
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chunk_utils;
mod factory;
mod parser;
mod tree;
mod value;

#[cfg(test)]
mod tests;

pub use chunk_utils::{boundary_splits, split_chunks};
pub use factory::{StdFactory, ValueFactory};
pub use parser::{
    Expected, ParseState, ParserError, ParserOptions, StreamingParser, SyntaxError, parse,
};
pub use tree::{NodeId, NodeRef, ObjectId, ObjectRef, StringId, Tree};
pub use value::{Map, Value};
