use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::QuickCheck;
use rstest::rstest;

use crate::{ParserOptions, StreamingParser, Value, boundary_splits, parse};

fn strict_parser() -> StreamingParser {
    StreamingParser::new(ParserOptions {
        strict: true,
        panic_on_error: true,
        ..Default::default()
    })
}

/// Renders `value` with whitespace around every structural character.
fn render_spaced(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, child)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(" ,\r\n");
                }
                out.push_str("\t\"");
                out.push_str(key);
                out.push_str("\" : ");
                render_spaced(child, out);
            }
            out.push_str(" \n}");
        }
    }
}

fn render(value: &Value, spaced: bool) -> String {
    if spaced {
        let mut out = String::new();
        render_spaced(value, &mut out);
        out
    } else {
        value.to_string()
    }
}

/// Whether `partial` could be a snapshot taken while streaming `full`: every
/// member present in `partial` is present in `full` with the same kind, and
/// every string is a prefix of its final contents.
fn is_partial_of(partial: &Value, full: &Value) -> bool {
    match (partial, full) {
        (Value::String(p), Value::String(f)) => f.starts_with(p.as_str()),
        (Value::Object(p), Value::Object(f)) => p
            .iter()
            .all(|(key, value)| f.get(key).is_some_and(|full| is_partial_of(value, full))),
        _ => false,
    }
}

fn iterations() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: feeding a document in arbitrary chunk sizes must yield exactly
/// the value it was rendered from.
#[test]
fn partition_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, splits: Vec<usize>, spaced: bool) -> bool {
        let src = render(&value, spaced);
        let chars: Vec<char> = src.chars().collect();
        let mut parser = strict_parser();

        let mut idx = 0;
        for s in splits {
            if idx == chars.len() {
                break;
            }
            let size = 1 + s % (chars.len() - idx);
            let chunk: String = chars[idx..idx + size].iter().collect();
            parser.consume(&chunk).unwrap();
            idx += size;
        }
        let rest: String = chars[idx..].iter().collect();
        parser.consume(&rest).unwrap();

        parser.snapshot() == value
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Value, Vec<usize>, bool) -> bool);
}

/// Property: every intermediate snapshot is a partial view of the final
/// value, and snapshots only ever grow.
#[test]
fn prefixes_are_partial_views_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let src = value.to_string();
        let mut parser = strict_parser();
        let mut previous = parser.snapshot();
        for c in src.chars() {
            parser.consume(c.encode_utf8(&mut [0; 4])).unwrap();
            let current = parser.snapshot();
            if !is_partial_of(&current, &value) || !is_partial_of(&previous, &current) {
                return false;
            }
            previous = current;
        }
        previous == value
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Value) -> bool);
}

#[rstest]
#[case::empty("{}")]
#[case::pair(r#"{"foo": "bar"}"#)]
#[case::nested(r#"{"a":{"b":"c"}}"#)]
#[case::siblings(r#"{"obj1": {   "nested1": "value1"}, "obj2": {"nested2": "value2"}, "obj3": {}}"#)]
#[case::deep(r#"{"l1": {"l2": {"l3": {"l4": "deep value"}}}, "tail": "t"}"#)]
#[case::content_punctuation(r#"{"k:{,}": "v\"}"#)]
#[case::multibyte(r#"{"schlüssel": "wert 😊", "中": {"文": "字"}}"#)]
#[case::whitespace("\n{ \"a b\" :\t\" c\td \" ,\r\n \"e\" : { } }\n")]
fn every_boundary_split_matches_one_shot(#[case] text: &str) {
    let expected = parse(text, ParserOptions::default()).unwrap();
    for (head, tail) in boundary_splits(text) {
        let mut parser = strict_parser();
        parser.consume(head).unwrap();
        assert!(is_partial_of(&parser.snapshot(), &expected), "prefix {head:?}");
        parser.consume(tail).unwrap();
        assert_eq!(parser.snapshot(), expected, "split at {head:?} | {tail:?}");
    }
}
