#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use streamyjson::{ParserOptions, StreamingParser, parse};

#[derive(Debug, Arbitrary)]
struct Input {
    flags: u8,
    split_seed: u64,
    text: String,
}

fn parser(input: Input) {
    let options = ParserOptions {
        strict: input.flags & 1 != 0,
        allow_unicode_whitespace: input.flags & 2 != 0,
        panic_on_error: false,
    };

    let one_shot = parse(&input.text, options);
    if !options.strict {
        assert!(one_shot.is_ok(), "lenient parse failed: {one_shot:?}");
    }

    let mut parser = StreamingParser::new(options);
    let mut chunked = Ok(());
    for chunk in split_into_safe_chunks(&input.text, input.split_seed) {
        chunked = parser.consume(chunk);
        if chunked.is_err() {
            break;
        }
        // Snapshots never disturb the parse.
        let _ = parser.snapshot();
    }

    match (one_shot, chunked) {
        (Ok(value), Ok(())) => assert_eq!(value, parser.snapshot()),
        (Err(a), Err(b)) => assert_eq!(a, b),
        (a, b) => panic!("chunking changed the outcome: {a:?} vs {b:?}"),
    }
}

fuzz_target!(|input: Input| parser(input));

/// Split a `&str` into boundary-safe chunks whose sizes derive from
/// `split_seed`. Every chunk is at least one byte.
fn split_into_safe_chunks(text: &str, split_seed: u64) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let len = text.len();

    while start < len {
        let remaining = len - start;
        let mut size = (split_seed as usize % remaining) + 1;
        while start + size < len && !text.is_char_boundary(start + size) {
            size += 1;
        }
        chunks.push(&text[start..start + size]);
        start += size;
    }

    chunks
}
