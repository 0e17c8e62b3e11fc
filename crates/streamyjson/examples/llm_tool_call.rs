//! Reacts to content-moderation feedback while a tool-call response from a
//! language model is still streaming in.
//!
//! The assistant was prompted with a tool description whose result is an
//! object describing a generated code snippet. A `moderation` member comes
//! first so that policy violations can be flagged before the expensive part
//! of the payload arrives:
//!
//! ```text
//! {
//!   "moderation": { "decision": "allow" | "block", "reason": string },
//!   "filename":   string,
//!   "language":   string,
//!   "code":       string
//! }
//! ```
//!
//! The document is fed to the parser in small, irregular chunks, the way
//! chat-completion APIs deliver partial tokens. After every chunk the example
//! inspects the partial tree:
//!
//! 1. If `moderation.decision` reads `"block"` processing stops right away.
//! 2. Whatever part of `code` is new since the last chunk is printed, so a
//!    user interface could render the snippet as it is written.
//!
//! Run with
//!
//! ```bash
//! cargo run -p streamyjson --example llm_tool_call
//! ```

#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

use std::io::Write;

use streamyjson::{ParserOptions, StreamingParser};

fn main() {
    // In real life this would come from the network.
    let simulated_stream: [&str; 9] = [
        r#"{"moderation":{"decision":"al"#,
        r#"lo"#,
        r#"w","reason":"none"},"#,
        r#""filename":"example.rs","#,
        r#""language":"rust","#,
        r#""code":"use streamyjson::{StreamingParser, "#,
        r#"ParserOptions};\nfn main() {\n"#,
        r#"    let _parser = StreamingParser::new(ParserOptions::default());\n}\n"#,
        r#""}"#,
    ];

    let mut parser = StreamingParser::new(ParserOptions::default());
    let mut printed = 0;

    for chunk in simulated_stream {
        if let Err(err) = parser.consume(chunk) {
            eprintln!("malformed response: {err}");
            return;
        }

        let root = parser.root();
        let decision = root
            .get("moderation")
            .and_then(|m| m.as_object()?.get("decision"))
            .and_then(|d| d.as_str());
        if decision == Some("block") {
            eprintln!("response blocked by moderation, aborting stream");
            return;
        }

        if let Some(code) = root.get("code").and_then(|c| c.as_str()) {
            // Escapes are not decoded, so a newline arrives as a literal `\n`.
            print!("{}", unprinted(code, printed).replace("\\n", "\n"));
            std::io::stdout().flush().ok();
            printed = code.len();
        }
    }

    println!();
    println!("final document: {}", parser.snapshot());
}

/// The part of `code` past the first `printed` bytes.
///
/// A later duplicate `"code"` key replaces the leaf with a new, possibly
/// shorter string; that string is printed from its start.
fn unprinted(code: &str, printed: usize) -> &str {
    code.get(printed..).unwrap_or(code)
}
