#![allow(dead_code)]
#![allow(clippy::needless_raw_string_hashes)]

pub const ORIGINAL: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": "none"
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": "2",
            "edition": "2024"
        }
    },
    "snippet": "fn main() {}",
    "trailing": {
        "status": "ok"
    }
}"#;

// A structured tool-call response as a model would stream it. Chunks are cut
// on transition seams: inside keys and values, between a value and its comma,
// and across consecutive closing braces.
#[rustfmt::skip]
pub const STREAM: [&str; 12] = [
    r#"{"moderation":{"decision":"al"#,           // inside a string value
    r#"lo"#,                                      // continues the value
    r#"w","reason":"none"},""#,                   // ends having opened the next key
    r#"request":{"filename":"example.rs""#,       // finishes the key, nested value
    r#","language":"rust","#,                     // ends after a comma
    r#""options":{"opt_level":"2""#,              // second level of nesting
    r#","edition":"2024"}"#,                      // closes the inner object
    r#"}"#,                                       // '}}' split across chunks
    r#","snippet":"fn main() {"#,                 // structural characters as content
    r#"}""#,                                      // ... and a closing brace inside a string
    r#","trailing":{"status":"ok"}"#,             // complete nested object
    r#"}"#,                                       // closes the document
];
