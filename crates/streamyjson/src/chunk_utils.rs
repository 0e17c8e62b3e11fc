use alloc::vec::Vec;

/// Split `payload` into `parts` chunks of roughly equal byte length, never
/// cutting through a UTF-8 code point.
///
/// Fewer than `parts` chunks are returned when the payload is too short.
///
/// # Panics
///
/// Panics if `parts` is zero.
///
/// ```
/// let chunks = streamyjson::split_chunks(r#"{"a":"b"}"#, 3);
/// assert_eq!(chunks, [r#"{"a"#, r#"":""#, r#"b"}"#]);
/// ```
#[must_use]
pub fn split_chunks(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0, "cannot split into zero chunks");
    let chunk_size = payload.len().div_ceil(parts).max(1);
    let mut chunks = Vec::with_capacity(parts);
    let mut rest = payload;
    while !rest.is_empty() {
        let mut end = chunk_size.min(rest.len());
        while !rest.is_char_boundary(end) {
            end += 1;
        }
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

/// Every way to cut `payload` in two at a character boundary, including the
/// cuts that leave one side empty.
///
/// ```
/// let splits: Vec<_> = streamyjson::boundary_splits("{é}").collect();
/// assert_eq!(splits, [("", "{é}"), ("{", "é}"), ("{é", "}"), ("{é}", "")]);
/// ```
pub fn boundary_splits(payload: &str) -> impl Iterator<Item = (&str, &str)> {
    payload
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(core::iter::once(payload.len()))
        .map(move |idx| payload.split_at(idx))
}
