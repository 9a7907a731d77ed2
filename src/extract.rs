use memchr::memchr;

/// Result of scanning for the next balanced `{...}` span.
#[derive(Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A complete span at `start..end` (byte range, end exclusive).
    Complete { start: usize, end: usize },
    /// A `{` opened at `start` but its matching `}` has not arrived yet.
    Incomplete { start: usize },
    /// No `{` at or after the scan position.
    NotFound,
}

/// Locates the next balanced object span in `buffer`, starting at byte
/// offset `from`.
///
/// Brace depth only changes outside quoted strings, and a `\` inside a
/// string makes exactly the next character inert, so braces and quotes
/// embedded in string values (code snippets, JSON-in-JSON) never confuse
/// the walk. The scan is byte-wise: `{`, `}`, `"` and `\` are ASCII, and
/// every byte of a multi-byte UTF-8 character is >= 0x80, so the returned
/// offsets always land on character boundaries.
pub fn next_object_span(buffer: &str, from: usize) -> ScanOutcome {
    let bytes = buffer.as_bytes();
    let start = match memchr(b'{', &bytes[from..]) {
        Some(rel) => from + rel,
        None => return ScanOutcome::NotFound,
    };

    let mut depth = 0i32;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in bytes.iter().enumerate().skip(start) {
        match (in_string, escaped, c) {
            (true, true, _) => escaped = false,
            (true, false, b'\\') => escaped = true,
            (true, false, b'"') => in_string = false,
            (true, false, _) => {}
            (false, _, b'"') => in_string = true,
            (false, _, b'{') => depth += 1,
            (false, _, b'}') => {
                depth -= 1;
                if depth == 0 {
                    return ScanOutcome::Complete { start, end: i + 1 };
                }
            }
            _ => {}
        }
    }

    ScanOutcome::Incomplete { start }
}
