#[cfg(test)]
mod tests {
    use crate::{fingerprint, next_object_span, safe_decode, ScanOutcome, Utf8Chunker};
    use simd_json::json;

    // --- fingerprint ---

    #[test]
    fn test_fingerprint_is_deterministic() {
        let input = "hello world";
        assert_eq!(fingerprint(input), fingerprint(input));
    }

    #[test]
    fn test_fingerprint_empty_string_is_stable() {
        // FNV-1a offset basis; must never change between runs or releases.
        assert_eq!(fingerprint(""), 0xcbf2_9ce4_8422_2325);
    }

    #[test]
    fn test_fingerprint_distinguishes_inputs() {
        assert_ne!(fingerprint("test1"), fingerprint("test2"));
        assert_ne!(fingerprint("ab"), fingerprint("ba"));
        assert_ne!(fingerprint(&"a".repeat(1000)), fingerprint(&"a".repeat(999)));
    }

    // --- safe_decode ---

    #[test]
    fn test_safe_decode_valid_object() {
        let value = safe_decode(r#"{"name": "John", "age": 30}"#);
        assert_eq!(value, Some(json!({"name": "John", "age": 30})));
    }

    #[test]
    fn test_safe_decode_invalid_returns_none() {
        assert_eq!(safe_decode("{not json}"), None);
        assert_eq!(safe_decode(r#"{"trailing": 1,}"#), None);
        assert_eq!(safe_decode(""), None);
    }

    #[test]
    fn test_safe_decode_escapes_and_unicode() {
        let value = safe_decode(r#"{"s":"line\nTab\tQuote\" Back\\ A 🙂"}"#);
        assert_eq!(value, Some(json!({"s": "line\nTab\tQuote\" Back\\ A 🙂"})));
    }

    #[test]
    fn test_safe_decode_deep_nesting() {
        let value = safe_decode(r#"{"a":{"b":{"c":[1,[2,[3]]]}}}"#);
        assert_eq!(value, Some(json!({"a": {"b": {"c": [1, [2, [3]]]}}})));
    }

    // --- next_object_span ---

    #[test]
    fn test_span_not_found_without_brace() {
        assert_eq!(next_object_span("no objects here", 0), ScanOutcome::NotFound);
    }

    #[test]
    fn test_span_complete_offsets() {
        let text = r#"xx{"a":1}yy"#;
        assert_eq!(
            next_object_span(text, 0),
            ScanOutcome::Complete { start: 2, end: 9 }
        );
    }

    #[test]
    fn test_span_incomplete_waits() {
        assert_eq!(
            next_object_span(r#"{"a": {"b": 1}"#, 0),
            ScanOutcome::Incomplete { start: 0 }
        );
    }

    #[test]
    fn test_span_ignores_braces_in_strings() {
        let text = r#"{"code":"}}}{{{"}"#;
        assert_eq!(
            next_object_span(text, 0),
            ScanOutcome::Complete { start: 0, end: text.len() }
        );
    }

    #[test]
    fn test_span_respects_scan_offset() {
        let text = r#"{"a":1}{"b":2}"#;
        assert_eq!(
            next_object_span(text, 7),
            ScanOutcome::Complete { start: 7, end: 14 }
        );
    }

    // --- Utf8Chunker ---

    #[test]
    fn test_chunker_passes_complete_text_through() {
        let mut chunker = Utf8Chunker::new();
        assert_eq!(chunker.push("héllo".as_bytes()), "héllo");
        assert_eq!(chunker.finish(), "");
    }

    #[test]
    fn test_chunker_reassembles_split_code_point() {
        let emoji = "🙂".as_bytes();
        let mut chunker = Utf8Chunker::new();
        assert_eq!(chunker.push(&emoji[..2]), "");
        assert_eq!(chunker.push(&emoji[2..]), "🙂");
    }

    #[test]
    fn test_chunker_replaces_invalid_bytes() {
        let mut chunker = Utf8Chunker::new();
        assert_eq!(chunker.push(b"a\xFFb"), "a\u{FFFD}b");
    }

    #[test]
    fn test_chunker_flushes_dangling_partial_at_eof() {
        let emoji = "🙂".as_bytes();
        let mut chunker = Utf8Chunker::new();
        assert_eq!(chunker.push(&emoji[..3]), "");
        assert_eq!(chunker.finish(), "\u{FFFD}");
    }
}
