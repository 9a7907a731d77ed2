use std::collections::HashSet;

use simd_json::OwnedValue;
use tracing::debug;

use crate::decode::safe_decode;
use crate::extract::{next_object_span, ScanOutcome};
use crate::fingerprint::fingerprint;

/// Incremental extractor of distinct JSON objects from chunked text.
///
/// Chunk boundaries carry no meaning: an object may arrive split across
/// several chunks, and one chunk may hold several objects. Each completed
/// `{...}` span is emitted at most once per scanner instance; a span whose
/// fingerprint was already emitted is dropped without re-parsing. Spans
/// that fail to parse are skipped (and logged by [`safe_decode`]) without
/// poisoning the fingerprint set, so a later identical-but-valid occurrence
/// is still attempted.
///
/// The buffer and fingerprint set belong to this instance alone; separate
/// streams get separate scanners and never interfere.
pub struct DedupScanner {
    buffer: String,
    seen: HashSet<u64>,
}

impl DedupScanner {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            seen: HashSet::new(),
        }
    }

    /// Appends `chunk` and returns every newly completed, not-yet-seen
    /// object, in the order each closing brace appeared.
    ///
    /// An empty chunk is a no-op. Text belonging to an object whose closing
    /// brace has not arrived is retained verbatim for the next call.
    pub fn push(&mut self, chunk: &str) -> Vec<OwnedValue> {
        self.buffer.push_str(chunk);

        let mut emitted = Vec::new();
        let mut cursor = 0;

        loop {
            match next_object_span(&self.buffer, cursor) {
                ScanOutcome::Complete { start, end } => {
                    let span = &self.buffer[start..end];
                    let hash = fingerprint(span);
                    if self.seen.contains(&hash) {
                        debug!(hash, "duplicate span suppressed");
                    } else if let Some(value) = safe_decode(span) {
                        self.seen.insert(hash);
                        emitted.push(value);
                    }
                    cursor = end;
                }
                // Wait for more input; the unconsumed tail stays buffered.
                ScanOutcome::Incomplete { .. } | ScanOutcome::NotFound => break,
            }
        }

        if cursor > 0 {
            self.buffer.drain(..cursor);
        }
        emitted
    }

    /// Bytes of carried-over text not yet attributed to a completed span.
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for DedupScanner {
    fn default() -> Self {
        Self::new()
    }
}
