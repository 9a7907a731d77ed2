/// Incremental UTF-8 decoder for transport byte chunks.
///
/// Network chunks split without regard for character boundaries, so a
/// multi-byte character can straddle two reads. Up to three bytes of an
/// unfinished trailing code point are held back until the rest arrives;
/// genuinely invalid sequences become U+FFFD and decoding continues.
pub struct Utf8Chunker {
    partial: Vec<u8>,
}

impl Utf8Chunker {
    pub fn new() -> Self {
        Self {
            partial: Vec::new(),
        }
    }

    /// Decodes `bytes`, returning the maximal complete-character prefix.
    pub fn push(&mut self, bytes: &[u8]) -> String {
        self.partial.extend_from_slice(bytes);
        let mut data = std::mem::take(&mut self.partial);
        let mut out = String::new();

        loop {
            match std::str::from_utf8(&data) {
                Ok(text) => {
                    out.push_str(text);
                    break;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&data[..valid]));
                    match e.error_len() {
                        Some(len) => {
                            out.push('\u{FFFD}');
                            data.drain(..valid + len);
                        }
                        None => {
                            // Incomplete trailing code point; carry it over.
                            self.partial = data[valid..].to_vec();
                            break;
                        }
                    }
                }
            }
        }

        out
    }

    /// Flushes any held-back bytes at end of stream. A dangling partial
    /// code point at that point can never complete and decodes lossily.
    pub fn finish(&mut self) -> String {
        let data = std::mem::take(&mut self.partial);
        String::from_utf8_lossy(&data).into_owned()
    }
}

impl Default for Utf8Chunker {
    fn default() -> Self {
        Self::new()
    }
}
