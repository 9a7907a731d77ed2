use simd_json::OwnedValue;
use tracing::warn;

/// Parses a self-contained JSON text into an owned value.
///
/// A span that fails to parse is reported through `tracing` and swallowed;
/// the error never crosses this boundary. One corrupt span must not take
/// down the stream it arrived on.
pub fn safe_decode(text: &str) -> Option<OwnedValue> {
    // simd_json parses in place, so it needs its own mutable copy.
    let mut bytes = text.as_bytes().to_vec();
    match simd_json::to_owned_value(&mut bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, input = text, "JSON decode error, dropping span");
            None
        }
    }
}
