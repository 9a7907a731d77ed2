/// Deterministic 64-bit FNV-1a digest of a text span.
///
/// Used by [`crate::DedupScanner`] to suppress re-emission of byte-identical
/// object spans. The hash is stable across runs and processes (no random
/// seeding), order-sensitive, and defined for the empty string (which hashes
/// to the FNV offset basis). Collisions are tolerable: this is a duplicate
/// suppression aid, not an integrity check.
pub fn fingerprint(text: &str) -> u64 {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET_BASIS;
    for &byte in text.as_bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
