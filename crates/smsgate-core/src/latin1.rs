//! Latin-1 (ISO-8859-1) codec for WAP size-cache keys.
//!
//! Cache keys are raw byte concatenations. When a key crosses the public API
//! it does so as text that must round-trip byte-for-byte, so lookups go
//! through this codec rather than any native string representation.

/// Encode text to Latin-1 bytes.
///
/// Chars above U+00FF have no Latin-1 mapping and encode to `b'?'`, the
/// standard ISO-8859-1 replacement byte. Such a key can never have been
/// written by the push receiver, so the lookup will simply miss.
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut replaced = 0usize;
    for c in s.chars() {
        match u8::try_from(c as u32) {
            Ok(b) => out.push(b),
            Err(_) => {
                out.push(b'?');
                replaced += 1;
            }
        }
    }
    if replaced > 0 {
        tracing::debug!(replaced, "lossy latin-1 encode of cache key text");
    }
    out
}

/// Decode Latin-1 bytes to text; every byte maps to the code point of the
/// same value, so decoding never fails.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
