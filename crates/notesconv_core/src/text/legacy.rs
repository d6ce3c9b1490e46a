//! Best-effort decoder for legacy-encoded item text.
//!
//! # Invariants
//! - Decoding never fails; invalid sequences become U+FFFD.
//! - A NUL byte ends the string.
//! - Non-ASCII input triggers exactly one UTF-8 pass over the remainder.

/// Decodes legacy-encoded bytes to a `String`.
pub fn decode_legacy_text(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for (index, &byte) in bytes.iter().enumerate() {
        if byte == 0 {
            break;
        }
        if byte < 0x80 {
            out.push(char::from(byte));
            continue;
        }
        out.push_str(&String::from_utf8_lossy(&bytes[index..]));
        break;
    }
    out
}

/// Decodes a NUL-terminated string, silently dropping invalid UTF-8.
///
/// Used for header titles, where replacement markers are undesirable.
pub fn decode_lossless_prefix(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let mut out = String::with_capacity(end);
    for chunk in bytes[..end].utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
