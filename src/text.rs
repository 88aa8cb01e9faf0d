//! Decoding of the several physical encodings CGNS dumps use for short
//! strings, plus the name normalization shared by family and boundary
//! matching.
//!
//! Text failures are non-fatal by design: names are advisory, not structural,
//! so every function here returns an empty string rather than an error.

use crate::tree::Payload;

/// Decodes a short string payload to canonical, whitespace-normalized text.
///
/// Handles, in this priority:
/// 1. fixed-width byte buffers: trailing NUL/non-printable padding trimmed,
///    lossy UTF-8 decode with invalid bytes dropped;
/// 2. string arrays: concatenated;
/// 3. integer arrays of character codes: mapped, NUL codes dropped;
/// 4. anything else (floats, absent): empty string.
pub fn decode_text(payload: &Payload) -> String {
    let raw = match payload {
        Payload::Bytes(bytes) => {
            let end = bytes
                .iter()
                .rposition(|&b| b != 0 && b >= 0x20)
                .map_or(0, |i| i + 1);
            String::from_utf8_lossy(&bytes[..end])
                .chars()
                .filter(|&c| c != char::REPLACEMENT_CHARACTER)
                .collect()
        }
        Payload::Strings(parts) => parts.concat(),
        Payload::I64(codes) => codes
            .iter()
            .filter(|&&code| code > 0)
            .filter_map(|&code| u32::try_from(code).ok().and_then(char::from_u32))
            .collect(),
        Payload::F64(_) | Payload::None => String::new(),
    };
    clean_name(&raw)
}

/// Collapses internal whitespace runs and strips leading/trailing whitespace.
pub fn clean_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a name for use as a lookup key: cleaned and uppercased.
pub fn normalize_key(raw: &str) -> String {
    clean_name(raw).to_uppercase()
}
