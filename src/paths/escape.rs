//! Key escaping for cache and metadata filenames.

use std::fmt::Write;

const EMPTY_KEY: &str = "%";

/// Escape `key` into a single filesystem-safe path component.
///
/// Uses URL query escaping: ASCII letters, digits and `-_.~` are kept, a
/// space becomes `+`, every other byte becomes `%XX`. The mapping is
/// injective. Keys made only of dots would name the directory itself or its
/// parent, so their dots are escaped as well. The empty key becomes `%`,
/// a name escaping never otherwise produces since every `%` it writes is
/// followed by two hex digits.
///
/// Long keys give long filenames; no hashing or truncation is applied.
pub fn escape_key(key: &str) -> String {
    if key.is_empty() {
        return EMPTY_KEY.to_string();
    }

    let only_dots = key.bytes().all(|b| b == b'.');

    let mut escaped = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'.' if only_dots => push_percent(&mut escaped, byte),
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                escaped.push(byte as char)
            }
            b' ' => escaped.push('+'),
            _ => push_percent(&mut escaped, byte),
        }
    }
    escaped
}

fn push_percent(out: &mut String, byte: u8) {
    // Writing to a String cannot fail
    let _ = write!(out, "%{:02X}", byte);
}
