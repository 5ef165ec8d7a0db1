//! Lenient request decoding.
//!
//! `serde_json` refuses strings that are not valid Unicode: raw invalid
//! UTF-8 bytes and `\uXXXX` escapes naming an unpaired surrogate. Both are
//! replaced with U+FFFD before parsing so such bodies still decode.

use std::borrow::Cow;

use crate::models::McpRequest;

const REPLACEMENT_ESCAPE: &str = "\\ufffd";

/// Decodes a `POST /mcp` body.
pub fn decode_request(body: &[u8]) -> serde_json::Result<McpRequest> {
    let text = String::from_utf8_lossy(body);
    let text = replace_lone_surrogates(&text);
    serde_json::from_str(&text)
}

/// Rewrites every `\uXXXX` escape that is an unpaired surrogate to `\ufffd`.
///
/// A high surrogate immediately followed by a low surrogate escape is left
/// intact. Returns the input unchanged (borrowed) when nothing needs fixing.
pub fn replace_lone_surrogates(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        let Some(unit) = escaped_unit(bytes, i) else {
            // `\"`, `\\`, `\n` ...
            i += 2;
            continue;
        };
        if !is_surrogate(unit) {
            i += 6;
            continue;
        }
        if is_high_surrogate(unit)
            && escaped_unit(bytes, i + 6).is_some_and(is_low_surrogate)
        {
            i += 12;
            continue;
        }

        let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
        buf.push_str(&text[copied..i]);
        buf.push_str(REPLACEMENT_ESCAPE);
        i += 6;
        copied = i;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

/// Code unit of the `\uXXXX` escape starting at `at`, if there is one.
fn escaped_unit(bytes: &[u8], at: usize) -> Option<u32> {
    if bytes.get(at) != Some(&b'\\') || bytes.get(at + 1) != Some(&b'u') {
        return None;
    }
    let hex = bytes.get(at + 2..at + 6)?;
    if !hex.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u32::from_str_radix(std::str::from_utf8(hex).ok()?, 16).ok()
}

fn is_surrogate(unit: u32) -> bool {
    (0xD800..0xE000).contains(&unit)
}

fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..0xDC00).contains(&unit)
}

fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..0xE000).contains(&unit)
}
