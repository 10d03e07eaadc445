//! Opaque pagination cursors.
//!
//! A cursor is `base64(encodeURIComponent(json))`, the same wire form a
//! browser client produces with `btoa`, so cursors can travel in both
//! directions.

use crate::CursorError;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decoder matching `atob`: padding optional, trailing bits ignored.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes a serializable value into an opaque cursor string.
///
/// # Errors
///
/// [`CursorError::Json`] if the value cannot be serialized.
///
/// # Examples
///
/// ```
/// use plainkit_payload::{decode_json_cursor, encode_json_cursor};
/// use serde_json::json;
///
/// let cursor = encode_json_cursor(&json!({"page": 2, "size": 20})).unwrap();
/// assert_eq!(decode_json_cursor(&cursor), Some(json!({"page": 2, "size": 20})));
/// assert_eq!(decode_json_cursor::<serde_json::Value>("not-cursor"), None);
/// ```
pub fn encode_json_cursor<T: Serialize + ?Sized>(value: &T) -> Result<String, CursorError> {
    let json = serde_json::to_string(value)?;
    Ok(STANDARD.encode(encode_uri_component(&json)))
}

/// Decodes a cursor, returning `None` for anything malformed.
pub fn decode_json_cursor<T: DeserializeOwned>(cursor: &str) -> Option<T> {
    try_decode_json_cursor(cursor).ok()
}

/// Decodes a cursor and reports why it was rejected.
///
/// # Errors
///
/// Invalid base64, a malformed percent escape, escapes that do not form
/// UTF-8, or a payload that does not deserialize into `T`.
pub fn try_decode_json_cursor<T: DeserializeOwned>(cursor: &str) -> Result<T, CursorError> {
    let compact: String = cursor.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = FORGIVING.decode(compact)?;
    // atob yields one char per byte.
    let latin1: String = bytes.iter().map(|&b| char::from(b)).collect();
    let json = decode_uri_component(&latin1)?;
    Ok(serde_json::from_str(&json)?)
}

fn is_uri_component_safe(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encodes everything outside the `encodeURIComponent` safe set.
pub fn encode_uri_component(text: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        if is_uri_component_safe(byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    out
}

/// Reverses [`encode_uri_component`]. Characters that are not part of an
/// escape pass through unchanged.
///
/// # Errors
///
/// [`CursorError::Percent`] for a `%` not followed by two hex digits and
/// [`CursorError::Utf8`] when the decoded bytes are not UTF-8.
pub fn decode_uri_component(text: &str) -> Result<String, CursorError> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        let hi = chars.next().and_then(|c| c.to_digit(16));
        let lo = chars.next().and_then(|c| c.to_digit(16));
        match (hi, lo) {
            (Some(hi), Some(lo)) => bytes.push((hi * 16 + lo) as u8),
            _ => return Err(CursorError::Percent),
        }
    }
    Ok(String::from_utf8(bytes)?)
}
