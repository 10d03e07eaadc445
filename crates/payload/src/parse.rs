use crate::fence::trim_payload;
use crate::{extract_first_json_object, strip_code_fence, PayloadError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Outcome of [`parse_json_payload`].
///
/// On success `parsed` is set and `errors` is empty. On failure `parsed` is
/// `None` and `errors` holds one message. Blank input leaves both empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseJsonPayloadResult<T = serde_json::Value> {
    pub parsed: Option<T>,
    pub errors: Vec<String>,
}

impl<T> ParseJsonPayloadResult<T> {
    fn parsed(value: T) -> Self {
        Self {
            parsed: Some(value),
            errors: Vec::new(),
        }
    }

    fn blank() -> Self {
        Self {
            parsed: None,
            errors: Vec::new(),
        }
    }

    fn invalid() -> Self {
        Self {
            parsed: None,
            errors: vec![PayloadError::InvalidJson.to_string()],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts into a `Result`; blank input maps to `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, PayloadError> {
        if self.is_ok() {
            Ok(self.parsed)
        } else {
            Err(PayloadError::InvalidJson)
        }
    }
}

/// Parses `text` as a JSON document into `T`.
///
/// A document that is JSON `null` counts as no payload and yields `None`,
/// as does any document that does not deserialize into `T`.
pub fn try_parse_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    let json: serde_json::Value = serde_json::from_str(text).ok()?;
    if json.is_null() {
        return None;
    }
    serde_json::from_value(json).ok()
}

/// Parses a payload that should contain one JSON document, tolerating the
/// usual wrappers around generated output.
///
/// Attempts, in order: the trimmed text with any enclosing code fence
/// removed, then the first balanced `{ ... }` span inside it.
///
/// # Examples
///
/// ```
/// use plainkit_payload::parse_json_payload;
/// use serde_json::json;
///
/// let result = parse_json_payload("Result:\n{\"ok\":true}\nThanks");
/// assert_eq!(result.parsed, Some(json!({"ok": true})));
/// assert!(result.errors.is_empty());
///
/// let result = parse_json_payload("not-json");
/// assert_eq!(result.parsed, None);
/// assert_eq!(result.errors, vec!["Payload must be valid JSON."]);
///
/// let result = parse_json_payload("   ");
/// assert_eq!(result.parsed, None);
/// assert!(result.errors.is_empty());
/// ```
pub fn parse_json_payload(raw: &str) -> ParseJsonPayloadResult {
    parse_json_payload_as(raw)
}

/// Typed variant of [`parse_json_payload`].
pub fn parse_json_payload_as<T: DeserializeOwned>(raw: &str) -> ParseJsonPayloadResult<T> {
    let trimmed = trim_payload(raw);
    if trimmed.is_empty() {
        return ParseJsonPayloadResult::blank();
    }

    let stripped = strip_code_fence(trimmed);
    if let Some(parsed) = try_parse_json(stripped) {
        return ParseJsonPayloadResult::parsed(parsed);
    }

    debug!(len = stripped.len(), "direct parse failed, scanning for an embedded object");
    if let Some(span) = extract_first_json_object(stripped) {
        if let Some(parsed) = try_parse_json(span) {
            return ParseJsonPayloadResult::parsed(parsed);
        }
        debug!(span_len = span.len(), "embedded object is not valid JSON");
    }

    ParseJsonPayloadResult::invalid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_json() {
        let result = parse_json_payload(r#"{"ok":true}"#);
        assert_eq!(result, ParseJsonPayloadResult::parsed(json!({"ok": true})));
    }

    #[test]
    fn test_direct_array_and_scalars() {
        assert_eq!(parse_json_payload("[1,2]").parsed, Some(json!([1, 2])));
        assert_eq!(parse_json_payload("42").parsed, Some(json!(42)));
        assert_eq!(parse_json_payload("\"s\"").parsed, Some(json!("s")));
    }

    #[test]
    fn test_null_document_is_an_error() {
        let result = parse_json_payload("null");
        assert_eq!(result.parsed, None);
        assert_eq!(result.errors, vec!["Payload must be valid JSON."]);
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_json_payload(""), ParseJsonPayloadResult::blank());
        assert_eq!(parse_json_payload("\n\t "), ParseJsonPayloadResult::blank());
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(parse_json_payload("\u{FEFF}"), ParseJsonPayloadResult::blank());
        assert_eq!(parse_json_payload(" \u{FEFF}\n"), ParseJsonPayloadResult::blank());
        assert_eq!(
            parse_json_payload("\u{FEFF}[1,2]"),
            ParseJsonPayloadResult::parsed(json!([1, 2]))
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(parse_json_payload("{}").into_result(), Ok(Some(json!({}))));
        assert_eq!(parse_json_payload("").into_result(), Ok(None));
        assert_eq!(
            parse_json_payload("nope").into_result(),
            Err(PayloadError::InvalidJson)
        );
    }

    #[test]
    fn test_broken_embedded_object() {
        let result = parse_json_payload("see {not json} here");
        assert!(!result.is_ok());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_try_parse_json() {
        assert_eq!(try_parse_json::<serde_json::Value>(" {} "), Some(json!({})));
        assert_eq!(try_parse_json::<serde_json::Value>("{"), None);
        assert_eq!(try_parse_json::<u8>("300"), None);
    }
}
