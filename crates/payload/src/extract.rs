/// Finds the first balanced `{ ... }` span in `value`.
///
/// Scanning starts at the first `{`. Braces inside double-quoted strings do
/// not count, and a backslash always consumes the character after it.
/// Returns `None` if the opening brace is never closed.
///
/// # Examples
///
/// ```
/// use plainkit_payload::extract_first_json_object;
///
/// let text = r#"Result: {"a": "text with } brace"} Thanks"#;
/// assert_eq!(extract_first_json_object(text), Some(r#"{"a": "text with } brace"}"#));
/// assert_eq!(extract_first_json_object("{\"open\": 1"), None);
/// ```
pub fn extract_first_json_object(value: &str) -> Option<&str> {
    let start = value.find('{')?;
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escape = false;

    // Only ASCII bytes drive the state machine, so byte offsets stay on
    // char boundaries.
    for (offset, byte) in value.as_bytes()[start..].iter().enumerate() {
        if escape {
            escape = false;
            continue;
        }
        match byte {
            b'\\' => escape = true,
            b'"' => in_string = !in_string,
            _ if in_string => {}
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&value[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}
