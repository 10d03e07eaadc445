use regex::Regex;
use std::sync::OnceLock;

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\A```[a-zA-Z]*\r?\n(.*)\r?\n```\z").unwrap())
}

/// Trims whitespace and byte-order marks from both ends.
pub(crate) fn trim_payload(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Removes a markdown code fence that wraps the whole input.
///
/// The input must be exactly one fenced block: three backticks, an optional
/// language tag, a newline, the body, a newline and the closing backticks.
/// Anything else, including text before or after the fence, is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use plainkit_payload::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
/// assert_eq!(strip_code_fence("```json\n{}\n``` trailing"), "```json\n{}\n``` trailing");
/// ```
pub fn strip_code_fence(raw: &str) -> &str {
    if !raw.starts_with("```") {
        return raw;
    }
    match fence_regex().captures(raw).and_then(|caps| caps.get(1)) {
        Some(body) => trim_payload(body.as_str()),
        None => raw,
    }
}
