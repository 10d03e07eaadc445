use regex::Regex;
use std::sync::OnceLock;

fn bullet_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*-\s?").unwrap())
}

/// Splits on `\n` and `\r\n`, keeping empty lines.
fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn strip_marker(line: &str) -> &str {
    match bullet_marker_regex().find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    }
}

/// Rewrites free-form lines as a `- ` bullet list.
///
/// Existing markers and leading indentation are dropped. Lines left empty
/// stay empty, so paragraph breaks survive.
///
/// # Examples
///
/// ```
/// use plainkit_util::strings::format_bullet_text;
///
/// assert_eq!(format_bullet_text("alpha\n beta\n\n- gamma"), "- alpha\n- beta\n\n- gamma");
/// ```
pub fn format_bullet_text(raw: &str) -> String {
    split_lines(raw)
        .map(|line| {
            let content = strip_marker(line).trim_start();
            if content.is_empty() {
                String::new()
            } else {
                format!("- {content}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strips bullet markers and surrounding whitespace, dropping empty lines.
///
/// # Examples
///
/// ```
/// use plainkit_util::strings::normalize_bullet_text;
///
/// assert_eq!(normalize_bullet_text("- alpha\n\n - beta \n gamma"), "alpha\nbeta\ngamma");
/// ```
pub fn normalize_bullet_text(raw: &str) -> String {
    split_lines(raw)
        .map(|line| strip_marker(line).trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_crlf() {
        assert_eq!(format_bullet_text("one\r\n  - two\r\n\r\n three"), "- one\n- two\n\n- three");
    }

    #[test]
    fn test_format_only_first_marker_is_removed() {
        assert_eq!(format_bullet_text("- - nested"), "- - nested");
        assert_eq!(format_bullet_text("-tight"), "- tight");
    }

    #[test]
    fn test_format_marker_only_line_is_empty() {
        assert_eq!(format_bullet_text("-\n  -  "), "\n");
    }

    #[test]
    fn test_format_keeps_trailing_whitespace() {
        assert_eq!(format_bullet_text("a  "), "- a  ");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_bullet_text(""), "");
    }

    #[test]
    fn test_normalize_hyphen_inside_line() {
        assert_eq!(normalize_bullet_text("well-known\n- x-ray"), "well-known\nx-ray");
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize_bullet_text("\n - \n\r\n"), "");
    }
}
