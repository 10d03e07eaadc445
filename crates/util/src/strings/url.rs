/// Trims a base URL and removes one trailing `/`.
///
/// # Examples
///
/// ```
/// use plainkit_util::strings::normalize_base_url;
///
/// assert_eq!(normalize_base_url(" https://example.com/api/ "), "https://example.com/api");
/// ```
pub fn normalize_base_url(base_url: &str) -> &str {
    let trimmed = base_url.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed)
}

/// Joins a base URL and an endpoint path with exactly one `/` between them.
///
/// An empty base yields the trimmed path and an empty path yields the
/// normalized base.
///
/// # Examples
///
/// ```
/// use plainkit_util::strings::build_api_url;
///
/// assert_eq!(build_api_url("https://example.com/api/", "/videos"), "https://example.com/api/videos");
/// assert_eq!(build_api_url("https://example.com/api", "videos"), "https://example.com/api/videos");
/// assert_eq!(build_api_url("", "/videos"), "/videos");
/// ```
pub fn build_api_url(base_url: &str, path: &str) -> String {
    let base = normalize_base_url(base_url);
    let path = path.trim();
    if base.is_empty() {
        return path.to_string();
    }
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
