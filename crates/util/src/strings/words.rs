/// Counts whitespace-separated words.
///
/// # Examples
///
/// ```
/// use plainkit_util::strings::count_words;
///
/// assert_eq!(count_words("alpha\tbeta\ngamma"), 3);
/// assert_eq!(count_words("   "), 0);
/// ```
pub fn count_words(value: &str) -> usize {
    value.split_whitespace().count()
}
