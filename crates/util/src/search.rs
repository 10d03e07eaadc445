//! Prefix search over free-form text.
//!
//! Text is folded to lowercase ASCII tokens: accents are removed (with the
//! `unicode` feature) and every run of characters outside `a-z0-9` acts as
//! a separator.

use indexmap::IndexSet;
#[cfg(feature = "unicode")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

#[cfg(feature = "unicode")]
fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Without Unicode tables only case is folded; accented letters act as
/// separators.
#[cfg(not(feature = "unicode"))]
fn fold(text: &str) -> String {
    text.to_lowercase()
}

fn push_tokens(text: &str, tokens: &mut IndexSet<String>) {
    let folded = fold(text);
    for token in folded
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|token| !token.is_empty())
    {
        if !tokens.contains(token) {
            tokens.insert(token.to_string());
        }
    }
}

/// Splits text into distinct search tokens in first-seen order.
///
/// # Examples
///
/// ```
/// use plainkit_util::search::tokenize_search_text;
///
/// assert_eq!(tokenize_search_text("Salut, SALUT! lume?"), vec!["salut", "lume"]);
/// assert!(tokenize_search_text(" ?! ").is_empty());
/// ```
pub fn tokenize_search_text(input: &str) -> Vec<String> {
    let mut tokens = IndexSet::new();
    push_tokens(input, &mut tokens);
    tokens.into_iter().collect()
}

/// Tokenizes several values into one distinct token list. Missing and
/// empty values are skipped.
///
/// # Examples
///
/// ```
/// use plainkit_util::search::build_search_tokens;
///
/// assert_eq!(
///     build_search_tokens(&[Some("alpha beta"), None, Some("beta gamma")]),
///     vec!["alpha", "beta", "gamma"]
/// );
/// ```
pub fn build_search_tokens(values: &[Option<&str>]) -> Vec<String> {
    let mut tokens = IndexSet::new();
    for value in values.iter().flatten() {
        push_tokens(value, &mut tokens);
    }
    tokens.into_iter().collect()
}

/// Checks that every query token is a prefix of some token in `values`.
///
/// A missing query, or one without any tokens, matches everything.
///
/// # Examples
///
/// ```
/// use plainkit_util::search::matches_search_tokens;
///
/// assert!(matches_search_tokens(Some("jo exa"), &[Some("John Doe"), Some("john@example.com")]));
/// assert!(!matches_search_tokens(Some("alp zz"), &[Some("alpha beta gamma")]));
/// assert!(matches_search_tokens(None, &[]));
/// ```
pub fn matches_search_tokens(query: Option<&str>, values: &[Option<&str>]) -> bool {
    let query_tokens = tokenize_search_text(query.unwrap_or_default());
    if query_tokens.is_empty() {
        return true;
    }
    let value_tokens = build_search_tokens(values);
    query_tokens
        .iter()
        .all(|query| value_tokens.iter().any(|token| token.starts_with(query.as_str())))
}
