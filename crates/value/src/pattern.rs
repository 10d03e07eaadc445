use crate::ValueError;
use regex::{Regex, RegexBuilder};
use std::fmt;

const KNOWN_FLAGS: &str = "dgimsuvy";

/// A regular expression kept together with the source text and flags it was
/// built from.
///
/// Flags use the `/source/flags` vocabulary: `i`, `m` and `s` change how the
/// expression compiles, `d`, `g`, `u`, `v` and `y` are accepted and kept as
/// text since they only affect matching drivers.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    flags: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Unknown or repeated flags, or a source the regex engine rejects.
    ///
    /// # Example
    ///
    /// ```
    /// use plainkit_value::Pattern;
    ///
    /// let p = Pattern::new("^ab+c$", "i").unwrap();
    /// assert!(p.is_match("ABBC"));
    /// assert_eq!(p.to_string(), "/^ab+c$/i");
    /// ```
    pub fn new(source: &str, flags: &str) -> Result<Self, ValueError> {
        let mut seen = String::with_capacity(flags.len());
        for flag in flags.chars() {
            if !KNOWN_FLAGS.contains(flag) {
                return Err(ValueError::UnsupportedFlag(flag));
            }
            if seen.contains(flag) {
                return Err(ValueError::DuplicateFlag(flag));
            }
            seen.push(flag);
        }

        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|err| ValueError::InvalidPattern {
                pattern: source.to_string(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            source: source.to_string(),
            flags: flags.to_string(),
            regex,
        })
    }

    /// Builds a fresh pattern from this one's source and flags.
    pub fn recompile(&self) -> Result<Self, ValueError> {
        Self::new(&self.source, &self.flags)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_change_compilation() {
        let p = Pattern::new("^b.c$", "ms").unwrap();
        assert!(p.is_match("a\nb\nc"));
        let plain = Pattern::new("^b.c$", "").unwrap();
        assert!(!plain.is_match("a\nb\nc"));
    }

    #[test]
    fn test_matching_only_flags_are_kept() {
        let p = Pattern::new("x", "gy").unwrap();
        assert_eq!(p.flags(), "gy");
        assert!(p.is_match("x"));
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            Pattern::new("x", "q").unwrap_err(),
            ValueError::UnsupportedFlag('q')
        );
    }

    #[test]
    fn test_duplicate_flag() {
        assert_eq!(
            Pattern::new("x", "ii").unwrap_err(),
            ValueError::DuplicateFlag('i')
        );
    }

    #[test]
    fn test_invalid_source() {
        let err = Pattern::new("(", "").unwrap_err();
        assert!(matches!(err, ValueError::InvalidPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn test_recompile_is_equal() {
        let p = Pattern::new("a+", "i").unwrap();
        let q = p.recompile().unwrap();
        assert_eq!(p, q);
        assert_eq!(q.regex().as_str(), "a+");
    }
}
