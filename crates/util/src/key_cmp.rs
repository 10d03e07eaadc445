use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One position of a composite sort key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyPart {
    Number(f64),
    Text(String),
}

impl From<f64> for KeyPart {
    fn from(n: f64) -> Self {
        KeyPart::Number(n)
    }
}

impl From<i32> for KeyPart {
    fn from(n: i32) -> Self {
        KeyPart::Number(f64::from(n))
    }
}

impl From<u32> for KeyPart {
    fn from(n: u32) -> Self {
        KeyPart::Number(f64::from(n))
    }
}

impl From<i64> for KeyPart {
    fn from(n: i64) -> Self {
        KeyPart::Number(n as f64)
    }
}

impl From<&str> for KeyPart {
    fn from(s: &str) -> Self {
        KeyPart::Text(s.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(s: String) -> Self {
        KeyPart::Text(s)
    }
}

/// Sort order for [`compare_keys_with_direction`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Compares two composite keys position by position.
///
/// The first position that orders decides the result. A key that runs out
/// of positions first sorts before the other. Text compares by UTF-16 code
/// units and a number against a text compares the number with the text read
/// as a JavaScript numeric string, so keys sort the same as in a browser.
/// Positions that do not order, such as `NaN` or a number against `"abc"`,
/// are skipped.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use plainkit_util::key_cmp::{compare_keys, KeyPart};
///
/// let a = [KeyPart::from("alpha"), KeyPart::from(2)];
/// let b = [KeyPart::from("alpha"), KeyPart::from(10)];
/// assert_eq!(compare_keys(&a, &b), Ordering::Less);
/// assert_eq!(compare_keys(&a[..1], &a), Ordering::Less);
/// ```
pub fn compare_keys(a: &[KeyPart], b: &[KeyPart]) -> Ordering {
    let len = a.len().max(b.len());
    for index in 0..len {
        let ordering = match (a.get(index), b.get(index)) {
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(left), Some(right)) => compare_part(left, right),
            (None, None) => None,
        };
        match ordering {
            Some(Ordering::Equal) | None => continue,
            Some(ordering) => return ordering,
        }
    }
    Ordering::Equal
}

/// [`compare_keys`] with the result reversed for [`SortDirection::Desc`].
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use plainkit_util::key_cmp::{compare_keys_with_direction, KeyPart, SortDirection};
///
/// let (a, b) = ([KeyPart::from(1)], [KeyPart::from(2)]);
/// assert_eq!(compare_keys_with_direction(&a, &b, SortDirection::Asc), Ordering::Less);
/// assert_eq!(compare_keys_with_direction(&a, &b, SortDirection::Desc), Ordering::Greater);
/// ```
pub fn compare_keys_with_direction(a: &[KeyPart], b: &[KeyPart], direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => compare_keys(a, b),
        SortDirection::Desc => compare_keys(b, a),
    }
}

fn compare_part(left: &KeyPart, right: &KeyPart) -> Option<Ordering> {
    match (left, right) {
        (KeyPart::Number(l), KeyPart::Number(r)) => l.partial_cmp(r),
        (KeyPart::Text(l), KeyPart::Text(r)) => Some(l.encode_utf16().cmp(r.encode_utf16())),
        (KeyPart::Number(l), KeyPart::Text(r)) => l.partial_cmp(&text_to_number(r)),
        (KeyPart::Text(l), KeyPart::Number(r)) => text_to_number(l).partial_cmp(r),
    }
}

/// Reads text the way JavaScript's `Number(text)` does: surrounding
/// whitespace is ignored, blank text is zero, `Infinity` and `0x`/`0o`/`0b`
/// literals are accepted and anything else unparseable is `NaN`.
fn text_to_number(text: &str) -> f64 {
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    match text {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            if digits.starts_with('+') {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }
    let decimal = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if decimal {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}
