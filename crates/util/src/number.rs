/// Returns `value` when it is a finite number greater than zero and
/// `fallback` otherwise.
///
/// # Examples
///
/// ```
/// use plainkit_util::number::normalize_positive_number;
///
/// assert_eq!(normalize_positive_number(Some(3.5), 10.0), 3.5);
/// assert_eq!(normalize_positive_number(Some(-5.0), 10.0), 10.0);
/// assert_eq!(normalize_positive_number(None, 10.0), 10.0);
/// ```
pub fn normalize_positive_number(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(n) if n.is_finite() && n > 0.0 => n,
        _ => fallback,
    }
}

/// [`normalize_positive_number`] with a fallback of zero.
pub fn normalize_positive_number_or_zero(value: Option<f64>) -> f64 {
    normalize_positive_number(value, 0.0)
}
