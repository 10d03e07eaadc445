use super::property::own_property;
use serde_json::Value;
use tracing::warn;

/// Looks up the value at a dotted `path` such as `"a.b.0.c"`.
///
/// Each segment names an object key or, on arrays, a decimal index. An
/// empty path, a missing segment or a segment applied to a scalar yields
/// `None` and a warning.
///
/// # Examples
///
/// ```
/// use plainkit_util::object::deep_object_scan;
/// use serde_json::json;
///
/// let object = json!({"a": {"b": {"c": 1}}, "list": [{"id": 7}]});
/// assert_eq!(deep_object_scan("a.b.c", &object), Some(&json!(1)));
/// assert_eq!(deep_object_scan("list.0.id", &object), Some(&json!(7)));
/// assert_eq!(deep_object_scan("a.b.d", &object), None);
/// ```
pub fn deep_object_scan<'a>(path: &str, object: &'a Value) -> Option<&'a Value> {
    deep_object_scan_with(path, object, |_| true)
}

/// [`deep_object_scan`] that also requires the found value to satisfy
/// `assert`.
///
/// # Examples
///
/// ```
/// use plainkit_util::assert::{is_number, is_string};
/// use plainkit_util::object::deep_object_scan_with;
/// use serde_json::json;
///
/// let object = json!({"a": {"b": {"c": 1}}});
/// assert_eq!(deep_object_scan_with("a.b.c", &object, is_number), Some(&json!(1)));
/// assert_eq!(deep_object_scan_with("a.b.c", &object, is_string), None);
/// ```
pub fn deep_object_scan_with<'a, F>(path: &str, object: &'a Value, assert: F) -> Option<&'a Value>
where
    F: Fn(&Value) -> bool,
{
    let Some(value) = resolve(path, object) else {
        warn!(path, "deep_object_scan: invalid path or object");
        return None;
    };
    if !assert(value) {
        warn!(path, "deep_object_scan: invalid type assertion");
        return None;
    }
    Some(value)
}

fn resolve<'a>(path: &str, object: &'a Value) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    path.split('.')
        .try_fold(object, |current, segment| own_property(current, segment))
}
