use serde_json::{Map, Value};
use tracing::warn;

/// Checks whether `obj` has an own property named `key`.
///
/// Objects answer for their keys. Arrays answer for their in-range indices
/// written in decimal, like `"0"`. Every other value has no properties.
///
/// # Examples
///
/// ```
/// use plainkit_util::object::has_own_property;
/// use serde_json::json;
///
/// assert!(has_own_property(&json!({"foo": 1}), "foo"));
/// assert!(has_own_property(&json!([1, 2]), "1"));
/// assert!(!has_own_property(&json!([1, 2]), "length"));
/// assert!(!has_own_property(&json!("text"), "0"));
/// ```
pub fn has_own_property(obj: &Value, key: &str) -> bool {
    own_property(obj, key).is_some()
}

pub(crate) fn own_property<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    match obj {
        Value::Object(map) => map.get(key),
        Value::Array(items) => array_index(key).and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Parses a canonical array index: decimal digits without a leading zero.
fn array_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if canonical {
        key.parse().ok()
    } else {
        None
    }
}

/// Reads an own property of `object`.
///
/// Returns `None` and emits a warning when the key is missing.
///
/// # Examples
///
/// ```
/// use plainkit_util::object::read_object_property;
/// use serde_json::json;
///
/// let object = json!({"a": 1, "b": "2"});
/// let map = object.as_object().unwrap();
/// assert_eq!(read_object_property("a", map), Some(&json!(1)));
/// assert_eq!(read_object_property("d", map), None);
/// ```
pub fn read_object_property<'a>(key: &str, object: &'a Map<String, Value>) -> Option<&'a Value> {
    read_object_property_with(key, object, |_| true)
}

/// [`read_object_property`] that also requires the value to satisfy
/// `assert`. A value that fails the assertion yields `None` and a warning.
///
/// # Examples
///
/// ```
/// use plainkit_util::assert::{is_number, is_string};
/// use plainkit_util::object::read_object_property_with;
/// use serde_json::json;
///
/// let object = json!({"a": 1});
/// let map = object.as_object().unwrap();
/// assert_eq!(read_object_property_with("a", map, is_number), Some(&json!(1)));
/// assert_eq!(read_object_property_with("a", map, is_string), None);
/// ```
pub fn read_object_property_with<'a, F>(
    key: &str,
    object: &'a Map<String, Value>,
    assert: F,
) -> Option<&'a Value>
where
    F: Fn(&Value) -> bool,
{
    let Some(value) = object.get(key) else {
        warn!(key, "read_object_property: invalid key or object");
        return None;
    };
    if !assert(value) {
        warn!(key, "read_object_property: invalid type assertion");
        return None;
    }
    Some(value)
}
