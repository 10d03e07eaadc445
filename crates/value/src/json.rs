//! Bridge between [`Value`] and `serde_json::Value`.
//!
//! The conversion to JSON follows text encoding rules and is lossy:
//! timestamps become RFC 3339 strings, sets, maps and patterns become empty
//! objects, undefined and opaque values disappear from objects and turn into
//! `null` inside arrays, and non-finite numbers become `null`.

use crate::{Value, ValueError};
use chrono::SecondsFormat;
use serde_json::{Map, Number, Value as Json};

/// Integers below this magnitude survive an `f64` round-trip exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::from(&json)
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::from(s.as_str()),
            Json::Array(items) => Value::array(items.iter().map(Value::from)),
            Json::Object(map) => Value::object(map.iter().map(|(k, v)| (k.clone(), Value::from(v)))),
        }
    }
}

impl Value {
    /// Encodes the value as JSON.
    ///
    /// Returns `Ok(None)` when the value has no JSON form at all (undefined
    /// or opaque at the top level).
    ///
    /// # Errors
    ///
    /// [`ValueError::Cycle`] if a sequence or mapping contains itself.
    ///
    /// # Example
    ///
    /// ```
    /// use plainkit_value::Value;
    /// use serde_json::json;
    ///
    /// let v = Value::object([
    ///     ("n", Value::from(2)),
    ///     ("tags", Value::set([Value::from("a")])),
    ///     ("gone", Value::Undefined),
    /// ]);
    /// assert_eq!(v.to_json().unwrap(), Some(json!({"n": 2, "tags": {}})));
    /// ```
    pub fn to_json(&self) -> Result<Option<Json>, ValueError> {
        let mut ancestors = Vec::new();
        encode(self, &mut ancestors)
    }
}

fn encode(value: &Value, ancestors: &mut Vec<*const ()>) -> Result<Option<Json>, ValueError> {
    let json = match value {
        Value::Undefined | Value::Opaque(_) => return Ok(None),
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => encode_number(*n),
        Value::String(s) => Json::String(s.to_string()),
        Value::Date(node) => {
            Json::String(node.borrow().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Value::Set(_) | Value::Map(_) | Value::Pattern(_) => Json::Object(Map::new()),
        Value::Array(node) => {
            enter(value, ancestors)?;
            let mut items = Vec::with_capacity(node.borrow().len());
            for item in node.borrow().iter() {
                items.push(encode(item, ancestors)?.unwrap_or(Json::Null));
            }
            ancestors.pop();
            Json::Array(items)
        }
        Value::Object(node) => {
            enter(value, ancestors)?;
            let mut map = Map::new();
            for (key, item) in node.borrow().iter() {
                if let Some(json) = encode(item, ancestors)? {
                    map.insert(key.clone(), json);
                }
            }
            ancestors.pop();
            Json::Object(map)
        }
    };
    Ok(Some(json))
}

fn enter(value: &Value, ancestors: &mut Vec<*const ()>) -> Result<(), ValueError> {
    if let Some(id) = value.node_id() {
        if ancestors.contains(&id) {
            return Err(ValueError::Cycle);
        }
        ancestors.push(id);
    }
    Ok(())
}

fn encode_number(n: f64) -> Json {
    if !n.is_finite() {
        return Json::Null;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Json::from(n as i64);
    }
    Number::from_f64(n).map_or(Json::Null, Json::Number)
}
