use crate::{Node, Value, ValueMap, ValueSet};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use tracing::trace;

/// How [`deep_copy_with`] builds the copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyMode {
    /// Walk the graph and rebuild every composite node, keeping its kind.
    #[default]
    Structural,
    /// Encode to JSON text and decode it again. Lossy: see
    /// [`Value::to_json`] for what survives.
    TextRoundTrip,
}

/// Creates an independent copy of a value graph.
///
/// Every composite node in the result is new; scalars and opaque values are
/// shared. Timestamps, sets, maps and patterns keep their kind. A node
/// reachable along several paths is copied once, so shared substructure and
/// cycles are reproduced in the copy. The copy is never frozen.
///
/// # Example
///
/// ```
/// use plainkit_value::{deep_copy, Value};
///
/// let original = Value::object([("foo", Value::array([Value::from(1), Value::from(2)]))]);
/// let copy = deep_copy(&original);
///
/// assert_eq!(copy, original);
/// assert!(!copy.same_identity(&original));
/// assert!(!copy.get("foo").unwrap().same_identity(&original.get("foo").unwrap()));
/// ```
pub fn deep_copy(value: &Value) -> Value {
    deep_copy_with(value, CopyMode::Structural)
}

/// [`deep_copy`] with an explicit [`CopyMode`].
///
/// ```
/// use chrono::Utc;
/// use plainkit_value::{deep_copy_with, CopyMode, Value};
///
/// let v = Value::object([("at", Value::date(Utc::now()))]);
/// let copy = deep_copy_with(&v, CopyMode::TextRoundTrip);
/// assert!(copy.get("at").unwrap().as_str().is_some());
/// ```
pub fn deep_copy_with(value: &Value, mode: CopyMode) -> Value {
    match mode {
        CopyMode::Structural => Copier::default().copy(value),
        CopyMode::TextRoundTrip => copy_through_text(value),
    }
}

#[derive(Default)]
struct Copier {
    copies: HashMap<*const (), Value>,
}

impl Copier {
    fn copy(&mut self, value: &Value) -> Value {
        if matches!(value, Value::Opaque(_)) {
            return value.clone();
        }
        let Some(id) = value.node_id() else {
            return value.clone();
        };
        if let Some(copy) = self.copies.get(&id) {
            return copy.clone();
        }

        match value {
            Value::Array(node) => {
                let target = Rc::new(Node::new(Vec::new()));
                self.copies.insert(id, Value::Array(Rc::clone(&target)));
                let items: Vec<Value> = node.borrow().iter().map(|item| self.copy(item)).collect();
                target.set(items);
                Value::Array(target)
            }
            Value::Object(node) => {
                let target = Rc::new(Node::new(BTreeMap::new()));
                self.copies.insert(id, Value::Object(Rc::clone(&target)));
                let entries: BTreeMap<String, Value> = node
                    .borrow()
                    .iter()
                    .map(|(key, item)| (key.clone(), self.copy(item)))
                    .collect();
                target.set(entries);
                Value::Object(target)
            }
            Value::Date(node) => {
                let copy = Value::date(*node.borrow());
                self.copies.insert(id, copy.clone());
                copy
            }
            Value::Set(node) => {
                let target = Rc::new(Node::new(ValueSet::new()));
                self.copies.insert(id, Value::Set(Rc::clone(&target)));
                let mut members = ValueSet::new();
                for member in node.borrow().iter() {
                    members.insert(self.copy(member));
                }
                target.set(members);
                Value::Set(target)
            }
            Value::Map(node) => {
                let target = Rc::new(Node::new(ValueMap::new()));
                self.copies.insert(id, Value::Map(Rc::clone(&target)));
                let mut entries = ValueMap::new();
                for (key, item) in node.borrow().iter() {
                    entries.insert(self.copy(key), self.copy(item));
                }
                target.set(entries);
                Value::Map(target)
            }
            Value::Pattern(node) => {
                let original = node.borrow();
                let pattern = original.recompile().unwrap_or_else(|err| {
                    trace!(%err, source = original.source(), "pattern recompilation failed, cloning");
                    original.clone()
                });
                let copy = Value::from(pattern);
                self.copies.insert(id, copy.clone());
                copy
            }
            _ => value.clone(),
        }
    }
}

fn copy_through_text(value: &Value) -> Value {
    let json = match value.to_json() {
        Ok(Some(json)) => json,
        Ok(None) => {
            trace!(kind = %value.kind(), "value has no text form");
            return Value::Undefined;
        }
        Err(err) => {
            trace!(%err, "text round-trip failed");
            return Value::Undefined;
        }
    };
    let decoded = serde_json::to_string(&json)
        .and_then(|text| serde_json::from_str::<serde_json::Value>(&text));
    match decoded {
        Ok(json) => Value::from(json),
        Err(err) => {
            trace!(%err, "text round-trip failed");
            Value::Undefined
        }
    }
}
