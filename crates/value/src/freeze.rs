use crate::{Node, Value};

/// Counters collected during one freeze traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreezeStats {
    /// Nodes locked by this traversal.
    pub frozen: usize,
    /// Nodes found already locked. Their contents were not visited.
    pub skipped: usize,
}

/// Locks a value graph against mutation and returns the same value.
///
/// Every composite node reachable from `value` is frozen in place. A node
/// that is already frozen is skipped together with everything below it, so
/// calling this twice is cheap and a shallow-frozen container keeps whatever
/// mutability its children had. Nodes are locked before their children are
/// visited, which makes cycles terminate.
///
/// # Example
///
/// ```
/// use plainkit_value::{deep_freeze, Value, ValueError};
///
/// let v = deep_freeze(Value::object([("list", Value::array([]))]));
/// let list = v.get("list").unwrap();
/// assert!(list.is_frozen());
/// assert_eq!(
///     list.as_array().unwrap().update(|items| items.push(Value::Null)),
///     Err(ValueError::Frozen)
/// );
/// ```
pub fn deep_freeze(value: Value) -> Value {
    deep_freeze_with_stats(&value);
    value
}

/// Same traversal as [`deep_freeze`], reporting how much work it did.
pub fn deep_freeze_with_stats(value: &Value) -> FreezeStats {
    let mut stats = FreezeStats::default();
    freeze_value(value, &mut stats);
    stats
}

fn freeze_value(value: &Value, stats: &mut FreezeStats) {
    match value {
        Value::Array(node) => {
            if lock(node, stats) {
                for item in node.borrow().iter() {
                    freeze_value(item, stats);
                }
            }
        }
        Value::Object(node) => {
            if lock(node, stats) {
                for item in node.borrow().values() {
                    freeze_value(item, stats);
                }
            }
        }
        Value::Set(node) => {
            if lock(node, stats) {
                for member in node.borrow().iter() {
                    freeze_value(member, stats);
                }
            }
        }
        Value::Map(node) => {
            if lock(node, stats) {
                for (key, item) in node.borrow().iter() {
                    freeze_value(key, stats);
                    freeze_value(item, stats);
                }
            }
        }
        Value::Date(node) => {
            lock(node, stats);
        }
        Value::Pattern(node) => {
            lock(node, stats);
        }
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Opaque(_) => {}
    }
}

fn lock<T>(node: &Node<T>, stats: &mut FreezeStats) -> bool {
    let locked = node.freeze();
    if locked {
        stats.frozen += 1;
    } else {
        stats.skipped += 1;
    }
    locked
}
