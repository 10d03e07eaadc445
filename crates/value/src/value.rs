use crate::{Node, Pattern, ValueError, ValueMap, ValueSet};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::rc::Rc;

pub type Array = Rc<Node<Vec<Value>>>;
pub type Object = Rc<Node<BTreeMap<String, Value>>>;

/// A dynamically typed value graph.
///
/// Cloning a `Value` shares composite nodes, so a clone is the same identity
/// as the original. Use [`deep_copy`](crate::deep_copy) for an independent
/// structure.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Array(Array),
    Object(Object),
    Date(Rc<Node<DateTime<Utc>>>),
    Set(Rc<Node<ValueSet>>),
    Map(Rc<Node<ValueMap>>),
    Pattern(Rc<Node<Pattern>>),
    /// Any other host value. Passed through untouched by copy and freeze.
    Opaque(Rc<dyn Any>),
}

/// Classification of a [`Value`], evaluated once per node by the
/// traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Scalar,
    Sequence,
    Mapping,
    Timestamp,
    UniqueSet,
    KeyValueMap,
    Pattern,
    Opaque,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Scalar => "scalar",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Timestamp => "timestamp",
            Kind::UniqueSet => "unique-set",
            Kind::KeyValueMap => "key-value map",
            Kind::Pattern => "pattern",
            Kind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Rc::new(Node::new(items.into_iter().collect())))
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Object(Rc::new(Node::new(map)))
    }

    pub fn date(instant: DateTime<Utc>) -> Self {
        Value::Date(Rc::new(Node::new(instant)))
    }

    pub fn set(members: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(Rc::new(Node::new(members.into_iter().collect())))
    }

    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(Rc::new(Node::new(entries.into_iter().collect())))
    }

    /// # Errors
    ///
    /// See [`Pattern::new`].
    pub fn pattern(source: &str, flags: &str) -> Result<Self, ValueError> {
        Ok(Value::Pattern(Rc::new(Node::new(Pattern::new(source, flags)?))))
    }

    pub fn opaque<T: Any>(value: T) -> Self {
        Value::Opaque(Rc::new(value))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_) => Kind::Scalar,
            Value::Array(_) => Kind::Sequence,
            Value::Object(_) => Kind::Mapping,
            Value::Date(_) => Kind::Timestamp,
            Value::Set(_) => Kind::UniqueSet,
            Value::Map(_) => Kind::KeyValueMap,
            Value::Pattern(_) => Kind::Pattern,
            Value::Opaque(_) => Kind::Opaque,
        }
    }

    /// Address of the node behind a composite value; `None` for scalars.
    pub(crate) fn node_id(&self) -> Option<*const ()> {
        match self {
            Value::Array(n) => Some(Rc::as_ptr(n) as *const ()),
            Value::Object(n) => Some(Rc::as_ptr(n) as *const ()),
            Value::Date(n) => Some(Rc::as_ptr(n) as *const ()),
            Value::Set(n) => Some(Rc::as_ptr(n) as *const ()),
            Value::Map(n) => Some(Rc::as_ptr(n) as *const ()),
            Value::Pattern(n) => Some(Rc::as_ptr(n) as *const ()),
            Value::Opaque(rc) => Some(Rc::as_ptr(rc) as *const ()),
            _ => None,
        }
    }

    /// Reference identity. Only composite and opaque values have one.
    ///
    /// ```
    /// use plainkit_value::Value;
    ///
    /// let a = Value::array([]);
    /// assert!(a.same_identity(&a.clone()));
    /// assert!(!a.same_identity(&Value::array([])));
    /// assert!(!Value::from(1).same_identity(&Value::from(1)));
    /// ```
    pub fn same_identity(&self, other: &Value) -> bool {
        match (self.node_id(), other.node_id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// SameValueZero comparison used for set membership and map keys.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            _ => self.same_identity(other),
        }
    }

    /// Whether the value rejects mutation.
    ///
    /// Scalars are immutable and always report `true`. Opaque values cannot
    /// be locked and always report `false`.
    pub fn is_frozen(&self) -> bool {
        match self {
            Value::Array(n) => n.is_frozen(),
            Value::Object(n) => n.is_frozen(),
            Value::Date(n) => n.is_frozen(),
            Value::Set(n) => n.is_frozen(),
            Value::Map(n) => n.is_frozen(),
            Value::Pattern(n) => n.is_frozen(),
            Value::Opaque(_) => false,
            _ => true,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&Rc<Node<DateTime<Utc>>>> {
        match self {
            Value::Date(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&Rc<Node<ValueSet>>> {
        match self {
            Value::Set(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Rc<Node<ValueMap>>> {
        match self {
            Value::Map(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Rc<Node<Pattern>>> {
        match self {
            Value::Pattern(n) => Some(n),
            _ => None,
        }
    }

    pub fn downcast_opaque<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Opaque(rc) => rc.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Reads a property of a keyed mapping. The returned value shares
    /// identity with the stored one.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_object()?.borrow().get(key).cloned()
    }

    /// Reads an element of a sequence.
    pub fn at(&self, index: usize) -> Option<Value> {
        self.as_array()?.borrow().get(index).cloned()
    }
}

/// Deep structural equality.
///
/// Nodes that share identity are equal without descending. A pair of nodes
/// met again while it is already being compared counts as equal, so two
/// isomorphic cyclic graphs compare equal instead of recursing forever.
/// Timestamps compare by instant and patterns by source and flags; sets and
/// maps compare entries in insertion order. Opaque values are equal only to
/// themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_eq(self, other, &mut HashSet::new())
    }
}

fn deep_eq(a: &Value, b: &Value, pairs: &mut HashSet<(*const (), *const ())>) -> bool {
    if a.same_identity(b) {
        return true;
    }
    if let (Some(x), Some(y)) = (a.node_id(), b.node_id()) {
        if !pairs.insert((x, y)) {
            return true;
        }
    }
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Date(a), Value::Date(b)) => *a.borrow() == *b.borrow(),
        (Value::Pattern(a), Value::Pattern(b)) => *a.borrow() == *b.borrow(),
        (Value::Array(a), Value::Array(b)) => {
            let (a, b) = (a.borrow(), b.borrow());
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| deep_eq(x, y, pairs))
        }
        (Value::Object(a), Value::Object(b)) => {
            let (a, b) = (a.borrow(), b.borrow());
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && deep_eq(va, vb, pairs))
        }
        (Value::Set(a), Value::Set(b)) => {
            let (a, b) = (a.borrow(), b.borrow());
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| deep_eq(x, y, pairs))
        }
        (Value::Map(a), Value::Map(b)) => {
            let (a, b) = (a.borrow(), b.borrow());
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|((ka, va), (kb, vb))| deep_eq(ka, kb, pairs) && deep_eq(va, vb, pairs))
        }
        _ => false,
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ancestors = RefCell::new(Vec::new());
        Tracked {
            value: self,
            ancestors: &ancestors,
        }
        .fmt(f)
    }
}

/// Debug view that prints `<cycle>` for a node already being printed
/// further up.
struct Tracked<'a> {
    value: &'a Value,
    ancestors: &'a RefCell<Vec<*const ()>>,
}

impl Tracked<'_> {
    fn child<'b>(&'b self, value: &'b Value) -> Tracked<'b> {
        Tracked {
            value,
            ancestors: self.ancestors,
        }
    }
}

impl fmt::Debug for Tracked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.value.node_id();
        if let Some(id) = id {
            if self.ancestors.borrow().contains(&id) {
                return f.write_str("<cycle>");
            }
            self.ancestors.borrow_mut().push(id);
        }
        let result = match self.value {
            Value::Undefined => f.write_str("Undefined"),
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Array(n) => f
                .debug_list()
                .entries(n.borrow().iter().map(|v| self.child(v)))
                .finish(),
            Value::Object(n) => f
                .debug_map()
                .entries(n.borrow().iter().map(|(k, v)| (k, self.child(v))))
                .finish(),
            Value::Date(n) => write!(f, "Date({})", n.borrow().to_rfc3339()),
            Value::Set(n) => f
                .debug_set()
                .entries(n.borrow().iter().map(|v| self.child(v)))
                .finish(),
            Value::Map(n) => f
                .debug_map()
                .entries(n.borrow().iter().map(|(k, v)| (self.child(k), self.child(v))))
                .finish(),
            Value::Pattern(n) => write!(f, "{:?}", *n.borrow()),
            Value::Opaque(_) => f.write_str("Opaque"),
        };
        if id.is_some() {
            self.ancestors.borrow_mut().pop();
        }
        result
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::date(instant)
    }
}

impl From<Pattern> for Value {
    fn from(pattern: Pattern) -> Self {
        Value::Pattern(Rc::new(Node::new(pattern)))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Value::Null.kind(), Kind::Scalar);
        assert_eq!(Value::from("s").kind(), Kind::Scalar);
        assert_eq!(Value::array([]).kind(), Kind::Sequence);
        assert_eq!(Value::object::<&str>([]).kind(), Kind::Mapping);
        assert_eq!(Value::date(Utc::now()).kind(), Kind::Timestamp);
        assert_eq!(Value::set([]).kind(), Kind::UniqueSet);
        assert_eq!(Value::map([]).kind(), Kind::KeyValueMap);
        assert_eq!(Value::pattern("a", "").unwrap().kind(), Kind::Pattern);
        assert_eq!(Value::opaque(3u8).kind(), Kind::Opaque);
    }

    #[test]
    fn test_deep_equality_ignores_identity() {
        let a = Value::object([("k", Value::array([Value::from(1), Value::Null]))]);
        let b = Value::object([("k", Value::array([Value::from(1), Value::Null]))]);
        assert_eq!(a, b);
        assert!(!a.same_identity(&b));
    }

    #[test]
    fn test_kinds_do_not_cross_compare() {
        let arr = Value::array([]);
        let set = Value::set([]);
        let obj = Value::object::<&str>([]);
        let map = Value::map([]);
        assert_ne!(arr, set);
        assert_ne!(obj, map);
    }

    #[test]
    fn test_opaque_equality_is_identity() {
        let a = Value::opaque(String::from("x"));
        assert_eq!(a, a.clone());
        assert_ne!(a, Value::opaque(String::from("x")));
        assert_eq!(a.downcast_opaque::<String>().map(String::as_str), Some("x"));
    }

    #[test]
    fn test_scalars_report_frozen() {
        assert!(Value::from(1).is_frozen());
        assert!(!Value::array([]).is_frozen());
        assert!(!Value::opaque(()).is_frozen());
    }

    #[test]
    fn test_get_and_at() {
        let v = Value::object([("list", Value::array([Value::from("a")]))]);
        let list = v.get("list").unwrap();
        assert!(list.same_identity(&v.get("list").unwrap()));
        assert_eq!(list.at(0), Some(Value::from("a")));
        assert_eq!(list.at(1), None);
        assert_eq!(v.get("missing"), None);
    }

    fn self_referencing(name: &str) -> Value {
        let v = Value::object([("name", Value::from(name))]);
        v.as_object()
            .unwrap()
            .update(|map| map.insert("me".into(), v.clone()))
            .unwrap();
        v
    }

    #[test]
    fn test_cyclic_graphs_compare() {
        let a = self_referencing("loop");
        let b = self_referencing("loop");
        assert_eq!(a, b);
        assert_ne!(a, self_referencing("other"));
    }

    #[test]
    fn test_cyclic_debug_marks_cycle() {
        let v = self_referencing("loop");
        let text = format!("{v:?}");
        assert_eq!(text, r#"{"me": <cycle>, "name": String("loop")}"#);
    }

    #[test]
    fn test_shared_node_is_not_a_cycle_in_debug() {
        let leaf = Value::array([Value::from(1)]);
        let v = Value::array([leaf.clone(), leaf]);
        assert_eq!(format!("{v:?}"), "[[Number(1)], [Number(1)]]");
    }

    #[test]
    fn test_option_into_value() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }
}
