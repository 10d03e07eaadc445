//! Insertion-ordered set and map keyed by arbitrary [`Value`]s.
//!
//! Membership uses SameValueZero: scalars compare by value (`NaN` equals
//! `NaN`, `0.0` equals `-0.0`) and composites compare by identity.

use crate::Value;

/// A collection of distinct values.
#[derive(Debug, Clone, Default)]
pub struct ValueSet {
    items: Vec<Value>,
}

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member. Returns `false` if an equal member was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.items.iter().any(|item| item.same_value_zero(value))
    }

    pub fn remove(&mut self, value: &Value) -> bool {
        match self.items.iter().position(|item| item.same_value_zero(value)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A key-to-value map whose keys may be any [`Value`].
#[derive(Debug, Clone, Default)]
pub struct ValueMap {
    entries: Vec<(Value, Value)>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry. A replaced entry keeps its position and
    /// the previous value is returned.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.position(key).is_some()
    }

    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        self.position(key).map(|index| self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.same_value_zero(key))
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_dedupes_scalars() {
        let set: ValueSet = [Value::from(1), Value::from(1.0), Value::from("1")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_set_nan_and_signed_zero() {
        let mut set = ValueSet::new();
        assert!(set.insert(Value::from(f64::NAN)));
        assert!(!set.insert(Value::from(f64::NAN)));
        assert!(set.insert(Value::from(0.0)));
        assert!(!set.insert(Value::from(-0.0)));
    }

    #[test]
    fn test_set_composites_by_identity() {
        let a = Value::array([Value::from(1)]);
        let b = Value::array([Value::from(1)]);
        let mut set = ValueSet::new();
        assert!(set.insert(a.clone()));
        assert!(set.insert(b));
        assert!(!set.insert(a.clone()));
        assert!(set.remove(&a));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_map_replace_keeps_position() {
        let mut map = ValueMap::new();
        map.insert(Value::from("a"), Value::from(1));
        map.insert(Value::from("b"), Value::from(2));
        assert_eq!(map.insert(Value::from("a"), Value::from(3)), Some(Value::from(1)));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![Value::from("a"), Value::from("b")]);
        assert_eq!(map.get(&Value::from("a")), Some(&Value::from(3)));
    }

    #[test]
    fn test_map_non_string_keys() {
        let key = Value::object([("id", Value::from(7))]);
        let mut map = ValueMap::new();
        map.insert(key.clone(), Value::from(true));
        map.insert(Value::from(7), Value::from(false));
        assert_eq!(map.get(&key), Some(&Value::from(true)));
        assert!(!map.contains_key(&Value::object([("id", Value::from(7))])));
        assert_eq!(map.remove(&Value::from(7)), Some(Value::from(false)));
        assert_eq!(map.len(), 1);
    }
}
