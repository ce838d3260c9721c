use super::Value;
use crate::types::{MapKey, NodeId};
use hashbrown::HashMap as FastHashMap;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MapInner {
    entries: Vec<(MapKey, Value)>,
    index: FastHashMap<MapKey, usize>,
}

/// Shared keyed container. Keys iterate in insertion order.
#[derive(Clone, Default)]
pub struct Map(Rc<RefCell<MapInner>>);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Rc::new(RefCell::new(MapInner {
            entries: Vec::with_capacity(capacity),
            index: FastHashMap::with_capacity(capacity),
        })))
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<MapKey>,
        V: Into<Value>,
    {
        let map = Self::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        map
    }

    /// Inserts or overwrites `key`. An overwritten key keeps its position.
    pub fn insert<K, V>(&self, key: K, value: V) -> Option<Value>
    where
        K: Into<MapKey>,
        V: Into<Value>,
    {
        let key = key.into();
        let value = value.into();
        let mut inner = self.0.borrow_mut();

        if let Some(&pos) = inner.index.get(&key) {
            return Some(std::mem::replace(&mut inner.entries[pos].1, value));
        }

        let pos = inner.entries.len();
        inner.entries.push((key.clone(), value));
        inner.index.insert(key, pos);
        None
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let inner = self.0.borrow();
        inner
            .index
            .get(key)
            .map(|&pos| inner.entries[pos].1.clone())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().entries.is_empty()
    }

    pub fn keys(&self) -> Vec<MapKey> {
        self.0
            .borrow()
            .entries
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn entries(&self) -> Vec<(MapKey, Value)> {
        self.0.borrow().entries.clone()
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        Rc::as_ptr(&self.0) as *const () as NodeId
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Map) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Shallow copy with the listed keys rebound. Other values keep their
    /// handles, so untouched subtrees are shared with `self`.
    pub(crate) fn with_replaced(&self, replaced: &[(MapKey, Value)]) -> Map {
        let inner = self.0.borrow();
        let mut entries = inner.entries.clone();

        for (key, value) in replaced {
            if let Some(&pos) = inner.index.get(key) {
                entries[pos].1 = value.clone();
            }
        }

        Map(Rc::new(RefCell::new(MapInner {
            entries,
            index: inner.index.clone(),
        })))
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<MapKey>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrite_keeps_position() {
        let map = Map::from_entries([("a", 1), ("b", 2), ("c", 3)]);
        let previous = map.insert("b", 20);

        assert_eq!(previous, Some(Value::from(2)));
        let keys: Vec<String> = map.keys().iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(map.get("b"), Some(Value::from(20)));
    }

    #[test]
    fn with_replaced_leaves_original_untouched() {
        let inner = Map::from_entries([("x", 1)]);
        let map = Map::from_entries([("keep", Value::Map(inner.clone())), ("swap", Value::from("old"))]);

        let copy = map.with_replaced(&[("swap".into(), Value::from("new"))]);

        assert!(!copy.ptr_eq(&map));
        assert_eq!(map.get("swap"), Some(Value::from("old")));
        assert_eq!(copy.get("swap"), Some(Value::from("new")));
        match copy.get("keep") {
            Some(Value::Map(shared)) => assert!(shared.ptr_eq(&inner)),
            other => panic!("expected shared map, got {other:?}"),
        }
    }
}
