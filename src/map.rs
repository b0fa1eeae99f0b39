//! Ordered map type for TOML tables.
//!
//! [`TomlMap`] wraps an [`IndexMap`] so keys keep the order they were
//! inserted in, which a round-trip-preserving document layer relies on.
//! Tables never encode to a single literal; they exist so callers can hold a
//! whole value tree in one [`Value`](crate::Value).
//!
//! ```rust
//! use toml_literal::{TomlMap, Value};
//!
//! let mut map = TomlMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("port".to_string(), Value::from(8080));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["name", "port"]);
//! ```

use crate::Value;
use indexmap::IndexMap;

/// An insertion-ordered map of string keys to TOML values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TomlMap(IndexMap<String, Value>);

impl TomlMap {
    #[must_use]
    pub fn new() -> Self {
        TomlMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TomlMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for TomlMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for TomlMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        TomlMap(IndexMap::from_iter(iter))
    }
}
