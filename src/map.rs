//! Ordered map type for object named members.
//!
//! This module provides [`LuaMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for the named members of a
//! [`LuaObject`](crate::LuaObject). Member order is significant: rendering
//! emits members in the order they were inserted, and re-rendering the same
//! tree must produce byte-identical output.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: members render in a consistent order
//! - **Iteration order**: members are iterated in insertion order
//! - **Compatibility**: easier testing and debugging with predictable output
//!
//! ## Examples
//!
//! ```rust
//! use luon::{LuaMap, LuaValue};
//!
//! let mut map = LuaMap::new();
//! map.insert("name".to_string(), LuaValue::from("Alice"));
//! map.insert("age".to_string(), LuaValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string names to Lua values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// which is what makes rendering a pure function of the value tree.
///
/// # Examples
///
/// ```rust
/// use luon::{LuaMap, LuaValue};
///
/// let mut map = LuaMap::new();
/// map.insert("first".to_string(), LuaValue::from(1));
/// map.insert("second".to_string(), LuaValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LuaMap(IndexMap<String, crate::LuaValue>);

impl LuaMap {
    /// Creates an empty `LuaMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::LuaMap;
    ///
    /// let map = LuaMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        LuaMap(IndexMap::new())
    }

    /// Creates an empty `LuaMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LuaMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a name-value pair into the map.
    ///
    /// If the map already contained this name, the old value is returned and
    /// the member keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::{LuaMap, LuaValue};
    ///
    /// let mut map = LuaMap::new();
    /// assert!(map.insert("key".to_string(), LuaValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), LuaValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, name: String, value: crate::LuaValue) -> Option<crate::LuaValue> {
        self.0.insert(name, value)
    }

    /// Returns a reference to the value corresponding to the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&crate::LuaValue> {
        self.0.get(name)
    }

    /// Returns the number of members in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the names of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::LuaValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::LuaValue> {
        self.0.values()
    }

    /// Returns an iterator over the name-value pairs of the map, in insertion
    /// order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::LuaValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::LuaValue>> for LuaMap {
    fn from(map: HashMap<String, crate::LuaValue>) -> Self {
        LuaMap(map.into_iter().collect())
    }
}

impl From<LuaMap> for HashMap<String, crate::LuaValue> {
    fn from(map: LuaMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for LuaMap {
    type Item = (String, crate::LuaValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::LuaValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::LuaValue)> for LuaMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::LuaValue)>>(iter: T) -> Self {
        LuaMap(IndexMap::from_iter(iter))
    }
}
