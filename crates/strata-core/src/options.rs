//! # Option Maps — Immutable Options and Meta
//!
//! [`OptionMap`] is the immutable `Symbol → Value` mapping attached to every
//! type, once as construction-time options and once as descriptive meta.
//!
//! ## Invariants
//!
//! - No operation mutates a map in place. `set`, `merge`, and `without`
//!   return a new map and leave the receiver untouched (copy-on-write).
//! - Every empty map produced by this module shares one process-wide
//!   allocation; an unused options/meta field costs a reference count.
//! - Equality and hashing are by value, never by allocation identity.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{Symbol, Value};

static EMPTY: Lazy<Arc<BTreeMap<Symbol, Value>>> = Lazy::new(|| Arc::new(BTreeMap::new()));

/// Immutable key-value annotations keyed by symbol.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionMap(Arc<BTreeMap<Symbol, Value>>);

impl OptionMap {
    /// The shared empty map.
    pub fn new() -> Self {
        Self(Arc::clone(&EMPTY))
    }

    fn from_map(map: BTreeMap<Symbol, Value>) -> Self {
        if map.is_empty() {
            Self::new()
        } else {
            Self(Arc::new(map))
        }
    }

    /// Build a map from key-value pairs. Later duplicates win.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Symbol>,
        V: Into<Value>,
    {
        Self::from_map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up `key`, falling back to `default` when absent.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        match self.0.get(key) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Return a new map with `key` set to `value`.
    pub fn set(&self, key: impl Into<Symbol>, value: impl Into<Value>) -> Self {
        let mut map = (*self.0).clone();
        map.insert(key.into(), value.into());
        Self(Arc::new(map))
    }

    /// Return a new map with the entries of `other` layered over `self`.
    pub fn merge(&self, other: &OptionMap) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut map = (*self.0).clone();
        map.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(Arc::new(map))
    }

    /// Return a new map without `key`.
    pub fn without(&self, key: &str) -> Self {
        if !self.contains_key(key) {
            return self.clone();
        }
        let mut map = (*self.0).clone();
        map.remove(key);
        Self::from_map(map)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Value)> {
        self.0.iter()
    }

    /// Whether this map is the process-wide shared empty instance.
    pub fn is_shared_empty(&self) -> bool {
        Arc::ptr_eq(&self.0, &EMPTY)
    }

    /// Convert to a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.as_str().to_string(), v.to_json()))
                .collect(),
        )
    }
}

impl Default for OptionMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OptionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Into<Symbol>, V: Into<Value>> FromIterator<(K, V)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl Serialize for OptionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k.as_str(), v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OptionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_pairs(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_shared_empty() {
        let a = OptionMap::new();
        let b = OptionMap::default();
        assert!(a.is_shared_empty());
        assert!(b.is_shared_empty());
        assert!(a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn set_is_copy_on_write() {
        let empty = OptionMap::new();
        let one = empty.set("name", "age");
        assert!(empty.is_empty());
        assert!(empty.is_shared_empty());
        assert_eq!(one.get("name"), Some(&Value::from("age")));

        let two = one.set("name", "years");
        assert_eq!(one.get("name"), Some(&Value::from("age")));
        assert_eq!(two.get("name"), Some(&Value::from("years")));
    }

    #[test]
    fn get_or_falls_back() {
        let opts = OptionMap::from_pairs([("strict", true)]);
        assert_eq!(opts.get_or("strict", false), Value::from(true));
        assert_eq!(opts.get_or("missing", 7), Value::from(7));
    }

    #[test]
    fn merge_is_right_biased() {
        let left = OptionMap::from_pairs([("a", 1), ("b", 2)]);
        let right = OptionMap::from_pairs([("b", 3), ("c", 4)]);
        let merged = left.merge(&right);
        assert_eq!(merged, OptionMap::from_pairs([("a", 1), ("b", 3), ("c", 4)]));
        assert_eq!(left.len(), 2);
    }

    #[test]
    fn without_returns_to_shared_empty() {
        let opts = OptionMap::new().set("only", 1);
        let stripped = opts.without("only");
        assert!(stripped.is_shared_empty());
        assert_eq!(opts.len(), 1);
    }

    #[test]
    fn equality_is_by_value() {
        let a = OptionMap::new().set("x", 1).set("y", 2);
        let b = OptionMap::from_pairs([("y", 2), ("x", 1)]);
        assert_eq!(a, b);
        assert!(!a.is_shared_empty());
    }

    #[test]
    fn serializes_as_object() {
        let opts = OptionMap::from_pairs([("label", Value::from("id")), ("flag", Value::symbol("on"))]);
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json, serde_json::json!({"flag": "on", "label": "id"}));
        assert_eq!(opts.to_json(), json);

        let back: OptionMap = serde_json::from_value(serde_json::json!({"n": 3})).unwrap();
        assert_eq!(back.get("n"), Some(&Value::from(3)));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// `set` never changes the receiver.
        #[test]
        fn set_never_mutates_receiver(
            entries in prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..6),
            key in "[a-z]{1,6}",
            value in any::<i64>(),
        ) {
            let original = OptionMap::from_pairs(entries.clone());
            let snapshot = original.clone();
            let updated = original.set(key.as_str(), value);
            prop_assert_eq!(&original, &snapshot);
            prop_assert_eq!(original.len(), entries.len());
            prop_assert_eq!(updated.get(&key), Some(&Value::from(value)));
        }

        /// Merging with the empty map is the identity on either side.
        #[test]
        fn merge_empty_identity(entries in prop::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..6)) {
            let map = OptionMap::from_pairs(entries);
            prop_assert_eq!(map.merge(&OptionMap::new()), map.clone());
            prop_assert_eq!(OptionMap::new().merge(&map), map);
        }
    }
}
