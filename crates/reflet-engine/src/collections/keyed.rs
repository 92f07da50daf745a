//! Ordered keyed collection
//!
//! Values are stored in a hash map under a key derived from each value by a
//! [`KeySelector`]. A parallel key sequence records insertion order for
//! positional access. Both structures are always updated together.
//!
//! Two orders are exposed on purpose:
//! - [`KeyedCollection::iter`] follows the hash map and is unspecified
//! - [`KeyedCollection::keys`], [`KeyedCollection::get_at`] and
//!   [`KeyedCollection::to_vec`] follow insertion order

use rustc_hash::FxHashMap;
use std::any::Any;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

/// Derives the key of a value
///
/// `None` means the value has no key and can never be stored. Any
/// `Fn(&V) -> Option<K>` is a selector.
pub trait KeySelector<K, V> {
    fn key_of(&self, item: &V) -> Option<K>;
}

impl<K, V, F> KeySelector<K, V> for F
where
    F: Fn(&V) -> Option<K>,
{
    fn key_of(&self, item: &V) -> Option<K> {
        self(item)
    }
}

/// Collection of values with unique derived keys
pub struct KeyedCollection<K, V, S> {
    selector: S,
    entries: FxHashMap<K, V>,
    order: Vec<K>,
}

impl<K, V, S> KeyedCollection<K, V, S>
where
    K: Eq + Hash + Clone,
    S: KeySelector<K, V>,
{
    /// Create an empty collection using `selector` to derive keys
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            entries: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Add a value
    ///
    /// Returns false, leaving the collection untouched, when the value has
    /// no key or its key is already present.
    pub fn add(&mut self, item: V) -> bool {
        let Some(key) = self.selector.key_of(&item) else {
            return false;
        };
        if self.entries.contains_key(&key) {
            return false;
        }
        self.order.push(key.clone());
        self.entries.insert(key, item);
        true
    }

    /// Add every value, returning true if at least one was added
    pub fn add_all(&mut self, items: impl IntoIterator<Item = V>) -> bool {
        items
            .into_iter()
            .fold(false, |added, item| self.add(item) | added)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Get the value at `index` in insertion order
    pub fn get_at(&self, index: usize) -> Option<&V> {
        self.order.get(index).and_then(|key| self.entries.get(key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Check whether a value with the same key is stored
    pub fn contains(&self, item: &V) -> bool {
        self.selector
            .key_of(item)
            .is_some_and(|key| self.contains_key(&key))
    }

    /// Check every value; false for an empty input
    pub fn contains_all(&self, items: &[V]) -> bool {
        !items.is_empty() && items.iter().all(|item| self.contains(item))
    }

    /// Remove the value with the same key as `item`
    pub fn remove(&mut self, item: &V) -> bool {
        match self.selector.key_of(item) {
            Some(key) => self.remove_by_key(&key),
            None => false,
        }
    }

    pub fn remove_by_key(&mut self, key: &K) -> bool {
        if self.entries.remove(key).is_none() {
            return false;
        }
        self.order.retain(|k| k != key);
        true
    }

    /// Remove the value at `index` in insertion order
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.order.len() {
            return false;
        }
        let key = self.order.remove(index);
        self.entries.remove(&key);
        true
    }

    /// Remove every value
    ///
    /// False for an empty input; otherwise true only if each value was
    /// present and removed. All removals are attempted either way.
    pub fn remove_all(&mut self, items: &[V]) -> bool {
        if items.is_empty() {
            return false;
        }
        items
            .iter()
            .fold(true, |removed, item| self.remove(item) & removed)
    }

    /// Keep only values found in `reference`
    ///
    /// An empty reference clears the collection and returns true. Otherwise
    /// returns true when every value scheduled for removal was removed, and
    /// false when nothing had to be removed.
    pub fn retain_all(&mut self, reference: &[V]) -> bool
    where
        V: PartialEq,
    {
        if reference.is_empty() {
            self.clear();
            return true;
        }
        let doomed: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, value)| !reference.contains(value))
            .map(|(key, _)| key.clone())
            .collect();
        if doomed.is_empty() {
            return false;
        }
        doomed
            .iter()
            .fold(true, |removed, key| self.remove_by_key(key) & removed)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over values in hash map order
    pub fn iter(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> &[K] {
        &self.order
    }

    /// Clone the values out in insertion order
    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key))
            .cloned()
            .collect()
    }
}

impl<K, V, S> KeyedCollection<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Any,
    S: KeySelector<K, V>,
{
    /// Membership test for a value of any runtime type
    ///
    /// Values of another type than `V` are never contained.
    pub fn contains_any(&self, item: &dyn Any) -> bool {
        item.downcast_ref::<V>()
            .is_some_and(|value| self.contains(value))
    }
}

impl<'a, K, V, S> IntoIterator for &'a KeyedCollection<K, V, S>
where
    K: Eq + Hash + Clone,
    S: KeySelector<K, V>,
{
    type Item = &'a V;
    type IntoIter = hash_map::Values<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V, S> fmt::Debug for KeyedCollection<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedCollection")
            .field("keys", &self.order)
            .field("len", &self.entries.len())
            .finish()
    }
}
