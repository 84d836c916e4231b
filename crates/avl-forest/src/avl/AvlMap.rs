use std::fmt::{self, Debug, Display};

use crate::data_types::{Iter, TreeMap};
use crate::error::InvariantViolation;
use crate::print::grid;
use crate::tree::SearchTree;
use crate::types::{default_comparator, Comparator};

use super::diagnostics::sanity_check;
use super::util::AvlBalance;

/// Ordered map kept height-balanced after every insertion and removal.
///
/// Lookups, insertions and removals are O(log n).
pub struct AvlMap<K, V, C = Comparator<K>>
where
    C: Fn(&K, &K) -> i32,
{
    inner: TreeMap<K, V, AvlBalance, C>,
}

impl<K, V> AvlMap<K, V, Comparator<K>>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for AvlMap<K, V, Comparator<K>>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: TreeMap::with_comparator(comparator),
        }
    }

    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.inner.put(key, value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.inner.first_entry()
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.inner.last_entry()
    }

    pub fn floor_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.inner.floor_entry(key)
    }

    pub fn ceiling_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.inner.ceiling_entry(key)
    }

    pub fn root_key(&self) -> Option<&K> {
        self.inner.root_key()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn iter(&self) -> Iter<'_, K, V, C> {
        self.inner.iter()
    }

    pub fn key_set(&self) -> impl Iterator<Item = &K> + '_ {
        self.inner.key_set()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.inner.values()
    }

    pub fn tree(&self) -> &SearchTree<K, V, C> {
        self.inner.tree()
    }

    /// Checks links, cached heights, balance and key order.
    pub fn assert_valid(&self) -> Result<(), InvariantViolation>
    where
        K: Debug,
        V: Debug,
    {
        sanity_check(self.inner.tree())
    }

    /// Keys laid out on a 2D character grid.
    pub fn print_tree(&self) -> String
    where
        K: Display,
    {
        grid::render(self.inner.tree())
    }

    /// Indented node-by-node dump with cached heights.
    pub fn dump(&self) -> String
    where
        K: Debug,
        V: Debug,
    {
        self.inner.tree().print()
    }
}

impl<K, V, C> Debug for AvlMap<K, V, C>
where
    K: Debug,
    V: Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

impl<K, V> FromIterator<(K, V)> for AvlMap<K, V, Comparator<K>>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.put(k, v);
        }
        map
    }
}
