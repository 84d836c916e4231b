use std::fmt::{self, Debug};
use std::marker::PhantomData;

use crate::tree::{Search, SearchTree};
use crate::types::{default_comparator, Comparator, PositionalTree};
use crate::util::{find_or_next_higher, find_or_next_lower, height};

/// Rebalancing callbacks a [`TreeMap`] runs after each structural change.
///
/// Both hooks are called exactly once per structural mutation, before the
/// mutation returns. Value updates of an existing key are not structural and
/// trigger neither.
pub trait RebalanceHooks {
    /// `p` is the leaf that was just attached.
    fn after_insert<T: PositionalTree + ?Sized>(tree: &mut T, p: u32);

    /// `parent` is the parent of the position vacated by the removal.
    fn after_remove<T: PositionalTree + ?Sized>(tree: &mut T, parent: Option<u32>);
}

/// Hooks that do nothing: the map degrades to a plain search tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRebalance;

impl RebalanceHooks for NoRebalance {
    fn after_insert<T: PositionalTree + ?Sized>(_tree: &mut T, _p: u32) {}

    fn after_remove<T: PositionalTree + ?Sized>(_tree: &mut T, _parent: Option<u32>) {}
}

/// Ordered map over a [`SearchTree`], kept in shape by the hook set `H`.
pub struct TreeMap<K, V, H, C = Comparator<K>>
where
    H: RebalanceHooks,
    C: Fn(&K, &K) -> i32,
{
    tree: SearchTree<K, V, C>,
    _hooks: PhantomData<H>,
}

impl<K, V, H> TreeMap<K, V, H, Comparator<K>>
where
    K: PartialOrd,
    H: RebalanceHooks,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V, H> Default for TreeMap<K, V, H, Comparator<K>>
where
    K: PartialOrd,
    H: RebalanceHooks,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, H, C> TreeMap<K, V, H, C>
where
    H: RebalanceHooks,
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: SearchTree::with_comparator(comparator),
            _hooks: PhantomData,
        }
    }

    /// The underlying search tree, for diagnostics and printing.
    pub fn tree(&self) -> &SearchTree<K, V, C> {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Inserts or updates `key`. Returns the previous value if the key was
    /// already present, in which case the tree shape is left untouched.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.tree.search(&key) {
            Search::Found(i) => Some(std::mem::replace(self.tree.value_mut(i), value)),
            Search::Vacant { parent, left } => {
                let p = self.tree.attach(parent, left, key, value);
                H::after_insert(&mut self.tree, p);
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.find(key).map(|i| self.tree.value(i))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = self.tree.find(key)?;
        Some(self.tree.value_mut(i))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.find(key).is_some()
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let pos = self.tree.find(key)?;
        let detached = self.tree.detach(pos);
        H::after_remove(&mut self.tree, detached.parent);
        let (_key, value) = self.tree.release(detached.pos);
        Some(value)
    }

    fn entry(&self, pos: Option<u32>) -> Option<(&K, &V)> {
        pos.map(|i| (self.tree.key(i), self.tree.value(i)))
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.entry(self.tree.first())
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.entry(self.tree.last())
    }

    /// Entry with the greatest key less than or equal to `key`.
    pub fn floor_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.entry(find_or_next_lower(
            self.tree.arena(),
            self.tree.root(),
            key,
            |n| &n.k,
            |a, b| (self.tree.comparator())(a, b),
        ))
    }

    /// Entry with the least key greater than or equal to `key`.
    pub fn ceiling_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.entry(find_or_next_higher(
            self.tree.arena(),
            self.tree.root(),
            key,
            |n| &n.k,
            |a, b| (self.tree.comparator())(a, b),
        ))
    }

    pub fn root_key(&self) -> Option<&K> {
        self.tree.root().map(|i| self.tree.key(i))
    }

    /// Structural height; 0 for an empty map.
    pub fn height(&self) -> usize {
        height(self.tree.arena(), self.tree.root())
    }

    /// In-order entries.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: &self.tree,
            curr: self.tree.first(),
        }
    }

    /// In-order keys.
    pub fn key_set(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<K, V, H, C> Debug for TreeMap<K, V, H, C>
where
    K: Debug,
    V: Debug,
    H: RebalanceHooks,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// In-order iterator over a [`TreeMap`].
pub struct Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'a SearchTree<K, V, C>,
    curr: Option<u32>,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = self.tree.next(i);
        Some((self.tree.key(i), self.tree.value(i)))
    }
}
