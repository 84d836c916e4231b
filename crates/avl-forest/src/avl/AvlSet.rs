use std::fmt::Debug;

use crate::error::InvariantViolation;
use crate::types::{default_comparator, Comparator};

use super::avl_map::AvlMap;

/// AVL tree set backed by [`AvlMap<T, ()>`].
pub struct AvlSet<T, C = Comparator<T>>
where
    C: Fn(&T, &T) -> i32,
{
    inner: AvlMap<T, (), C>,
}

impl<T> AvlSet<T, Comparator<T>>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for AvlSet<T, Comparator<T>>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: AvlMap::with_comparator(comparator),
        }
    }

    /// Returns `true` if `value` was not present yet.
    pub fn add(&mut self, value: T) -> bool {
        if self.inner.contains_key(&value) {
            return false;
        }
        self.inner.put(value, ());
        true
    }

    pub fn remove(&mut self, value: &T) -> bool {
        self.inner.remove(value).is_some()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains_key(value)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn first(&self) -> Option<&T> {
        self.inner.first_entry().map(|(k, _)| k)
    }

    pub fn last(&self) -> Option<&T> {
        self.inner.last_entry().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.inner.key_set()
    }

    pub fn assert_valid(&self) -> Result<(), InvariantViolation>
    where
        T: Debug,
    {
        self.inner.assert_valid()
    }
}
