//! Node and tree trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena and every link is an `Option<u32>`
//! index into it. `None` stands for the external (absent) child, whose
//! height is conventionally 0.

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by map/tree structures unless another one is given.
///
/// Returns a negative number, zero or a positive number when the first key
/// orders before, equal to or after the second. Any `Fn(&K, &K) -> i32`
/// closure can stand in through `with_comparator`.
pub type Comparator<K> = fn(&K, &K) -> i32;

/// Comparator derived from `PartialOrd`.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Key/value node interface used by map-like structures.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
}

/// A node carrying one auxiliary integer next to its entry.
pub trait Augmented: Node {
    fn aux(&self) -> i32;
    fn set_aux(&mut self, aux: i32);
}

/// Position-based view of a linked binary tree.
///
/// This is everything the balance engine needs from the tree it repairs:
/// navigation, the auxiliary slot and a trinode restructuring primitive.
/// Positions are arena indices; an absent child is `None`.
pub trait PositionalTree {
    fn root(&self) -> Option<u32>;
    fn parent(&self, p: u32) -> Option<u32>;
    fn left(&self, p: u32) -> Option<u32>;
    fn right(&self, p: u32) -> Option<u32>;
    fn aux(&self, p: u32) -> i32;
    fn set_aux(&mut self, p: u32, aux: i32);

    /// Rotates `x`, its parent and its grandparent so that the median of the
    /// three takes the grandparent's place. Returns that new local root.
    fn restructure(&mut self, x: u32) -> u32;

    fn is_root(&self, p: u32) -> bool {
        self.parent(p).is_none()
    }

    fn is_internal(&self, p: Option<u32>) -> bool {
        p.is_some()
    }

    fn is_external(&self, p: Option<u32>) -> bool {
        p.is_none()
    }
}
