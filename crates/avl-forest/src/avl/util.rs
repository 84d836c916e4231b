//! Height-slot AVL rebalancing.
//!
//! The engine owns no nodes. It reads and writes the auxiliary slot of
//! positions (caching subtree heights there) and asks the tree for trinode
//! restructurings; everything else is navigation.

use crate::data_types::RebalanceHooks;
use crate::types::PositionalTree;

/// Height cached at `p`; an external position has height 0.
///
/// Only authoritative for positions already revisited by the current
/// rebalancing pass.
#[inline]
pub fn height<T: PositionalTree + ?Sized>(tree: &T, p: Option<u32>) -> i32 {
    p.map_or(0, |p| tree.aux(p))
}

/// Sets the height of `p` from its children, which must already be correct.
#[inline]
pub fn recompute_height<T: PositionalTree + ?Sized>(tree: &mut T, p: u32) {
    let h = 1 + height(tree, tree.left(p)).max(height(tree, tree.right(p)));
    tree.set_aux(p, h);
}

/// Whether the balance factor of `p` lies within -1..=1.
#[inline]
pub fn is_balanced<T: PositionalTree + ?Sized>(tree: &T, p: u32) -> bool {
    (height(tree, tree.left(p)) - height(tree, tree.right(p))).abs() <= 1
}

/// The child of `p` with height no smaller than its sibling's.
///
/// Ties go to the child on the same side as `p` hangs off its own parent, so
/// that two steps down from a grandparent always land on a collinear chain
/// and restructuring needs a single rotation. At the root either side works;
/// the left one is returned.
pub fn taller_child<T: PositionalTree + ?Sized>(tree: &T, p: u32) -> Option<u32> {
    let l = tree.left(p);
    let r = tree.right(p);
    let lh = height(tree, l);
    let rh = height(tree, r);
    if lh > rh {
        return l;
    }
    if lh < rh {
        return r;
    }
    match tree.parent(p) {
        None => l,
        Some(parent) if tree.left(parent) == Some(p) => l,
        Some(_) => r,
    }
}

/// Walks up from `p` recomputing heights and restructuring the first
/// unbalanced position found on each level. Stops as soon as a recomputed
/// height equals the one stored before, or above the root.
pub fn rebalance<T: PositionalTree + ?Sized>(tree: &mut T, p: u32) {
    let mut curr = Some(p);
    while let Some(mut p) = curr {
        let old_height = height(tree, Some(p));
        if !is_balanced(tree, p) {
            let y = taller_child(tree, p).expect("unbalanced node has a taller child");
            let x = taller_child(tree, y).expect("taller child of an unbalanced node is not a leaf");
            p = tree.restructure(x);
            tracing::trace!(z = ?curr, y, x, root = p, "trinode restructure");
            let l = tree.left(p).expect("restructured root has a left child");
            let r = tree.right(p).expect("restructured root has a right child");
            recompute_height(tree, l);
            recompute_height(tree, r);
        }
        recompute_height(tree, p);
        if height(tree, Some(p)) == old_height {
            break;
        }
        curr = tree.parent(p);
    }
}

/// Hook for a leaf just attached at `p`.
pub fn after_insert<T: PositionalTree + ?Sized>(tree: &mut T, p: u32) {
    rebalance(tree, p);
}

/// Hook for a structural removal; `parent` is the parent of the vacated
/// position, `None` when the removed node was the root.
pub fn after_remove<T: PositionalTree + ?Sized>(tree: &mut T, parent: Option<u32>) {
    if let Some(p) = parent {
        rebalance(tree, p);
    }
}

/// AVL rebalancing hooks for [`TreeMap`](crate::data_types::TreeMap).
#[derive(Clone, Copy, Debug, Default)]
pub struct AvlBalance;

impl RebalanceHooks for AvlBalance {
    fn after_insert<T: PositionalTree + ?Sized>(tree: &mut T, p: u32) {
        after_insert(tree, p);
    }

    fn after_remove<T: PositionalTree + ?Sized>(tree: &mut T, parent: Option<u32>) {
        after_remove(tree, parent);
    }
}
