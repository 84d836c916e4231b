//! Position-tree (p / l / r) utility functions.
//!
//! Everything here is generic over [`Node`] and only follows or rewires
//! links; none of it knows about heights or balancing.
//!
//! Key-based helpers (`find`, `find_or_next_lower`, ...) accept a `key_of`
//! accessor closure so callers can use any arena-backed node layout.

pub mod print;
pub mod rotate;

use crate::types::Node;

pub use rotate::{restructure, rotate};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Child of `idx` on the given side.
#[inline]
fn child<N: Node>(arena: &[N], idx: u32, right: bool) -> Option<u32> {
    if right {
        get_r(arena, idx)
    } else {
        get_l(arena, idx)
    }
}

/// Points whichever child link of `parent` held `old` at `new` instead.
/// With no parent there is nothing to rewire; the caller owns the root.
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    if let Some(p) = parent {
        if get_l(arena, p) == Some(old) {
            set_l(arena, p, new);
        } else {
            set_r(arena, p, new);
        }
    }
}

/// Follows one side down from `root` as far as it goes.
fn extreme<N: Node>(arena: &[N], root: Option<u32>, right: bool) -> Option<u32> {
    let mut curr = root?;
    while let Some(c) = child(arena, curr, right) {
        curr = c;
    }
    Some(curr)
}

/// In-order neighbour of `curr`: the successor when `forward`, the
/// predecessor otherwise.
fn step<N: Node>(arena: &[N], mut curr: u32, forward: bool) -> Option<u32> {
    if let Some(c) = child(arena, curr, forward) {
        return extreme(arena, Some(c), !forward);
    }
    // Climb while we come from the `forward` side.
    while let Some(p) = get_p(arena, curr) {
        if child(arena, p, forward) != Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    extreme(arena, root, false)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    extreme(arena, root, true)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], curr: u32) -> Option<u32> {
    step(arena, curr, true)
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], curr: u32) -> Option<u32> {
    step(arena, curr, false)
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Structural height under `root`, recomputed from the links alone.
/// An absent subtree has height 0, a single node height 1.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |i| {
        1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i)))
    })
}

/// Which node a key descent settles on when the key itself is missing.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Miss {
    Nothing,
    Lower,
    Higher,
}

fn descend<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
    miss: Miss,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut candidate = None;
    while let Some(i) = curr {
        let cmp = comparator(key, key_of(&arena[i as usize]));
        if cmp == 0 {
            return Some(i);
        }
        let go_right = cmp > 0;
        // Turning right passes a lower node, turning left a higher one.
        if (go_right && miss == Miss::Lower) || (!go_right && miss == Miss::Higher) {
            candidate = Some(i);
        }
        curr = child(arena, i, go_right);
    }
    candidate
}

/// Finds a node by key.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    descend(arena, root, key, key_of, comparator, Miss::Nothing)
}

/// Finds node by key, or the next lower node if the exact key does not exist.
pub fn find_or_next_lower<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    descend(arena, root, key, key_of, comparator, Miss::Lower)
}

/// Finds node by key, or the next higher node if the exact key does not exist.
pub fn find_or_next_higher<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    descend(arena, root, key, key_of, comparator, Miss::Higher)
}

/// Hangs the detached `node` as the left leaf of `parent`.
pub fn insert_left<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_l(arena, parent).is_none(), "left slot is occupied");
    set_l(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Hangs the detached `node` as the right leaf of `parent`.
pub fn insert_right<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_r(arena, parent).is_none(), "right slot is occupied");
    set_r(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Unlinks `node`, which must have at most one child, splicing that child
/// into its place. Returns the new root and the parent of the vacated slot.
pub fn splice<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
) -> (Option<u32>, Option<u32>) {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    debug_assert!(l.is_none() || r.is_none(), "node has two children");
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    let heir = l.or(r);
    if let Some(c) = heir {
        set_p(arena, c, p);
    }
    replace_child(arena, p, node, heir);
    let root = if p.is_none() { heir } else { root };
    (root, p)
}
