use std::fmt::Debug;

use crate::types::{
    default_comparator, Augmented, Comparator, KvNode, Node, PositionalTree,
};
use crate::util::{self, find, first, insert_left, insert_right, last, next, splice};

use super::tree_node::TreeNode;

/// Outcome of [`SearchTree::search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Search {
    /// The key is stored at this position.
    Found(u32),
    /// The key is absent. It belongs in the empty left (`left == true`) or
    /// right slot of `parent`, or at the root when `parent` is `None`.
    Vacant { parent: Option<u32>, left: bool },
}

/// A node unlinked by [`SearchTree::detach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detached {
    /// Arena slot holding the removed entry, ready for [`SearchTree::release`].
    pub pos: u32,
    /// Parent of the physically vacated position.
    pub parent: Option<u32>,
}

/// Unbalanced binary search tree over an index arena.
///
/// Performs structural inserts and removals only. Keeping it balanced is the
/// job of whoever calls [`attach`](Self::attach) and
/// [`detach`](Self::detach): positions touched by each mutation are returned
/// so a rebalancing pass can start right there.
pub struct SearchTree<K, V, C = Comparator<K>>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<TreeNode<K, V>>,
}

impl<K, V> SearchTree<K, V, Comparator<K>>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for SearchTree<K, V, Comparator<K>>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> SearchTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn arena(&self) -> &[TreeNode<K, V>] {
        &self.arena
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node(&self, pos: u32) -> &TreeNode<K, V> {
        &self.arena[pos as usize]
    }

    pub fn key(&self, pos: u32) -> &K {
        self.node(pos).key()
    }

    pub fn value(&self, pos: u32) -> &V {
        self.node(pos).value()
    }

    pub fn value_mut(&mut self, pos: u32) -> &mut V {
        self.arena[pos as usize].value_mut()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn first(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    pub fn next(&self, pos: u32) -> Option<u32> {
        next(&self.arena, pos)
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        find(
            &self.arena,
            self.root,
            key,
            |n| &n.k,
            |a, b| (self.comparator)(a, b),
        )
    }

    /// Walks down from the root to where `key` is or would be.
    pub fn search(&self, key: &K) -> Search {
        let mut parent = None;
        let mut left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = (self.comparator)(key, &self.arena[i as usize].k);
            if cmp == 0 {
                return Search::Found(i);
            }
            parent = Some(i);
            left = cmp < 0;
            curr = if left {
                self.arena[i as usize].l
            } else {
                self.arena[i as usize].r
            };
        }
        Search::Vacant { parent, left }
    }

    /// Places a new leaf holding `key`/`value` in the empty slot reported by
    /// a [`Search::Vacant`]. Returns its position.
    pub fn attach(&mut self, parent: Option<u32>, left: bool, key: K, value: V) -> u32 {
        self.arena.push(TreeNode::new(key, value));
        let idx = (self.arena.len() - 1) as u32;
        match parent {
            None => {
                debug_assert!(self.root.is_none(), "attach at the root of a non-empty tree");
                self.root = Some(idx);
            }
            Some(p) if left => insert_left(&mut self.arena, idx, p),
            Some(p) => insert_right(&mut self.arena, idx, p),
        }
        idx
    }

    /// Structurally removes the entry at `pos`.
    ///
    /// A node with two children trades entries with its in-order predecessor
    /// and the predecessor's node is unlinked in its place, so the vacated
    /// position always had at most one child.
    pub fn detach(&mut self, pos: u32) -> Detached {
        let mut pos = pos;
        let node = &self.arena[pos as usize];
        if let (Some(l), Some(_)) = (node.l, node.r) {
            let pred = last(&self.arena, Some(l)).expect("left subtree is not empty");
            self.swap_entries(pos, pred);
            pos = pred;
        }
        let (root, parent) = splice(&mut self.arena, self.root, pos);
        self.root = root;
        Detached { pos, parent }
    }

    /// Frees the arena slot of a detached node and returns its entry.
    ///
    /// The last arena node moves into the freed slot, so any position held
    /// across this call may now name a different node.
    pub fn release(&mut self, pos: u32) -> (K, V) {
        let moved = (self.arena.len() - 1) as u32;
        let node = self.arena.swap_remove(pos as usize);
        debug_assert!(
            node.p.is_none() && node.l.is_none() && node.r.is_none() && self.root != Some(pos),
            "released node is still linked"
        );
        if pos != moved {
            let (p, l, r) = {
                let n = &self.arena[pos as usize];
                (n.p, n.l, n.r)
            };
            util::replace_child(&mut self.arena, p, moved, Some(pos));
            if p.is_none() {
                self.root = Some(pos);
            }
            for child in [l, r].into_iter().flatten() {
                self.arena[child as usize].p = Some(pos);
            }
        }
        (node.k, node.v)
    }

    fn swap_entries(&mut self, a: u32, b: u32) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.arena.split_at_mut(hi as usize);
        let x = &mut head[lo as usize];
        let y = &mut tail[0];
        std::mem::swap(&mut x.k, &mut y.k);
        std::mem::swap(&mut x.v, &mut y.v);
    }

    /// Positions in pre-order.
    pub fn positions(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut stack: Vec<u32> = self.root.into_iter().collect();
        while let Some(i) = stack.pop() {
            out.push(i);
            let n = &self.arena[i as usize];
            stack.extend(n.r);
            stack.extend(n.l);
        }
        out
    }

    /// Debug dump of the whole tree.
    pub fn print(&self) -> String
    where
        K: Debug,
        V: Debug,
    {
        util::print::print::<K, V, TreeNode<K, V>>(&self.arena, self.root, "")
    }
}

impl<K, V, C> PositionalTree for SearchTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn root(&self) -> Option<u32> {
        self.root
    }

    fn parent(&self, p: u32) -> Option<u32> {
        self.arena[p as usize].p()
    }

    fn left(&self, p: u32) -> Option<u32> {
        self.arena[p as usize].l()
    }

    fn right(&self, p: u32) -> Option<u32> {
        self.arena[p as usize].r()
    }

    fn aux(&self, p: u32) -> i32 {
        self.arena[p as usize].aux()
    }

    fn set_aux(&mut self, p: u32, aux: i32) {
        self.arena[p as usize].set_aux(aux);
    }

    fn restructure(&mut self, x: u32) -> u32 {
        let b = util::restructure(&mut self.arena, x);
        if self.arena[b as usize].p().is_none() {
            self.root = Some(b);
        }
        b
    }
}
