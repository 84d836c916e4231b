#![allow(dead_code)]

use avl_forest::avl::after_insert;
use avl_forest::{PositionalTree, Search, SearchTree};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Reproducible random source for long workloads.
///
/// Uses the xoshiro256** PRNG so a failing seed can be replayed exactly.
pub struct Fuzzer {
    pub seed: u64,
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..elements.len());
        &elements[idx]
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }
}

/// Builds a search tree by attaching `keys` in order, running the AVL insert
/// hook after each new leaf.
pub fn avl_tree(keys: &[i32]) -> SearchTree<i32, i32> {
    let mut tree = SearchTree::new();
    for &k in keys {
        if let Search::Vacant { parent, left } = tree.search(&k) {
            let p = tree.attach(parent, left, k, k);
            after_insert(&mut tree, p);
        }
    }
    tree
}

/// Builds a search tree by attaching `keys` in order with no rebalancing.
pub fn plain_tree(keys: &[i32]) -> SearchTree<i32, i32> {
    let mut tree = SearchTree::new();
    for &k in keys {
        if let Search::Vacant { parent, left } = tree.search(&k) {
            tree.attach(parent, left, k, k);
        }
    }
    tree
}

pub fn in_order<K: Clone, V, C: Fn(&K, &K) -> i32>(tree: &SearchTree<K, V, C>) -> Vec<K> {
    let mut out = Vec::new();
    let mut curr = tree.first();
    while let Some(i) = curr {
        out.push(tree.key(i).clone());
        curr = tree.next(i);
    }
    out
}

pub fn pre_order<K: Clone, V, C: Fn(&K, &K) -> i32>(tree: &SearchTree<K, V, C>) -> Vec<K> {
    tree.positions().into_iter().map(|i| tree.key(i).clone()).collect()
}

/// Every link and cached height, keyed by node key so that arena slot moves
/// do not matter.
pub fn snapshot(tree: &SearchTree<i32, i32>) -> Vec<(i32, Option<i32>, Option<i32>, i32)> {
    let key = |p: Option<u32>| p.map(|i| *tree.key(i));
    let mut out: Vec<_> = tree
        .positions()
        .into_iter()
        .map(|i| (*tree.key(i), key(tree.left(i)), key(tree.right(i)), tree.aux(i)))
        .collect();
    out.sort();
    out
}

/// Upper bound on the height of an AVL tree with `n` nodes.
pub fn avl_height_bound(n: usize) -> f64 {
    1.4405 * ((n + 2) as f64).log2() - 0.3277
}
