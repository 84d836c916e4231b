//! Development-time verification of AVL trees.

use std::fmt::Debug;

use crate::error::InvariantViolation;
use crate::tree::SearchTree;
use crate::types::PositionalTree;

use super::util::height;

fn check_node<K, V, C>(tree: &SearchTree<K, V, C>, p: u32) -> Result<(), InvariantViolation>
where
    K: Debug,
    C: Fn(&K, &K) -> i32,
{
    let key = || format!("{:?}", tree.key(p));
    for child in [tree.left(p), tree.right(p)].into_iter().flatten() {
        if tree.parent(child) != Some(p) {
            return Err(InvariantViolation::BrokenParentLink { key: key() });
        }
    }

    let lh = height(tree, tree.left(p));
    let rh = height(tree, tree.right(p));
    let stored = height(tree, Some(p));
    let expected = 1 + lh.max(rh);
    if stored != expected {
        return Err(InvariantViolation::StaleHeight {
            key: key(),
            stored,
            expected,
        });
    }
    if (lh - rh).abs() > 1 {
        return Err(InvariantViolation::Unbalanced {
            key: key(),
            balance: lh - rh,
        });
    }
    Ok(())
}

fn check<K, V, C>(tree: &SearchTree<K, V, C>) -> Result<(), InvariantViolation>
where
    K: Debug,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = tree.root() else {
        return Ok(());
    };
    if tree.parent(root).is_some() {
        return Err(InvariantViolation::RootHasParent {
            key: format!("{:?}", tree.key(root)),
        });
    }

    for p in tree.positions() {
        check_node(tree, p)?;
    }

    let mut prev: Option<u32> = None;
    let mut curr = tree.first();
    while let Some(i) = curr {
        if let Some(pi) = prev {
            if (tree.comparator())(tree.key(pi), tree.key(i)) >= 0 {
                return Err(InvariantViolation::OutOfOrder {
                    prev: format!("{:?}", tree.key(pi)),
                    key: format!("{:?}", tree.key(i)),
                });
            }
        }
        prev = Some(i);
        curr = tree.next(i);
    }
    Ok(())
}

/// Validates every internal position of `tree`.
///
/// Stops at the first violation, logs it with the offending key and returns
/// it instead of panicking. At debug level the whole tree is dumped too.
pub fn sanity_check<K, V, C>(tree: &SearchTree<K, V, C>) -> Result<(), InvariantViolation>
where
    K: Debug,
    V: Debug,
    C: Fn(&K, &K) -> i32,
{
    check(tree).inspect_err(|violation| {
        tracing::warn!(key = violation.key(), "AVL violation: {violation}");
        tracing::debug!("tree at violation:\n{}", tree.print());
    })
}
