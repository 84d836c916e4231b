mod common;

use std::collections::BTreeMap;

use avl_forest::avl::rebalance;
use avl_forest::{AvlMap, PositionalTree};
use proptest::prelude::*;

use common::{avl_height_bound, avl_tree, in_order, snapshot};

#[derive(Clone, Debug)]
enum Op {
    Put(i16, u8),
    Remove(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<i16>().prop_map(|k| k % 64), any::<u8>()).prop_map(|(k, v)| Op::Put(k, v)),
        2 => any::<i16>().prop_map(|k| Op::Remove(k % 64)),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(ops in proptest::collection::vec(op(), 0..200)) {
        let mut map = AvlMap::<i16, u8>::new();
        let mut model = BTreeMap::new();
        for op in ops {
            match op {
                Op::Put(k, v) => prop_assert_eq!(map.put(k, v), model.insert(k, v)),
                Op::Remove(k) => prop_assert_eq!(map.remove(&k), model.remove(&k)),
            }
            prop_assert!(map.assert_valid().is_ok(), "{:?}", map.assert_valid());
            prop_assert_eq!(map.len(), model.len());
        }
        let entries: Vec<(i16, u8)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(i16, u8)> = model.into_iter().collect();
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn height_is_logarithmic(keys in proptest::collection::btree_set(any::<i32>(), 1..500)) {
        let mut map = AvlMap::<i32, ()>::new();
        for &k in keys.iter().rev() {
            map.put(k, ());
        }
        prop_assert!((map.height() as f64) <= avl_height_bound(map.len()));
    }

    #[test]
    fn height_is_logarithmic_for_random_insert_order(keys in proptest::collection::vec(any::<i32>(), 1..500)) {
        let mut map = AvlMap::<i32, ()>::new();
        for k in keys {
            map.put(k, ());
            prop_assert!(map.assert_valid().is_ok(), "{:?}", map.assert_valid());
        }
        prop_assert!((map.height() as f64) <= avl_height_bound(map.len()));
    }

    #[test]
    fn rebalancing_never_reorders_keys(keys in proptest::collection::vec(-1000i32..1000, 1..120)) {
        let tree = avl_tree(&keys);
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(in_order(&tree), sorted);
    }

    #[test]
    fn rebalance_of_valid_tree_changes_nothing(
        keys in proptest::collection::vec(-1000i32..1000, 1..120),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree = avl_tree(&keys);
        let before = snapshot(&tree);
        let positions = tree.positions();
        let p = positions[pick.index(positions.len())];
        rebalance(&mut tree, p);
        prop_assert_eq!(snapshot(&tree), before);
        prop_assert!(tree.root().is_some());
    }
}
