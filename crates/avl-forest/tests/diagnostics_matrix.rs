mod common;

use std::cell::Cell;
use std::io;
use std::sync::{Arc, Mutex};

use avl_forest::avl::{after_insert, recompute_height, sanity_check};
use avl_forest::{
    AvlMap, InvariantViolation, NoRebalance, PositionalTree, Search, SearchTree, TreeMap,
};

use common::{avl_tree, plain_tree};

#[test]
fn valid_trees_pass() {
    sanity_check(&avl_tree(&[])).unwrap();
    sanity_check(&avl_tree(&[3, 1, 2, 5, 4])).unwrap();
}

#[test]
fn unvisited_heights_are_reported_as_stale() {
    let mut map = TreeMap::<i32, (), NoRebalance>::new();
    map.put(1, ());
    let err = sanity_check(map.tree()).unwrap_err();
    assert_eq!(
        err,
        InvariantViolation::StaleHeight {
            key: "1".to_string(),
            stored: 0,
            expected: 1,
        }
    );
    assert_eq!(err.key(), "1");
    assert_eq!(
        err.to_string(),
        "stale height at node with key 1: stored 0, expected 1"
    );
}

#[test]
fn leaning_node_is_reported_with_its_key() {
    let mut tree = plain_tree(&[1, 2, 3]);
    for k in [3, 2, 1] {
        let p = tree.find(&k).unwrap();
        recompute_height(&mut tree, p);
    }
    let err = sanity_check(&tree).unwrap_err();
    assert_eq!(
        err,
        InvariantViolation::Unbalanced {
            key: "1".to_string(),
            balance: -2,
        }
    );
}

#[test]
fn corrupted_height_is_reported() {
    let mut tree = avl_tree(&[2, 1, 3]);
    let p = tree.find(&3).unwrap();
    tree.set_aux(p, 5);
    assert!(matches!(
        sanity_check(&tree),
        Err(InvariantViolation::StaleHeight { ref key, stored: 2, expected: 6 }) if key == "2"
    ));
}

#[test]
fn out_of_order_keys_are_reported() {
    let flipped = Cell::new(false);
    let cmp = |a: &i32, b: &i32| if flipped.get() { b - a } else { a - b };
    let mut tree = SearchTree::<i32, (), _>::with_comparator(cmp);
    for k in [2, 1, 3] {
        if let Search::Vacant { parent, left } = tree.search(&k) {
            let p = tree.attach(parent, left, k, ());
            after_insert(&mut tree, p);
        }
    }
    sanity_check(&tree).unwrap();

    flipped.set(true);
    assert_eq!(
        sanity_check(&tree),
        Err(InvariantViolation::OutOfOrder {
            prev: "1".to_string(),
            key: "2".to_string(),
        })
    );
}

#[test]
fn dump_and_grid_render() {
    let mut map = AvlMap::<&str, i32>::new();
    assert_eq!(map.dump(), "∅");
    assert_eq!(map.print_tree(), "");
    for k in ["b", "a", "c"] {
        map.put(k, 1);
    }
    assert_eq!(map.print_tree(), "  b\n / \\\na   c");
    let dump = map.dump();
    assert!(dump.starts_with("Node[0] [h=2] { \"b\" = 1 }"), "{dump}");
    assert!(dump.contains("[h=1] { \"a\" = 1 }"));
    assert!(dump.contains("[h=1] { \"c\" = 1 }"));
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn logged_at(level: tracing::Level, f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn violation_is_logged_with_tree_dump_at_debug_level() {
    let mut tree = avl_tree(&[2, 1, 3]);
    let p = tree.find(&3).unwrap();
    tree.set_aux(p, 5);

    let debug = logged_at(tracing::Level::DEBUG, || {
        sanity_check(&tree).unwrap_err();
    });
    assert!(debug.contains("AVL violation: stale height at node with key 2"), "{debug}");
    assert!(debug.contains("tree at violation:"), "{debug}");
    assert!(debug.contains("[h=5] { 3 = 3 }"), "{debug}");

    let warn = logged_at(tracing::Level::WARN, || {
        sanity_check(&tree).unwrap_err();
    });
    assert!(warn.contains("AVL violation"), "{warn}");
    assert!(!warn.contains("tree at violation:"), "{warn}");
}
