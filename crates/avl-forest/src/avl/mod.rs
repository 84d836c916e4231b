//! AVL family: the balance engine, its map/set facades and diagnostics.

#[path = "AvlMap.rs"]
pub mod avl_map;
#[path = "AvlSet.rs"]
pub mod avl_set;
pub mod diagnostics;
pub mod util;

pub use avl_map::AvlMap;
pub use avl_set::AvlSet;
pub use diagnostics::sanity_check;
pub use util::{
    after_insert, after_remove, height, is_balanced, rebalance, recompute_height, taller_child,
    AvlBalance,
};
