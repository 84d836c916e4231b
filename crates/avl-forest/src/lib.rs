//! Arena-based AVL tree map.
//!
//! A plain binary search tree ([`tree::SearchTree`]) does the structural
//! work; a separate balance engine ([`avl::util`]) restores the AVL height
//! invariant after every insertion and removal by walking up from the
//! position that changed, caching subtree heights in each node's auxiliary
//! slot and performing trinode restructurings where a node leans by two.
//!
//! Nodes are kept in a `Vec` arena and linked by `Option<u32>` indices, so
//! parent back-references need no shared ownership.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`], [`KvNode`], [`Augmented`], [`PositionalTree`] traits |
//! | [`tree`] | [`SearchTree`]: search, attach, detach, release, restructure |
//! | [`util`] | link-level helpers: `first`, `next`, `find`, `rotate`, `restructure` |
//! | [`avl`] | balance engine, [`AvlMap`], [`AvlSet`], `sanity_check` |
//! | [`data_types`] | [`TreeMap`] facade generic over [`RebalanceHooks`] |
//! | [`print`] | 2D grid rendering |

pub mod avl;
#[path = "data-types/mod.rs"]
pub mod data_types;
pub mod error;
pub mod print;
#[path = "Tree.rs"]
pub mod tree;
#[path = "TreeNode.rs"]
pub mod tree_node;
pub mod types;
pub mod util;

pub use avl::{AvlBalance, AvlMap, AvlSet};
pub use data_types::{NoRebalance, RebalanceHooks, TreeMap};
pub use error::InvariantViolation;
pub use tree::{Detached, Search, SearchTree};
pub use tree_node::TreeNode;
pub use types::{Augmented, KvNode, Node, PositionalTree};
