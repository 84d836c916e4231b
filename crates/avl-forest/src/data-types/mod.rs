pub mod map;

pub use map::{Iter, NoRebalance, RebalanceHooks, TreeMap};
