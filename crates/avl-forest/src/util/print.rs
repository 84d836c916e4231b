use std::fmt::Debug;

use crate::types::{Augmented, KvNode};

/// Indented debug dump of the subtree at `node`, one node per line with
/// its auxiliary slot.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: KvNode<K, V> + Augmented,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.aux(),
                n.key(),
                n.value()
            )
        }
    }
}
