/// Structural invariant broken somewhere in a tree.
///
/// Keys are carried in their `Debug` rendering so the error does not borrow
/// the tree it was found in.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("root node with key {key} has a parent link")]
    RootHasParent { key: String },
    #[error("child of node with key {key} does not link back to it")]
    BrokenParentLink { key: String },
    #[error("stale height at node with key {key}: stored {stored}, expected {expected}")]
    StaleHeight {
        key: String,
        stored: i32,
        expected: i32,
    },
    #[error("unbalanced node with key {key}: balance factor {balance}")]
    Unbalanced { key: String, balance: i32 },
    #[error("keys out of order: {prev} before {key}")]
    OutOfOrder { prev: String, key: String },
}

impl InvariantViolation {
    /// Debug rendering of the offending key.
    pub fn key(&self) -> &str {
        match self {
            Self::RootHasParent { key }
            | Self::BrokenParentLink { key }
            | Self::StaleHeight { key, .. }
            | Self::Unbalanced { key, .. }
            | Self::OutOfOrder { key, .. } => key,
        }
    }
}
