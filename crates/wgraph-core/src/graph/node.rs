use std::fmt;

use serde::Serialize;

/// Opaque arena index of a node inside one [`super::Graph`].
///
/// Handles are dense and stable: the n-th inserted node has handle `n`.
/// A handle is only meaningful for the graph that returned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeHandle(pub(crate) usize);

impl NodeHandle {
    /// Position of the node in insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A node: caller-assigned id plus payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<T> {
    pub id: i64,
    pub payload: T,
}
