use std::fmt;

use serde::Serialize;

use super::NodeHandle;

/// Opaque arena index of an edge inside one [`super::Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EdgeHandle(pub(crate) usize);

impl EdgeHandle {
    /// Position of the edge in insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A weighted connection between two nodes.
///
/// Storage keeps `a`/`b` in insertion order, but every algorithm treats the
/// edge as traversable in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub a: NodeHandle,
    pub b: NodeHandle,
    pub weight: i64,
}

impl Edge {
    /// The endpoint across the edge from `from`, or `None` if `from` is not
    /// an endpoint.
    #[must_use]
    pub fn opposite(&self, from: NodeHandle) -> Option<NodeHandle> {
        if from == self.a {
            Some(self.b)
        } else if from == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// Whether both endpoints are the same node.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}
