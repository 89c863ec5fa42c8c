//! Single-source shortest paths.
//!
//! # Overview
//!
//! Two engines answer the same two questions, the distance from a source to
//! every node and the path between two specific nodes:
//!
//! | Engine                          | Weights          | Cost     |
//! |---------------------------------|------------------|----------|
//! | [`Dijkstra`](dijkstra::Dijkstra)         | non-negative     | `O((V + E) log V)` |
//! | [`BellmanFord`](bellman_ford::BellmanFord) | any; fails on negative cycles | `O(V * E)` |
//!
//! Both implement [`ShortestPathEngine`]; [`Engine`] picks one at runtime.
//!
//! ## Conventions
//!
//! - Unreachable nodes have [`Distance::Infinite`]; that is a result, not an
//!   error.
//! - [`ShortestPathEngine::path`] returns `None` when the source equals the
//!   target and when the target is unreachable.
//! - Distance arithmetic saturates at `i64` bounds.
//! - When several frontier nodes share a distance, the one inserted first
//!   into the graph is settled first. That decides which predecessor chain
//!   is reconstructed, never the distances.

pub mod bellman_ford;
pub mod dijkstra;

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;

use crate::error::GraphError;
use crate::graph::{Graph, NodeHandle};

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// Tentative or final distance from a source.
///
/// Orders every finite distance before [`Distance::Infinite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(i64),
    Infinite,
}

impl Distance {
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    #[must_use]
    pub const fn finite(self) -> Option<i64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }

    /// Distance after following an edge of `weight`; infinity absorbs.
    #[must_use]
    pub const fn extend(self, weight: i64) -> Self {
        match self {
            Self::Finite(d) => Self::Finite(d.saturating_add(weight)),
            Self::Infinite => Self::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Infinite => f.write_str("inf"),
        }
    }
}

/// Finite distances serialize as integers, infinity as `null`.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(d) => serializer.serialize_i64(*d),
            Self::Infinite => serializer.serialize_none(),
        }
    }
}

// ---------------------------------------------------------------------------
// Distances / ShortestPathTree
// ---------------------------------------------------------------------------

/// Distance from one source to every node, indexed by [`NodeHandle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distances {
    source: NodeHandle,
    values: Vec<Distance>,
}

impl Distances {
    #[must_use]
    pub const fn source(&self) -> NodeHandle {
        self.source
    }

    #[must_use]
    pub fn get(&self, node: NodeHandle) -> Option<Distance> {
        self.values.get(node.index()).copied()
    }

    /// `(node, distance)` pairs in node insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeHandle, Distance)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, &d)| (NodeHandle(idx), d))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of nodes with a finite distance (the source included).
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.values.iter().filter(|d| d.is_finite()).count()
    }
}

impl Index<NodeHandle> for Distances {
    type Output = Distance;

    fn index(&self, node: NodeHandle) -> &Distance {
        &self.values[node.index()]
    }
}

/// Distances plus the predecessor links needed to rebuild paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: NodeHandle,
    dist: Vec<Distance>,
    pred: Vec<Option<NodeHandle>>,
}

impl ShortestPathTree {
    /// A tree where only `source` has been reached.
    pub(crate) fn rooted(node_count: usize, source: NodeHandle) -> Self {
        let mut dist = vec![Distance::Infinite; node_count];
        dist[source.index()] = Distance::Finite(0);
        Self {
            source,
            dist,
            pred: vec![None; node_count],
        }
    }

    /// Lower the distance of `to` through `from` over an edge of `weight`.
    ///
    /// Returns whether the distance improved.
    pub(crate) fn relax(&mut self, from: NodeHandle, to: NodeHandle, weight: i64) -> bool {
        let candidate = self.dist[from.index()].extend(weight);
        if candidate.is_finite() && candidate < self.dist[to.index()] {
            self.dist[to.index()] = candidate;
            self.pred[to.index()] = Some(from);
            true
        } else {
            false
        }
    }

    pub(crate) fn distance_of(&self, node: NodeHandle) -> Distance {
        self.dist[node.index()]
    }

    #[must_use]
    pub const fn source(&self) -> NodeHandle {
        self.source
    }

    #[must_use]
    pub fn distance(&self, node: NodeHandle) -> Option<Distance> {
        self.dist.get(node.index()).copied()
    }

    /// Node settled immediately before `node` on its shortest path.
    #[must_use]
    pub fn predecessor(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.pred.get(node.index()).copied().flatten()
    }

    /// Path from the source to `target`, both ends included.
    ///
    /// `None` when `target` is the source, unreachable, or not in the tree.
    #[must_use]
    pub fn path_to(&self, target: NodeHandle) -> Option<Vec<NodeHandle>> {
        if target == self.source || !self.distance(target)?.is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut cursor = target;
        while cursor != self.source {
            cursor = self.predecessor(cursor)?;
            path.push(cursor);
            if path.len() > self.dist.len() {
                // Predecessor links only loop if a negative cycle slipped through.
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    #[must_use]
    pub fn into_distances(self) -> Distances {
        Distances {
            source: self.source,
            values: self.dist,
        }
    }
}

// ---------------------------------------------------------------------------
// Engines
// ---------------------------------------------------------------------------

/// Common interface of the shortest-path engines.
pub trait ShortestPathEngine {
    /// Distances and predecessor links from `source`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] when `source` is not a member; engines
    /// may add their own failures (see [`BellmanFord`]).
    fn tree<T>(&self, graph: &Graph<T>, source: NodeHandle)
    -> Result<ShortestPathTree, GraphError>;

    /// Distance from `source` to every node.
    ///
    /// # Errors
    ///
    /// Same as [`ShortestPathEngine::tree`].
    fn distances<T>(&self, graph: &Graph<T>, source: NodeHandle) -> Result<Distances, GraphError> {
        Ok(self.tree(graph, source)?.into_distances())
    }

    /// Shortest path from `source` to `target`.
    ///
    /// `Ok(None)` when `source == target` or `target` is unreachable.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] when either endpoint is not a member,
    /// plus whatever [`ShortestPathEngine::tree`] reports.
    fn path<T>(
        &self,
        graph: &Graph<T>,
        source: NodeHandle,
        target: NodeHandle,
    ) -> Result<Option<Vec<NodeHandle>>, GraphError> {
        graph.ensure_member(source)?;
        graph.ensure_member(target)?;
        if source == target {
            return Ok(None);
        }
        Ok(self.tree(graph, source)?.path_to(target))
    }
}

/// Runtime choice of shortest-path engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    #[default]
    Dijkstra,
    BellmanFord,
}

impl Engine {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::BellmanFord => "bellman-ford",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Self::Dijkstra),
            "bellman-ford" | "bellman_ford" | "bellmanford" => Ok(Self::BellmanFord),
            other => Err(format!(
                "unknown engine '{other}' (expected 'dijkstra' or 'bellman-ford')"
            )),
        }
    }
}

impl ShortestPathEngine for Engine {
    fn tree<T>(
        &self,
        graph: &Graph<T>,
        source: NodeHandle,
    ) -> Result<ShortestPathTree, GraphError> {
        match self {
            Self::Dijkstra => Dijkstra.tree(graph, source),
            Self::BellmanFord => BellmanFord.tree(graph, source),
        }
    }
}
