//! The weighted graph container.
//!
//! # Overview
//!
//! [`Graph`] owns two insertion-ordered arenas, one of [`Node`]s and one of
//! [`Edge`]s, plus a per-node incidence list. Every algorithm in this crate
//! reads the graph through [`Graph::neighbors`] (or its crate-internal
//! unchecked twin), so edges are always traversable in both directions.
//!
//! ## Identity
//!
//! Nodes are identified by the [`NodeHandle`] returned on insertion, not by
//! their caller-assigned `id`. The graph also keeps an `id → handle` index
//! for loaders and command layers that only know external ids. Duplicate ids
//! are accepted by [`Graph::add_node`]; the index keeps the first handle and
//! [`Graph::duplicate_ids`] reports the rest. Use [`Graph::try_add_node`] to
//! reject them instead.
//!
//! ## Membership
//!
//! [`Graph::add_edge`] rejects endpoints that are not members with
//! [`GraphError::InvalidReference`]; queries taking a handle reject
//! non-members with [`GraphError::NodeNotFound`].

mod edge;
mod node;

use std::collections::HashMap;
use std::slice;

use tracing::trace;

pub use edge::{Edge, EdgeHandle};
pub use node::{Node, NodeHandle};

use crate::error::GraphError;

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An undirected, integer-weighted multigraph with generic node payloads.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    nodes: Vec<Node<T>>,
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeHandle>>,
    id_index: HashMap<i64, NodeHandle>,
}

impl<T> Graph<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            incidence: Vec::new(),
            id_index: HashMap::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    #[must_use]
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            edges: Vec::with_capacity(edge_count),
            incidence: Vec::with_capacity(node_count),
            id_index: HashMap::with_capacity(node_count),
        }
    }

    /// Append a node and return its handle.
    ///
    /// No uniqueness check is made on `id`. If `id` is already present the
    /// new node is still inserted, but [`Graph::node_by_id`] keeps resolving
    /// to the first node with that id.
    pub fn add_node(&mut self, id: i64, payload: T) -> NodeHandle {
        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(Node { id, payload });
        self.incidence.push(Vec::new());
        self.id_index.entry(id).or_insert(handle);
        trace!(id, %handle, "node added");
        handle
    }

    /// Append a node, failing if `id` is already present.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNodeId`] when another node already
    /// carries `id`.
    pub fn try_add_node(&mut self, id: i64, payload: T) -> Result<NodeHandle, GraphError> {
        if self.id_index.contains_key(&id) {
            return Err(GraphError::DuplicateNodeId { id });
        }
        Ok(self.add_node(id, payload))
    }

    /// Append an edge between two member nodes.
    ///
    /// A self-loop (`a == b`) is recorded once in the node's incidence list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidReference`] when either endpoint is not a
    /// member of this graph.
    pub fn add_edge(
        &mut self,
        a: NodeHandle,
        b: NodeHandle,
        weight: i64,
    ) -> Result<EdgeHandle, GraphError> {
        for endpoint in [a, b] {
            if !self.contains(endpoint) {
                return Err(GraphError::InvalidReference {
                    handle: endpoint.index(),
                });
            }
        }

        let handle = EdgeHandle(self.edges.len());
        self.edges.push(Edge { a, b, weight });
        self.incidence[a.0].push(handle);
        if a != b {
            self.incidence[b.0].push(handle);
        }
        trace!(%a, %b, weight, %handle, "edge added");
        Ok(handle)
    }

    /// Replace the weight of an existing edge, returning the old weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] for a handle this graph did not
    /// issue.
    pub fn set_weight(&mut self, edge: EdgeHandle, weight: i64) -> Result<i64, GraphError> {
        let slot = self
            .edges
            .get_mut(edge.0)
            .ok_or(GraphError::EdgeNotFound { handle: edge.0 })?;
        Ok(std::mem::replace(&mut slot.weight, weight))
    }

    /// Whether `handle` names a node of this graph.
    #[must_use]
    pub fn contains(&self, handle: NodeHandle) -> bool {
        handle.0 < self.nodes.len()
    }

    /// Fail with [`GraphError::NodeNotFound`] unless `handle` is a member.
    pub(crate) fn ensure_member(&self, handle: NodeHandle) -> Result<(), GraphError> {
        if self.contains(handle) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound {
                handle: handle.index(),
            })
        }
    }

    #[must_use]
    pub fn node(&self, handle: NodeHandle) -> Option<&Node<T>> {
        self.nodes.get(handle.0)
    }

    #[must_use]
    pub fn edge(&self, handle: EdgeHandle) -> Option<&Edge> {
        self.edges.get(handle.0)
    }

    /// Resolve a caller-assigned id to the first node inserted with it.
    #[must_use]
    pub fn node_by_id(&self, id: i64) -> Option<NodeHandle> {
        self.id_index.get(&id).copied()
    }

    /// External id of a member node.
    #[must_use]
    pub fn id_of(&self, handle: NodeHandle) -> Option<i64> {
        self.node(handle).map(|node| node.id)
    }

    /// Ids that were inserted more than once, in order of their repeat.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<i64> {
        self.handles()
            .filter(|&h| self.id_index.get(&self.nodes[h.0].id) != Some(&h))
            .map(|h| self.nodes[h.0].id)
            .collect()
    }

    /// Read-only view of the nodes, insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Read-only view of the edges, insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Every node handle, insertion order.
    pub fn handles(&self) -> impl ExactSizeIterator<Item = NodeHandle> + use<T> {
        (0..self.nodes.len()).map(NodeHandle)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lazy `(neighbor, weight)` pairs over every edge incident to `node`,
    /// in edge insertion order.
    ///
    /// Reflects the edge set at call time; call again to restart.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] when `node` is not a member.
    pub fn neighbors(&self, node: NodeHandle) -> Result<Neighbors<'_>, GraphError> {
        self.ensure_member(node)?;
        Ok(self.neighbors_of(node))
    }

    /// Unchecked variant of [`Graph::neighbors`] for algorithms that have
    /// already validated their inputs.
    pub(crate) fn neighbors_of(&self, node: NodeHandle) -> Neighbors<'_> {
        Neighbors {
            edges: &self.edges,
            incident: self.incidence[node.0].iter(),
            from: node,
        }
    }

    /// `(edge, neighbor)` pairs incident to a member node.
    pub(crate) fn incident_edges(
        &self,
        node: NodeHandle,
    ) -> impl Iterator<Item = (EdgeHandle, NodeHandle)> + '_ {
        self.incidence[node.0]
            .iter()
            .filter_map(move |&eh| self.edges[eh.0].opposite(node).map(|other| (eh, other)))
    }

    /// Number of incident edges (a self-loop counts once).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] when `node` is not a member.
    pub fn degree(&self, node: NodeHandle) -> Result<usize, GraphError> {
        self.ensure_member(node)?;
        Ok(self.incidence[node.0].len())
    }

    /// Whether any edge carries a negative weight.
    #[must_use]
    pub fn has_negative_weight(&self) -> bool {
        self.edges.iter().any(|edge| edge.weight < 0)
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Neighbors
// ---------------------------------------------------------------------------

/// Iterator returned by [`Graph::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    edges: &'a [Edge],
    incident: slice::Iter<'a, EdgeHandle>,
    from: NodeHandle,
}

impl Iterator for Neighbors<'_> {
    type Item = (NodeHandle, i64);

    fn next(&mut self) -> Option<Self::Item> {
        // Incidence lists only hold edges touching `from`.
        let edge = &self.edges[self.incident.next()?.0];
        edge.opposite(self.from).map(|other| (other, edge.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.incident.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
