//! Traversal and connectivity over the undirected view of a [`Graph`].
//!
//! # Overview
//!
//! - [`bfs`] / [`dfs`]: visit order over the nodes reachable from a start
//!   node. Unreachable nodes are simply absent from the order.
//! - [`is_connected`]: one BFS from the first node must reach every node.
//!   The empty graph is vacuously connected.
//! - [`connected_components`]: every component, in order of its first
//!   member.
//! - [`has_cycle`]: undirected cycle detection. A DFS runs from every
//!   unvisited node and remembers the edge it arrived by; reaching an
//!   already-visited node over any *other* edge closes a cycle. Tracking the
//!   arrival edge instead of the parent node makes self-loops and parallel
//!   edges count as cycles.
//!
//! All of these are `O(V + E)` and iterative, so deep graphs do not grow the
//! call stack.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument};

use crate::error::GraphError;
use crate::graph::{EdgeHandle, Graph, NodeHandle};

/// Breadth-first visit order from `start`.
///
/// Neighbors are enqueued in incidence order.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] when `start` is not a member.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn bfs<T>(graph: &Graph<T>, start: NodeHandle) -> Result<Vec<NodeHandle>, GraphError> {
    graph.ensure_member(start)?;
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let order = bfs_from(graph, start, &mut visited);
    debug!(visited = order.len(), "bfs complete");
    Ok(order)
}

/// Depth-first visit order from `start`.
///
/// The first incident edge of a node is explored first, matching the
/// order a recursive DFS would produce.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] when `start` is not a member.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dfs<T>(graph: &Graph<T>, start: NodeHandle) -> Result<Vec<NodeHandle>, GraphError> {
    graph.ensure_member(start)?;

    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if visited.put(current.index()) {
            continue;
        }
        order.push(current);

        // Reverse so the first neighbor ends up on top of the stack.
        let pending: Vec<NodeHandle> = graph
            .neighbors_of(current)
            .map(|(next, _)| next)
            .filter(|next| !visited.contains(next.index()))
            .collect();
        stack.extend(pending.into_iter().rev());
    }

    debug!(visited = order.len(), "dfs complete");
    Ok(order)
}

fn bfs_from<T>(graph: &Graph<T>, start: NodeHandle, visited: &mut FixedBitSet) -> Vec<NodeHandle> {
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    visited.insert(start.index());

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for (next, _) in graph.neighbors_of(current) {
            if !visited.put(next.index()) {
                queue.push_back(next);
            }
        }
    }

    order
}

/// Whether every node is reachable from every other node.
#[must_use]
pub fn is_connected<T>(graph: &Graph<T>) -> bool {
    let Some(first) = graph.handles().next() else {
        return true;
    };
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    bfs_from(graph, first, &mut visited).len() == graph.node_count()
}

/// Connected components in order of their first member; members in BFS
/// order from that member.
#[must_use]
pub fn connected_components<T>(graph: &Graph<T>) -> Vec<Vec<NodeHandle>> {
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut components = Vec::new();

    for node in graph.handles() {
        if !visited.contains(node.index()) {
            components.push(bfs_from(graph, node, &mut visited));
        }
    }

    components
}

/// Whether the undirected graph contains a cycle.
///
/// Returns as soon as the first cycle is found in any component.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn has_cycle<T>(graph: &Graph<T>) -> bool {
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    // Each frame: (node, edge it was reached by).
    let mut stack: Vec<(NodeHandle, Option<EdgeHandle>)> = Vec::new();

    for root in graph.handles() {
        if visited.contains(root.index()) {
            continue;
        }
        visited.insert(root.index());
        stack.push((root, None));

        while let Some((current, arrived_by)) = stack.pop() {
            for (edge, next) in graph.incident_edges(current) {
                if Some(edge) == arrived_by {
                    continue;
                }
                if visited.put(next.index()) {
                    debug!(%current, %next, %edge, "cycle closed");
                    return true;
                }
                stack.push((next, Some(edge)));
            }
        }
    }

    false
}
