//! Dijkstra's algorithm over the undirected view of the graph.
//!
//! # Precondition
//!
//! Every edge weight must be non-negative. Negative weights are *not*
//! corrected or rejected; the result is unspecified. A `warn!` event is
//! emitted when the graph carries one so the violation is never silent. Use
//! [`super::BellmanFord`] for graphs with negative weights.
//!
//! # Frontier
//!
//! The frontier is a binary min-heap keyed on `(distance, handle)` with lazy
//! deletion of stale entries. Popping the smallest handle among equal
//! distances settles nodes in the same order as a linear scan over the
//! node list would.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument, warn};

use super::{Distance, ShortestPathEngine, ShortestPathTree};
use crate::error::GraphError;
use crate::graph::{Graph, NodeHandle};

/// Dijkstra shortest-path engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl ShortestPathEngine for Dijkstra {
    #[instrument(name = "dijkstra", skip(self, graph), fields(nodes = graph.node_count()))]
    fn tree<T>(
        &self,
        graph: &Graph<T>,
        source: NodeHandle,
    ) -> Result<ShortestPathTree, GraphError> {
        graph.ensure_member(source)?;
        if graph.has_negative_weight() {
            warn!("graph has negative edge weights; Dijkstra results are unspecified");
        }

        let mut tree = ShortestPathTree::rooted(graph.node_count(), source);
        let mut settled = FixedBitSet::with_capacity(graph.node_count());
        let mut frontier: BinaryHeap<Reverse<(i64, NodeHandle)>> = BinaryHeap::new();
        frontier.push(Reverse((0, source)));

        while let Some(Reverse((_, current))) = frontier.pop() {
            if settled.put(current.index()) {
                continue;
            }

            for (next, weight) in graph.neighbors_of(current) {
                if settled.contains(next.index()) {
                    continue;
                }
                if !tree.relax(current, next, weight) {
                    continue;
                }
                if let Distance::Finite(d) = tree.distance_of(next) {
                    frontier.push(Reverse((d, next)));
                }
            }
        }

        debug!(settled = settled.count_ones(..), "dijkstra complete");
        Ok(tree)
    }
}
