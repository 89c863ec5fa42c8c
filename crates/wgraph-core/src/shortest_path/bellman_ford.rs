//! Bellman-Ford over the undirected view of the graph.
//!
//! Every edge is relaxed in both directions (`a → b`, then `b → a`) for up
//! to `|V| - 1` rounds, in edge insertion order. The loop stops early once a
//! round changes nothing. One more pass follows: if any edge can still be
//! relaxed, a negative cycle is reachable from the source and the call
//! fails with [`GraphError::NegativeCycle`].
//!
//! Because edges are undirected, a single negative edge reachable from the
//! source is already a negative cycle (`a → b → a`). Negative cycles in
//! components the source cannot reach are not reported.

use tracing::{debug, instrument, warn};

use super::{ShortestPathEngine, ShortestPathTree};
use crate::error::GraphError;
use crate::graph::{Graph, NodeHandle};

/// Bellman-Ford shortest-path engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BellmanFord;

impl ShortestPathEngine for BellmanFord {
    #[instrument(name = "bellman_ford", skip(self, graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    fn tree<T>(
        &self,
        graph: &Graph<T>,
        source: NodeHandle,
    ) -> Result<ShortestPathTree, GraphError> {
        graph.ensure_member(source)?;

        let mut tree = ShortestPathTree::rooted(graph.node_count(), source);
        let rounds = graph.node_count().saturating_sub(1);
        let mut rounds_run = 0;

        for _ in 0..rounds {
            rounds_run += 1;
            let mut changed = false;
            for edge in graph.edges() {
                changed |= tree.relax(edge.a, edge.b, edge.weight);
                changed |= tree.relax(edge.b, edge.a, edge.weight);
            }
            if !changed {
                break;
            }
        }

        for edge in graph.edges() {
            let (at_a, at_b) = (tree.distance_of(edge.a), tree.distance_of(edge.b));
            let forward = at_a.extend(edge.weight);
            let backward = at_b.extend(edge.weight);
            // A reachable negative edge is a cycle on its own. Checking it
            // directly also covers distances pinned at `i64::MIN`, where the
            // relaxation test below can no longer make progress.
            let stuck = if edge.weight < 0 && at_a.is_finite() {
                Some(edge.b)
            } else if edge.weight < 0 && at_b.is_finite() {
                Some(edge.a)
            } else if forward.is_finite() && forward < at_b {
                Some(edge.b)
            } else if backward.is_finite() && backward < at_a {
                Some(edge.a)
            } else {
                None
            };

            if let Some(node) = stuck {
                let node_id = graph.id_of(node).unwrap_or_default();
                warn!(node_id, weight = edge.weight, "negative cycle detected");
                return Err(GraphError::NegativeCycle { node_id });
            }
        }

        debug!(rounds_run, "bellman-ford converged");
        Ok(tree)
    }
}
