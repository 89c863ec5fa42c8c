//! Structural summary of a graph.
//!
//! # Fields
//!
//! - **node_count** / **edge_count**: raw sizes (parallel edges and loops
//!   count individually).
//! - **is_connected**, **component_count**, **has_cycle**: exact, from
//!   [`crate::traversal`].
//! - **color_count** / **independent_set_count**: size of the Welsh-Powell
//!   coloring; an upper bound on the chromatic number.
//! - **is_planar_heuristic**: Euler's edge bound. A simple planar graph with
//!   `V ≥ 3` has `E ≤ 3V − 6`, and `E ≤ 2V − 4` when it is triangle-free.
//!   Passing the bound does not prove planarity; failing it on a multigraph
//!   does not disprove it.
//! - **is_bipartite_heuristic**: the greedy coloring used at most two
//!   colors. Welsh-Powell can spend more colors on some bipartite graphs, so
//!   `false` is not a proof either.
//!
//! The two heuristics are rough signals for reports. Do not treat them as
//! decision procedures.

use serde::Serialize;
use tracing::instrument;

use crate::coloring::{Coloring, welsh_powell};
use crate::graph::Graph;
use crate::traversal::{connected_components, has_cycle};

/// Whether the coloring suggests the graph is bipartite (≤ 2 colors).
#[must_use]
pub const fn is_bipartite_heuristic(coloring: &Coloring) -> bool {
    coloring.color_count() <= 2
}

/// Whether the graph passes Euler's edge-count bound for planar graphs.
///
/// The triangle-free bound `E ≤ 2V − 4` is used when the coloring suggests
/// bipartiteness; otherwise `E ≤ 3V − 6`. Graphs with fewer than three nodes
/// always pass.
#[must_use]
pub fn is_planar_heuristic<T>(graph: &Graph<T>, coloring: &Coloring) -> bool {
    let nodes = graph.node_count();
    if nodes < 3 {
        return true;
    }
    let edges = graph.edge_count();
    if is_bipartite_heuristic(coloring) {
        edges <= 2 * nodes - 4
    } else {
        edges <= 3 * nodes - 6
    }
}

/// Derived structural properties of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub is_connected: bool,
    pub component_count: usize,
    pub has_cycle: bool,
    pub color_count: usize,
    pub is_planar_heuristic: bool,
    pub is_bipartite_heuristic: bool,
    pub independent_set_count: usize,
}

impl StructuralSummary {
    /// Compute the summary, reusing an existing coloring.
    #[must_use]
    pub fn with_coloring<T>(graph: &Graph<T>, coloring: &Coloring) -> Self {
        let component_count = connected_components(graph).len();
        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            is_connected: component_count <= 1,
            component_count,
            has_cycle: has_cycle(graph),
            color_count: coloring.color_count(),
            is_planar_heuristic: is_planar_heuristic(graph, coloring),
            is_bipartite_heuristic: is_bipartite_heuristic(coloring),
            independent_set_count: coloring.independent_set_count(),
        }
    }
}

/// Color the graph and compute its [`StructuralSummary`].
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn summarize<T>(graph: &Graph<T>) -> StructuralSummary {
    StructuralSummary::with_coloring(graph, &welsh_powell(graph))
}
