//! Welsh-Powell greedy coloring and the independent sets it induces.
//!
//! # Algorithm
//!
//! 1. Order nodes by descending degree; equal degrees keep insertion order.
//! 2. Walk that order and give each node the lowest color index not already
//!    used by one of its colored neighbors.
//!
//! This is a heuristic. [`Coloring::color_count`] is an upper bound on the
//! chromatic number, never a claim that it is exact. Each color class is an
//! independent set by construction, but the classes are neither maximum nor
//! unique. A node with a self-loop cannot be properly colored and is treated
//! as if the loop were absent.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::{Graph, NodeHandle};

/// Color index per node, indexed by [`NodeHandle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coloring {
    colors: Vec<usize>,
    color_count: usize,
}

impl Coloring {
    #[must_use]
    pub fn color_of(&self, node: NodeHandle) -> Option<usize> {
        self.colors.get(node.index()).copied()
    }

    /// Number of distinct colors used. Zero for the empty graph.
    #[must_use]
    pub const fn color_count(&self) -> usize {
        self.color_count
    }

    /// `(node, color)` pairs in node insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeHandle, usize)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(idx, &color)| (NodeHandle(idx), color))
    }

    /// Nodes grouped by color class, in ascending color index; members in
    /// insertion order.
    #[must_use]
    pub fn independent_sets(&self) -> Vec<Vec<NodeHandle>> {
        let mut sets = vec![Vec::new(); self.color_count];
        for (node, color) in self.iter() {
            sets[color].push(node);
        }
        sets
    }

    /// Number of independent sets; equals [`Coloring::color_count`].
    #[must_use]
    pub const fn independent_set_count(&self) -> usize {
        self.color_count
    }
}

/// Color `graph` with the Welsh-Powell heuristic.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn welsh_powell<T>(graph: &Graph<T>) -> Coloring {
    let mut order: Vec<(NodeHandle, usize)> = graph
        .handles()
        .map(|node| (node, graph.neighbors_of(node).len()))
        .collect();
    // Stable: ties keep insertion order.
    order.sort_by(|a, b| b.1.cmp(&a.1));

    let mut colors: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut color_count = 0;
    let mut taken: Vec<bool> = Vec::new();

    for (node, degree) in order {
        taken.clear();
        taken.resize(degree + 1, false);
        for (next, _) in graph.neighbors_of(node) {
            if next == node {
                continue;
            }
            if let Some(color) = colors[next.index()].filter(|&c| c <= degree) {
                taken[color] = true;
            }
        }

        // A node has at most `degree` neighbors, so a free slot exists.
        let color = taken.iter().position(|used| !used).unwrap_or(degree);
        colors[node.index()] = Some(color);
        color_count = color_count.max(color + 1);
    }

    debug!(color_count, "welsh-powell complete");
    Coloring {
        colors: colors.into_iter().map(Option::unwrap_or_default).collect(),
        color_count,
    }
}
