//! Data handed to rendering collaborators.
//!
//! The engine never draws anything. It supplies:
//!
//! - [`to_petgraph`]: the graph as a `petgraph` undirected graph whose node
//!   and edge indices equal this crate's handles, for callers that want
//!   petgraph's own algorithms or layouts;
//! - [`to_dot`]: Graphviz DOT text with optional coloring and an optional
//!   highlighted path;
//! - [`path_points`]: a resolved path as ordered `(id, payload)` pairs, e.g.
//!   payloads carrying coordinates for a map renderer.

use std::collections::HashSet;

use petgraph::dot::Dot;
use petgraph::graph::{EdgeReference, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::coloring::Coloring;
use crate::graph::{Graph, Node, NodeHandle};

/// Fill colors cycled through by color index.
pub const PALETTE: [&str; 8] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
];

/// Convert to a petgraph graph borrowing the payloads.
#[must_use]
pub fn to_petgraph<T>(graph: &Graph<T>) -> UnGraph<&T, i64> {
    let mut out = UnGraph::with_capacity(graph.node_count(), graph.edge_count());
    for node in graph.nodes() {
        out.add_node(&node.payload);
    }
    for edge in graph.edges() {
        out.add_edge(
            NodeIndex::new(edge.a.index()),
            NodeIndex::new(edge.b.index()),
            edge.weight,
        );
    }
    out
}

/// Optional decorations for [`to_dot`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DotStyle<'a> {
    /// Fill each node with the palette entry of its color.
    pub coloring: Option<&'a Coloring>,
    /// Draw the edges between consecutive path nodes in bold red.
    pub highlight: Option<&'a [NodeHandle]>,
}

/// Render DOT text. `label` names each node; edges are labeled with their
/// weight.
pub fn to_dot<T>(
    graph: &Graph<T>,
    label: impl Fn(&Node<T>) -> String,
    style: &DotStyle<'_>,
) -> String {
    let mut labeled: UnGraph<String, i64> =
        UnGraph::with_capacity(graph.node_count(), graph.edge_count());
    for node in graph.nodes() {
        labeled.add_node(label(node));
    }
    for edge in graph.edges() {
        labeled.add_edge(
            NodeIndex::new(edge.a.index()),
            NodeIndex::new(edge.b.index()),
            edge.weight,
        );
    }

    let on_path: HashSet<(usize, usize)> = style
        .highlight
        .map(|path| {
            path.windows(2)
                .flat_map(|pair| {
                    let (a, b) = (pair[0].index(), pair[1].index());
                    [(a, b), (b, a)]
                })
                .collect()
        })
        .unwrap_or_default();

    let edge_attrs = |_: &UnGraph<String, i64>, edge: EdgeReference<'_, i64>| {
        if on_path.contains(&(edge.source().index(), edge.target().index())) {
            "color=\"red\" penwidth=3 ".to_string()
        } else {
            String::new()
        }
    };
    let node_attrs = |_: &UnGraph<String, i64>, (idx, _): (NodeIndex, &String)| {
        style
            .coloring
            .and_then(|coloring| coloring.color_of(NodeHandle(idx.index())))
            .map(|color| {
                format!(
                    "style=filled fillcolor=\"{}\" ",
                    PALETTE[color % PALETTE.len()]
                )
            })
            .unwrap_or_default()
    };

    let dot = Dot::with_attr_getters(&labeled, &[], &edge_attrs, &node_attrs);
    format!("{dot}")
}

/// One stop on a resolved path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathPoint<'a, T> {
    pub id: i64,
    pub payload: &'a T,
}

/// Resolve path handles to `(id, payload)` pairs; handles that are not
/// members are skipped.
#[must_use]
pub fn path_points<'a, T>(graph: &'a Graph<T>, path: &[NodeHandle]) -> Vec<PathPoint<'a, T>> {
    path.iter()
        .filter_map(|&handle| graph.node(handle))
        .map(|node| PathPoint {
            id: node.id,
            payload: &node.payload,
        })
        .collect()
}
