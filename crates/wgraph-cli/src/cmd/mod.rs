//! Subcommand handlers.
//!
//! Each handler loads the document named on the command line, resolves the
//! node ids it was given to handles, runs one engine operation and renders
//! a report keyed by node id.

pub mod color;
pub mod distances;
pub mod export;
pub mod path;
pub mod stats;
pub mod traverse;

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use wgraph_core::{Graph, GraphDocument, NodeHandle, Place};

/// A node id given on the command line that the document does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingNode {
    pub id: i64,
}

impl fmt::Display for MissingNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node id {} is not declared in the document", self.id)
    }
}

impl std::error::Error for MissingNode {}

/// Read and build the graph stored at `path` (`.json` or `.toml`).
///
/// # Errors
///
/// Returns the loader's error, with the path as context.
pub fn load_graph(path: &Path) -> Result<Graph<Place>> {
    GraphDocument::<Place>::from_path(path)
        .and_then(GraphDocument::into_graph)
        .with_context(|| format!("Failed to load {}", path.display()))
}

/// Map a node id to its handle.
///
/// # Errors
///
/// Returns [`MissingNode`] when the id is not in the graph.
pub fn resolve_node<T>(graph: &Graph<T>, id: i64) -> Result<NodeHandle> {
    graph
        .node_by_id(id)
        .ok_or_else(|| MissingNode { id }.into())
}

/// Node ids along `path`; handles outside the graph are skipped.
pub fn ids_of<T>(graph: &Graph<T>, path: &[NodeHandle]) -> Vec<i64> {
    path.iter().filter_map(|&node| graph.id_of(node)).collect()
}

/// Display label of a member node, falling back to its id.
pub fn label_of(graph: &Graph<Place>, node: NodeHandle) -> String {
    graph
        .node(node)
        .map(|n| n.payload.display_label(n.id))
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use wgraph_core::{Graph, Place};

    /// `1 -(5)- 2 -(7)- 3` with labels a/b/c, plus an isolated node 4.
    pub fn line() -> Graph<Place> {
        let mut g = Graph::new();
        for (id, label) in [(1, "a"), (2, "b"), (3, "c")] {
            g.add_node(
                id,
                Place {
                    label: Some(label.to_string()),
                    x: None,
                    y: None,
                },
            );
        }
        g.add_node(4, Place::default());
        let h = |g: &Graph<Place>, id| g.node_by_id(id).expect("declared");
        let (a, b, c) = (h(&g, 1), h(&g, 2), h(&g, 3));
        g.add_edge(a, b, 5).expect("edge");
        g.add_edge(b, c, 7).expect("edge");
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn resolve_node_reports_missing_id() {
        let g = fixtures::line();
        assert!(resolve_node(&g, 2).is_ok());
        let err = resolve_node(&g, 99).expect_err("missing");
        assert_eq!(
            err.downcast_ref::<MissingNode>(),
            Some(&MissingNode { id: 99 })
        );
    }

    #[test]
    fn labels_fall_back_to_ids() {
        let g = fixtures::line();
        let a = g.node_by_id(1).expect("id 1");
        let lone = g.node_by_id(4).expect("id 4");
        assert_eq!(label_of(&g, a), "a");
        assert_eq!(label_of(&g, lone), "4");
        assert_eq!(ids_of(&g, &[lone, a]), vec![4, 1]);
    }

    #[test]
    fn load_graph_adds_path_context() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("tempfile");
        write!(file, "{{ \"nodes\": [{{ \"id\": 1 }}], \"edges\": [{{ \"a\": 1, \"b\": 2, \"weight\": 1 }}] }}")
            .expect("write");

        let err = load_graph(file.path()).expect_err("unknown id 2");
        assert!(format!("{err:#}").starts_with("Failed to load"));
        assert!(err.downcast_ref::<wgraph_core::LoadError>().is_some());
    }
}
