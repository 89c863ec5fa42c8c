//! Graph construction from row-shaped documents.
//!
//! # Overview
//!
//! A [`GraphDocument`] is the construction input of the engine: an ordered
//! list of node rows `(id, payload)` and an ordered list of edge rows
//! `(a, b, weight)` where `a` and `b` are external node ids. Documents are
//! read from JSON or TOML text:
//!
//! ```json
//! {
//!   "nodes": [{ "id": 1, "payload": { "label": "depot" } }, { "id": 2 }],
//!   "edges": [{ "a": 1, "b": 2, "weight": 5 }]
//! }
//! ```
//!
//! ```toml
//! [[nodes]]
//! id = 1
//! payload = { label = "depot", x = 0.0, y = 0.0 }
//!
//! [[nodes]]
//! id = 2
//!
//! [[edges]]
//! a = 1
//! b = 2
//! weight = 5
//! ```
//!
//! [`GraphDocument::into_graph`] inserts nodes strictly (duplicate ids are
//! rejected), resolves edge endpoints through the id index, and adds edges
//! in document order.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::LoadError;
use crate::graph::Graph;

/// A node row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct NodeRecord<T> {
    pub id: i64,
    #[serde(default)]
    pub payload: T,
}

/// An edge row; endpoints are external node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub a: i64,
    pub b: i64,
    pub weight: i64,
}

/// Ordered node and edge rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct GraphDocument<T> {
    #[serde(default)]
    pub nodes: Vec<NodeRecord<T>>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl<T> Default for GraphDocument<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<T: DeserializeOwned + Default> GraphDocument<T> {
    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] on malformed input.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Toml`] on malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a document, picking the format from the file extension
    /// (`.json` or `.toml`).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] when the file cannot be read,
    /// [`LoadError::UnsupportedFormat`] for other extensions, and the parse
    /// errors of the chosen format.
    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, LoadError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        };

        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = parse(&text)?;
        debug!(
            nodes = doc.nodes.len(),
            edges = doc.edges.len(),
            "graph document parsed"
        );
        Ok(doc)
    }
}

impl<T> GraphDocument<T> {
    /// Build a [`Graph`] from the rows.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Graph`] wrapping
    /// [`crate::GraphError::DuplicateNodeId`] for a repeated node id, and
    /// [`LoadError::UnknownNodeId`] for an edge row naming an undeclared id.
    pub fn into_graph(self) -> Result<Graph<T>, LoadError> {
        let mut graph = Graph::with_capacity(self.nodes.len(), self.edges.len());

        for record in self.nodes {
            graph.try_add_node(record.id, record.payload)?;
        }

        for (index, record) in self.edges.into_iter().enumerate() {
            let resolve = |id| {
                graph
                    .node_by_id(id)
                    .ok_or(LoadError::UnknownNodeId { index, id })
            };
            let a = resolve(record.a)?;
            let b = resolve(record.b)?;
            graph.add_edge(a, b, record.weight)?;
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        Ok(graph)
    }
}

/// Stock payload for documents: an optional label and optional 2-D
/// coordinates that renderers can place the node at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Place {
    /// The label, or the node id when no label was given.
    #[must_use]
    pub fn display_label(&self, id: i64) -> String {
        self.label.clone().unwrap_or_else(|| id.to_string())
    }
}
