//! Error taxonomy for the graph engine.
//!
//! Every failure surfaced by the engine is a contract violation by the caller
//! (a handle that is not a member, an edge to a missing node, a negative cycle
//! fed to Bellman-Ford). None of them are transient, so nothing here is
//! retried. Unreachable targets are *not* errors: they are reported as
//! [`crate::Distance::Infinite`] or a `None` path.

use std::fmt;
use std::path::PathBuf;

/// Errors raised by [`crate::Graph`] mutation and the algorithms over it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node handle passed to a query is not a member of the graph.
    #[error("node {handle} is not a member of the graph")]
    NodeNotFound { handle: usize },

    /// An edge endpoint was not a member node at insertion time.
    #[error("edge endpoint {handle} is not a member of the graph")]
    InvalidReference { handle: usize },

    /// An edge handle passed to a mutation is not a member of the graph.
    #[error("edge {handle} is not a member of the graph")]
    EdgeNotFound { handle: usize },

    /// Bellman-Ford could still relax an edge after `|V|-1` rounds.
    #[error("negative cycle reachable from the source (detected at node id {node_id})")]
    NegativeCycle { node_id: i64 },

    /// Strict insertion rejected a node id that is already present.
    #[error("duplicate node id {id}")]
    DuplicateNodeId { id: i64 },
}

/// Errors raised while turning a graph document into a [`crate::Graph`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read graph document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON graph document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML graph document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported graph document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// An edge row references an id that no node row declared.
    #[error("edge {index} references unknown node id {id}")]
    UnknownNodeId { index: usize, id: i64 },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Machine-readable error codes for callers that translate engine errors
/// into user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NodeNotFound,
    InvalidReference,
    EdgeNotFound,
    NegativeCycle,
    DuplicateNodeId,
    DocumentUnreadable,
    DocumentMalformed,
    UnsupportedFormat,
    UnknownNodeId,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NodeNotFound => "E2001",
            Self::InvalidReference => "E2002",
            Self::EdgeNotFound => "E2003",
            Self::DuplicateNodeId => "E2004",
            Self::NegativeCycle => "E3001",
            Self::DocumentUnreadable => "E5001",
            Self::DocumentMalformed => "E5002",
            Self::UnsupportedFormat => "E5003",
            Self::UnknownNodeId => "E5004",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NodeNotFound => "Node not found",
            Self::InvalidReference => "Edge endpoint is not a graph member",
            Self::EdgeNotFound => "Edge not found",
            Self::DuplicateNodeId => "Duplicate node id",
            Self::NegativeCycle => "Negative cycle detected",
            Self::DocumentUnreadable => "Graph document could not be read",
            Self::DocumentMalformed => "Graph document is malformed",
            Self::UnsupportedFormat => "Unsupported graph document format",
            Self::UnknownNodeId => "Edge references an unknown node id",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::NodeNotFound => Some("Check the node id against the loaded document."),
            Self::InvalidReference | Self::UnknownNodeId => {
                Some("Declare every edge endpoint in the node list first.")
            }
            Self::EdgeNotFound => None,
            Self::DuplicateNodeId => Some("Node ids must be unique within one document."),
            Self::NegativeCycle => Some(
                "Undirected negative edges always form a negative cycle; remove them or use non-negative weights.",
            ),
            Self::DocumentUnreadable => Some("Check the path and read permissions."),
            Self::DocumentMalformed => Some("Fix the document syntax and retry."),
            Self::UnsupportedFormat => Some("Use a .json or .toml graph document."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl GraphError {
    /// Error code for this failure.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NodeNotFound { .. } => ErrorCode::NodeNotFound,
            Self::InvalidReference { .. } => ErrorCode::InvalidReference,
            Self::EdgeNotFound { .. } => ErrorCode::EdgeNotFound,
            Self::NegativeCycle { .. } => ErrorCode::NegativeCycle,
            Self::DuplicateNodeId { .. } => ErrorCode::DuplicateNodeId,
        }
    }
}

impl LoadError {
    /// Error code for this failure.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::DocumentUnreadable,
            Self::Json(_) | Self::Toml(_) => ErrorCode::DocumentMalformed,
            Self::UnsupportedFormat(_) => ErrorCode::UnsupportedFormat,
            Self::UnknownNodeId { .. } => ErrorCode::UnknownNodeId,
            Self::Graph(err) => err.code(),
        }
    }
}
