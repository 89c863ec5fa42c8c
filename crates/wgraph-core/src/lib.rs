#![forbid(unsafe_code)]
//! wgraph-core library.
//!
//! A weighted-graph engine: an undirected node/edge container plus the
//! classical algorithms over it.
//!
//! ```text
//! GraphDocument rows ──load::into_graph──▶ Graph<T>
//!                                          │
//!            ┌───────────────┬─────────────┼──────────────┬──────────────┐
//!            ▼               ▼             ▼              ▼              ▼
//!      traversal::bfs  traversal::    shortest_path   coloring::    analysis::
//!      traversal::dfs  has_cycle      Dijkstra /      welsh_powell  summarize
//!                      is_connected   BellmanFord
//! ```
//!
//! The engine is synchronous and does no I/O past [`load`]. Algorithms take
//! `&Graph<T>`, so a graph cannot be mutated while one of them runs.
//!
//! # Conventions
//!
//! - **Errors**: [`GraphError`] / [`LoadError`] (`thiserror`), each mapped
//!   to a stable [`ErrorCode`].
//! - **Logging**: `tracing` macros (`debug!`, `warn!`, `trace!`); the binary
//!   owns the subscriber.

pub mod analysis;
pub mod coloring;
pub mod error;
pub mod export;
pub mod graph;
pub mod load;
pub mod shortest_path;
pub mod traversal;

pub use analysis::{StructuralSummary, summarize};
pub use coloring::{Coloring, welsh_powell};
pub use error::{ErrorCode, GraphError, LoadError};
pub use graph::{Edge, EdgeHandle, Graph, Neighbors, Node, NodeHandle};
pub use load::{EdgeRecord, GraphDocument, NodeRecord, Place};
pub use shortest_path::{
    BellmanFord, Dijkstra, Distance, Distances, Engine, ShortestPathEngine, ShortestPathTree,
};
pub use traversal::{bfs, connected_components, dfs, has_cycle, is_connected};
