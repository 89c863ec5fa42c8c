//! `wg export`: Graphviz DOT for an external renderer.
//!
//! `--color` fills nodes by their Welsh-Powell color; `--path-from` and
//! `--path-to` draw the cheapest path between two nodes in bold.

use crate::cmd::{load_graph, resolve_node};
use crate::output::{OutputMode, render};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use wgraph_core::export::{DotStyle, to_dot};
use wgraph_core::{Engine, Graph, Place, ShortestPathEngine, welsh_powell};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Graph document (`.json` or `.toml`).
    pub file: PathBuf,

    /// Fill nodes by color class.
    #[arg(long)]
    pub color: bool,

    /// Source id of a path to highlight.
    #[arg(long, requires = "path_to", allow_negative_numbers = true)]
    pub path_from: Option<i64>,

    /// Target id of a path to highlight.
    #[arg(long, requires = "path_from", allow_negative_numbers = true)]
    pub path_to: Option<i64>,

    /// Shortest-path engine for the highlighted path.
    #[arg(long)]
    pub engine: Option<Engine>,
}

#[derive(Debug, Serialize)]
pub struct ExportReport {
    pub format: &'static str,
    /// Ids of the highlighted path; empty when none was requested or found.
    pub highlighted: Vec<i64>,
    pub dot: String,
}

/// Render `graph` as DOT.
///
/// # Errors
///
/// Returns an error if a path endpoint is unknown, or the engine fails.
pub fn build_report(
    graph: &Graph<Place>,
    color: bool,
    path: Option<(i64, i64)>,
    engine: Engine,
) -> anyhow::Result<ExportReport> {
    let coloring = color.then(|| welsh_powell(graph));

    let highlight = match path {
        Some((from, to)) => {
            let source = resolve_node(graph, from)?;
            let target = resolve_node(graph, to)?;
            let found = engine.path(graph, source, target)?;
            if found.is_none() {
                debug!(from, to, "no path to highlight");
            }
            found.unwrap_or_default()
        }
        None => Vec::new(),
    };

    let style = DotStyle {
        coloring: coloring.as_ref(),
        highlight: (!highlight.is_empty()).then_some(highlight.as_slice()),
    };
    let dot = to_dot(graph, |node| node.payload.display_label(node.id), &style);

    Ok(ExportReport {
        format: "dot",
        highlighted: highlight.iter().filter_map(|&n| graph.id_of(n)).collect(),
        dot,
    })
}

/// Execute `wg export <file>`.
///
/// Pretty and text modes print the bare DOT document so it can be piped
/// into `dot -Tsvg`.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, a path endpoint is
/// unknown, the engine fails, or rendering fails.
pub fn run_export(args: &ExportArgs, engine: Engine, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.file)?;
    let path = args.path_from.zip(args.path_to);
    let report = build_report(&graph, args.color, path, engine)?;

    render(output, &report, |r, w| write!(w, "{}", r.dot))
}
