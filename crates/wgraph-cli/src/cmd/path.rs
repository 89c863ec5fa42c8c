//! `wg path`: cheapest path between two nodes.
//!
//! An unreachable target is not an error: the report says so and the
//! command succeeds.

use crate::cmd::{load_graph, resolve_node};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use wgraph_core::export::{PathPoint, path_points};
use wgraph_core::{Distance, Engine, Graph, Place, ShortestPathEngine};

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Graph document (`.json` or `.toml`).
    pub file: PathBuf,

    /// Id of the source node.
    #[arg(long, allow_negative_numbers = true)]
    pub from: i64,

    /// Id of the target node.
    #[arg(long, allow_negative_numbers = true)]
    pub to: i64,

    /// Shortest-path engine: `dijkstra` or `bellman-ford`.
    #[arg(long)]
    pub engine: Option<Engine>,
}

#[derive(Debug, Serialize)]
pub struct PathReport<'g> {
    pub from: i64,
    pub to: i64,
    pub engine: Engine,
    pub found: bool,
    /// `null` when the target is unreachable.
    pub distance: Distance,
    /// Stops from source to target; empty when no path was found.
    pub stops: Vec<PathPoint<'g, Place>>,
}

/// Find the path from `from` to `to` with `engine`.
///
/// A node has no path to itself, so `from == to` reports `found: false`
/// with distance zero.
///
/// # Errors
///
/// Returns an error if either id is unknown, or the engine fails.
pub fn build_report(
    graph: &Graph<Place>,
    from: i64,
    to: i64,
    engine: Engine,
) -> anyhow::Result<PathReport<'_>> {
    let source = resolve_node(graph, from)?;
    let target = resolve_node(graph, to)?;

    let tree = engine.tree(graph, source)?;
    let path = tree.path_to(target).unwrap_or_default();

    Ok(PathReport {
        from,
        to,
        engine,
        found: !path.is_empty(),
        distance: tree.distance(target).unwrap_or(Distance::Infinite),
        stops: path_points(graph, &path),
    })
}

/// Execute `wg path <file> --from <id> --to <id>`.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, an id is unknown,
/// the engine fails, or rendering fails.
pub fn run_path(args: &PathArgs, engine: Engine, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.file)?;
    let report = build_report(&graph, args.from, args.to, engine)?;

    render_mode(
        output,
        &report,
        |r, w| {
            if !r.found {
                return writeln!(w, "no path");
            }
            let ids: Vec<String> = r.stops.iter().map(|stop| stop.id.to_string()).collect();
            writeln!(w, "{}\t{}", r.distance, ids.join(" "))
        },
        |r, w| {
            pretty_section(w, &format!("Path {} → {}", r.from, r.to))?;
            pretty_kv(w, "Engine", r.engine.as_str())?;
            if !r.found {
                return pretty_kv(w, "Result", "no path");
            }
            pretty_kv(w, "Distance", r.distance.to_string())?;
            pretty_kv(w, "Hops", (r.stops.len() - 1).to_string())?;
            writeln!(w)?;
            for stop in &r.stops {
                let label = stop.payload.display_label(stop.id);
                match (stop.payload.x, stop.payload.y) {
                    (Some(x), Some(y)) => writeln!(w, "  {:<8} {label} ({x}, {y})", stop.id)?,
                    _ => writeln!(w, "  {:<8} {label}", stop.id)?,
                }
            }
            Ok(())
        },
    )
}
