//! `wg distances`: single-source shortest distances to every node.

use crate::cmd::{label_of, load_graph, resolve_node};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use wgraph_core::{Distance, Engine, Graph, Place, ShortestPathEngine};

#[derive(Args, Debug)]
pub struct DistancesArgs {
    /// Graph document (`.json` or `.toml`).
    pub file: PathBuf,

    /// Id of the source node.
    #[arg(long, allow_negative_numbers = true)]
    pub from: i64,

    /// Shortest-path engine: `dijkstra` or `bellman-ford`.
    #[arg(long)]
    pub engine: Option<Engine>,
}

#[derive(Debug, Serialize)]
pub struct DistanceRow {
    pub id: i64,
    pub label: String,
    /// `null` when unreachable.
    pub distance: Distance,
}

#[derive(Debug, Serialize)]
pub struct DistancesReport {
    pub from: i64,
    pub engine: Engine,
    pub reachable: usize,
    /// One row per node, in document order.
    pub distances: Vec<DistanceRow>,
}

/// Compute distances from `from` with `engine`.
///
/// # Errors
///
/// Returns an error if `from` is unknown, or the engine fails (a negative
/// cycle under Bellman-Ford).
pub fn build_report(
    graph: &Graph<Place>,
    from: i64,
    engine: Engine,
) -> anyhow::Result<DistancesReport> {
    let source = resolve_node(graph, from)?;
    let distances = engine.distances(graph, source)?;

    let rows = distances
        .iter()
        .filter_map(|(node, distance)| {
            let id = graph.id_of(node)?;
            Some(DistanceRow {
                id,
                label: label_of(graph, node),
                distance,
            })
        })
        .collect();

    Ok(DistancesReport {
        from,
        engine,
        reachable: distances.reachable_count(),
        distances: rows,
    })
}

/// Execute `wg distances <file> --from <id>`.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, the source id is
/// unknown, the engine fails, or rendering fails.
pub fn run_distances(
    args: &DistancesArgs,
    engine: Engine,
    output: OutputMode,
) -> anyhow::Result<()> {
    let graph = load_graph(&args.file)?;
    let report = build_report(&graph, args.from, engine)?;

    render_mode(
        output,
        &report,
        |r, w| {
            for row in &r.distances {
                writeln!(w, "{}\t{}", row.id, row.distance)?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, "Shortest distances")?;
            pretty_kv(w, "Source", r.from.to_string())?;
            pretty_kv(w, "Engine", r.engine.as_str())?;
            pretty_kv(
                w,
                "Reachable",
                format!("{} of {}", r.reachable, r.distances.len()),
            )?;
            writeln!(w)?;
            writeln!(w, "{:<8} {:<20} {:>10}", "ID", "LABEL", "DISTANCE")?;
            for row in &r.distances {
                writeln!(
                    w,
                    "{:<8} {:<20} {:>10}",
                    row.id,
                    row.label,
                    row.distance.to_string()
                )?;
            }
            Ok(())
        },
    )
}
