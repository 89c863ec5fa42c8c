//! `wg traverse`: breadth- or depth-first visit order from a start node.

use crate::cmd::{ids_of, label_of, load_graph, resolve_node};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use wgraph_core::{Graph, Place, bfs, dfs};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Bfs,
    Dfs,
}

#[derive(Args, Debug)]
pub struct TraverseArgs {
    /// Graph document (`.json` or `.toml`).
    pub file: PathBuf,

    /// Id of the start node.
    #[arg(long, allow_negative_numbers = true)]
    pub from: i64,

    /// Visit order.
    #[arg(long, value_enum, default_value_t = Order::Bfs)]
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct TraverseReport {
    pub from: i64,
    pub order: Order,
    /// Ids in visit order; only the start node's component appears.
    pub visited: Vec<i64>,
    #[serde(skip)]
    labels: Vec<String>,
}

/// Run the traversal over `graph`.
///
/// # Errors
///
/// Returns an error if `from` is not declared in the graph.
pub fn build_report(
    graph: &Graph<Place>,
    from: i64,
    order: Order,
) -> anyhow::Result<TraverseReport> {
    let start = resolve_node(graph, from)?;
    let visited = match order {
        Order::Bfs => bfs(graph, start)?,
        Order::Dfs => dfs(graph, start)?,
    };
    Ok(TraverseReport {
        from,
        order,
        visited: ids_of(graph, &visited),
        labels: visited.iter().map(|&node| label_of(graph, node)).collect(),
    })
}

/// Execute `wg traverse <file> --from <id>`.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, the start id is
/// unknown, or rendering fails.
pub fn run_traverse(args: &TraverseArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.file)?;
    let report = build_report(&graph, args.from, args.order)?;

    render_mode(
        output,
        &report,
        |r, w| {
            for id in &r.visited {
                writeln!(w, "{id}")?;
            }
            Ok(())
        },
        |r, w| {
            let heading = match r.order {
                Order::Bfs => "Breadth-first order",
                Order::Dfs => "Depth-first order",
            };
            pretty_section(w, heading)?;
            pretty_kv(w, "Start", r.from.to_string())?;
            pretty_kv(w, "Reached", r.visited.len().to_string())?;
            writeln!(w)?;
            for (step, (id, label)) in r.visited.iter().zip(&r.labels).enumerate() {
                writeln!(w, "{:>4}  {id:<8} {label}", step + 1)?;
            }
            Ok(())
        },
    )
}
