//! `wg stats`: structural summary of a graph document.

use crate::cmd::{ids_of, load_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use wgraph_core::{Graph, StructuralSummary, connected_components, summarize};

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Graph document (`.json` or `.toml`).
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub summary: StructuralSummary,
    pub has_negative_weight: bool,
    /// Node ids of each connected component, in discovery order.
    pub components: Vec<Vec<i64>>,
}

/// Summarize `graph`: counts, heuristics and connected components.
#[must_use]
pub fn build_report<T>(graph: &Graph<T>) -> StatsReport {
    let components = connected_components(graph)
        .iter()
        .map(|component| ids_of(graph, component))
        .collect();
    StatsReport {
        summary: summarize(graph),
        has_negative_weight: graph.has_negative_weight(),
        components,
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Execute `wg stats <file>`.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or rendering fails.
pub fn run_stats(args: &StatsArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.file)?;
    let report = build_report(&graph);

    render_mode(
        output,
        &report,
        |r, w| {
            let s = &r.summary;
            writeln!(w, "nodes\t{}", s.node_count)?;
            writeln!(w, "edges\t{}", s.edge_count)?;
            writeln!(w, "connected\t{}", s.is_connected)?;
            writeln!(w, "components\t{}", s.component_count)?;
            writeln!(w, "has_cycle\t{}", s.has_cycle)?;
            writeln!(w, "colors\t{}", s.color_count)?;
            writeln!(w, "independent_sets\t{}", s.independent_set_count)?;
            writeln!(w, "planar_heuristic\t{}", s.is_planar_heuristic)?;
            writeln!(w, "bipartite_heuristic\t{}", s.is_bipartite_heuristic)?;
            writeln!(w, "negative_weights\t{}", r.has_negative_weight)
        },
        |r, w| {
            let s = &r.summary;
            pretty_section(w, "Graph summary")?;
            pretty_kv(w, "Nodes", s.node_count.to_string())?;
            pretty_kv(w, "Edges", s.edge_count.to_string())?;
            pretty_kv(w, "Connected", yes_no(s.is_connected))?;
            pretty_kv(w, "Components", s.component_count.to_string())?;
            pretty_kv(w, "Has cycle", yes_no(s.has_cycle))?;
            pretty_kv(w, "Colors", s.color_count.to_string())?;
            pretty_kv(w, "Independent sets", s.independent_set_count.to_string())?;
            pretty_kv(w, "Negative edges", yes_no(r.has_negative_weight))?;
            writeln!(w)?;
            pretty_section(w, "Heuristics")?;
            pretty_kv(w, "Planar", yes_no(s.is_planar_heuristic))?;
            pretty_kv(w, "Bipartite", yes_no(s.is_bipartite_heuristic))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::fixtures;

    #[test]
    fn report_for_line_with_isolated_node() {
        let report = build_report(&fixtures::line());
        assert_eq!(report.summary.node_count, 4);
        assert_eq!(report.summary.edge_count, 2);
        assert!(!report.summary.is_connected);
        assert_eq!(report.summary.component_count, 2);
        assert!(!report.summary.has_cycle);
        assert!(!report.has_negative_weight);
        assert_eq!(report.components, vec![vec![1, 2, 3], vec![4]]);
    }

    #[test]
    fn json_report_is_flat() {
        let json = serde_json::to_value(build_report(&fixtures::line())).expect("serialize");
        assert_eq!(json["node_count"], 4);
        assert_eq!(json["color_count"], 2);
        assert_eq!(json["is_bipartite_heuristic"], true);
        assert_eq!(json["components"][1][0], 4);
    }
}
