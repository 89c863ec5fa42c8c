//! `wg color`: Welsh-Powell coloring and the independent sets it induces.

use crate::cmd::{ids_of, load_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use wgraph_core::analysis::{is_bipartite_heuristic, is_planar_heuristic};
use wgraph_core::{Graph, welsh_powell};

#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Graph document (`.json` or `.toml`).
    pub file: PathBuf,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NodeColor {
    pub id: i64,
    pub color: usize,
}

#[derive(Debug, Serialize)]
pub struct ColorReport {
    pub color_count: usize,
    pub is_bipartite_heuristic: bool,
    pub is_planar_heuristic: bool,
    pub colors: Vec<NodeColor>,
    /// Node ids per color, indexed by color.
    pub independent_sets: Vec<Vec<i64>>,
}

pub fn build_report<T>(graph: &Graph<T>) -> ColorReport {
    let coloring = welsh_powell(graph);
    let colors = coloring
        .iter()
        .filter_map(|(node, color)| {
            let id = graph.id_of(node)?;
            Some(NodeColor { id, color })
        })
        .collect();
    let independent_sets = coloring
        .independent_sets()
        .iter()
        .map(|set| ids_of(graph, set))
        .collect();

    ColorReport {
        color_count: coloring.color_count(),
        is_bipartite_heuristic: is_bipartite_heuristic(&coloring),
        is_planar_heuristic: is_planar_heuristic(graph, &coloring),
        colors,
        independent_sets,
    }
}

/// Execute `wg color <file>`.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or rendering fails.
pub fn run_color(args: &ColorArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.file)?;
    let report = build_report(&graph);

    render_mode(
        output,
        &report,
        |r, w| {
            for entry in &r.colors {
                writeln!(w, "{}\t{}", entry.id, entry.color)?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, "Welsh-Powell coloring")?;
            pretty_kv(w, "Colors", r.color_count.to_string())?;
            pretty_kv(
                w,
                "Bipartite",
                if r.is_bipartite_heuristic { "likely" } else { "no" },
            )?;
            pretty_kv(
                w,
                "Planar",
                if r.is_planar_heuristic { "possibly" } else { "no" },
            )?;
            writeln!(w)?;
            for (color, set) in r.independent_sets.iter().enumerate() {
                let ids: Vec<String> = set.iter().map(i64::to_string).collect();
                writeln!(w, "  color {color:<3} {}", ids.join(", "))?;
            }
            Ok(())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::fixtures;

    #[test]
    fn line_is_two_colored() {
        let report = build_report(&fixtures::line());
        assert_eq!(report.color_count, 2);
        assert!(report.is_bipartite_heuristic);
        assert!(report.is_planar_heuristic);
        // Degree order: 2 (deg 2) first, then 1, 3, 4 in document order.
        assert_eq!(
            report.colors,
            vec![
                NodeColor { id: 1, color: 1 },
                NodeColor { id: 2, color: 0 },
                NodeColor { id: 3, color: 1 },
                NodeColor { id: 4, color: 0 },
            ]
        );
        assert_eq!(report.independent_sets, vec![vec![2, 4], vec![1, 3]]);
    }

    #[test]
    fn triangle_needs_three_colors() {
        let mut g = fixtures::line();
        let a = g.node_by_id(1).expect("id 1");
        let c = g.node_by_id(3).expect("id 3");
        g.add_edge(a, c, 1).expect("edge");

        let report = build_report(&g);
        assert_eq!(report.color_count, 3);
        assert!(!report.is_bipartite_heuristic);
        assert_eq!(report.independent_sets.len(), 3);
    }
}
