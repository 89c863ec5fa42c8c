//! Known-topology regression tests for the engine's public API.
//!
//! Each test builds a small hand-crafted graph whose answers are worked out
//! by hand and hardcoded.

use wgraph_core::{
    BellmanFord, Dijkstra, Distance, Engine, Graph, GraphDocument, GraphError, NodeHandle, Place,
    ShortestPathEngine, bfs, dfs, has_cycle, is_connected, summarize, welsh_powell,
};

// ---------------------------------------------------------------------------
// Helper: build a graph from id/edge lists, resolving ids like a loader does
// ---------------------------------------------------------------------------

fn build(ids: &[i64], edges: &[(i64, i64, i64)]) -> Graph<()> {
    let mut graph = Graph::new();
    for &id in ids {
        graph.add_node(id, ());
    }
    for &(a, b, weight) in edges {
        let a = graph.node_by_id(a).expect("declared id");
        let b = graph.node_by_id(b).expect("declared id");
        graph.add_edge(a, b, weight).expect("member endpoints");
    }
    graph
}

fn h(graph: &Graph<()>, id: i64) -> NodeHandle {
    graph.node_by_id(id).expect("declared id")
}

fn ids(graph: &Graph<()>, path: &[NodeHandle]) -> Vec<i64> {
    path.iter()
        .map(|&node| graph.id_of(node).expect("member"))
        .collect()
}

// ===========================================================================
// Line: 1 -(5)- 2 -(7)- 3
// ===========================================================================

#[test]
fn line_distances_and_path() {
    let g = build(&[1, 2, 3], &[(1, 2, 5), (2, 3, 7)]);

    for engine in [Engine::Dijkstra, Engine::BellmanFord] {
        let d = engine.distances(&g, h(&g, 1)).expect("member source");
        assert_eq!(d[h(&g, 1)], Distance::Finite(0), "{engine}");
        assert_eq!(d[h(&g, 2)], Distance::Finite(5), "{engine}");
        assert_eq!(d[h(&g, 3)], Distance::Finite(12), "{engine}");

        let path = engine
            .path(&g, h(&g, 1), h(&g, 3))
            .expect("members")
            .expect("reachable");
        assert_eq!(ids(&g, &path), vec![1, 2, 3], "{engine}");
    }
}

#[test]
fn line_path_to_self_is_none() {
    let g = build(&[1, 2, 3], &[(1, 2, 5), (2, 3, 7)]);
    assert_eq!(Dijkstra.path(&g, h(&g, 2), h(&g, 2)), Ok(None));
    assert_eq!(BellmanFord.path(&g, h(&g, 2), h(&g, 2)), Ok(None));
}

// ===========================================================================
// Two isolated nodes
// ===========================================================================

#[test]
fn disconnected_pair() {
    let g = build(&[1, 2], &[]);

    assert!(!is_connected(&g));
    let d = Dijkstra.distances(&g, h(&g, 1)).expect("member");
    assert_eq!(d[h(&g, 2)], Distance::Infinite);
    assert_eq!(d.reachable_count(), 1);
    assert_eq!(Dijkstra.path(&g, h(&g, 1), h(&g, 2)), Ok(None));
    assert_eq!(BellmanFord.path(&g, h(&g, 1), h(&g, 2)), Ok(None));
}

// ===========================================================================
// Negative cycle
// ===========================================================================

#[test]
fn negative_cycle_fails_bellman_ford() {
    // Ring 1-2-3 with total weight 4 + 1 - 9 = -4.
    let g = build(&[1, 2, 3], &[(1, 2, 4), (2, 3, 1), (3, 1, -9)]);
    let err = BellmanFord
        .distances(&g, h(&g, 1))
        .expect_err("negative cycle");
    assert!(matches!(err, GraphError::NegativeCycle { .. }));
    assert!(g.has_negative_weight(), "Dijkstra's precondition is visibly violated");
}

// ===========================================================================
// Traversal orders on a small tree with a cross edge
//
//     1
//    / \
//   2   3
//   |   |
//   4 - 5
// ===========================================================================

#[test]
fn traversal_orders() {
    let g = build(
        &[1, 2, 3, 4, 5],
        &[(1, 2, 1), (1, 3, 1), (2, 4, 1), (3, 5, 1), (4, 5, 1)],
    );
    let bfs_order = bfs(&g, h(&g, 1)).expect("member");
    assert_eq!(ids(&g, &bfs_order), vec![1, 2, 3, 4, 5]);

    let dfs_order = dfs(&g, h(&g, 1)).expect("member");
    assert_eq!(ids(&g, &dfs_order), vec![1, 2, 4, 5, 3]);

    assert!(has_cycle(&g));
}

// ===========================================================================
// Cycles
// ===========================================================================

#[test]
fn three_ring_has_cycle_and_tree_does_not() {
    let ring = build(&[1, 2, 3], &[(1, 2, 1), (2, 3, 1), (3, 1, 1)]);
    assert!(has_cycle(&ring));

    let tree = build(
        &[1, 2, 3, 4, 5, 6],
        &[(1, 2, 1), (1, 3, 1), (2, 4, 1), (2, 5, 1), (3, 6, 1)],
    );
    assert!(is_connected(&tree));
    assert!(!has_cycle(&tree));
}

// ===========================================================================
// Coloring and summary on a 5-wheel (hub + 5-ring)
// ===========================================================================

#[test]
fn wheel_coloring_and_summary() {
    let g = build(
        &[0, 1, 2, 3, 4, 5],
        &[
            (0, 1, 1),
            (0, 2, 1),
            (0, 3, 1),
            (0, 4, 1),
            (0, 5, 1),
            (1, 2, 1),
            (2, 3, 1),
            (3, 4, 1),
            (4, 5, 1),
            (5, 1, 1),
        ],
    );

    let coloring = welsh_powell(&g);
    assert_eq!(coloring.color_of(h(&g, 0)), Some(0), "hub has the highest degree");
    // An odd ring around a hub needs 4 colors.
    assert_eq!(coloring.color_count(), 4);
    for edge in g.edges() {
        assert_ne!(coloring.color_of(edge.a), coloring.color_of(edge.b));
    }
    for set in coloring.independent_sets() {
        for (i, &a) in set.iter().enumerate() {
            for &b in &set[i + 1..] {
                assert!(
                    g.neighbors(a).expect("member").all(|(n, _)| n != b),
                    "independent set members must not be adjacent"
                );
            }
        }
    }

    let summary = summarize(&g);
    assert_eq!(summary.node_count, 6);
    assert_eq!(summary.edge_count, 10);
    assert!(summary.is_connected);
    assert!(summary.has_cycle);
    assert_eq!(summary.color_count, 4);
    assert!(summary.is_planar_heuristic);
    assert!(!summary.is_bipartite_heuristic);
    assert_eq!(summary.independent_set_count, 4);
}

// ===========================================================================
// Document → graph → query
// ===========================================================================

#[test]
fn document_round_trip_through_queries() {
    let doc: GraphDocument<Place> = GraphDocument::from_json_str(
        r#"{
            "nodes": [
                { "id": 1, "payload": { "label": "a", "x": 0.0, "y": 0.0 } },
                { "id": 2, "payload": { "label": "b", "x": 1.0, "y": 0.0 } },
                { "id": 3, "payload": { "label": "c", "x": 1.0, "y": 1.0 } }
            ],
            "edges": [
                { "a": 1, "b": 2, "weight": 5 },
                { "a": 2, "b": 3, "weight": 7 },
                { "a": 1, "b": 3, "weight": 15 }
            ]
        }"#,
    )
    .expect("valid document");
    let g = doc.into_graph().expect("consistent document");

    let a = g.node_by_id(1).expect("id 1");
    let c = g.node_by_id(3).expect("id 3");
    let path = Dijkstra.path(&g, a, c).expect("members").expect("reachable");
    let labels: Vec<String> = wgraph_core::export::path_points(&g, &path)
        .into_iter()
        .map(|p| p.payload.display_label(p.id))
        .collect();
    assert_eq!(labels, vec!["a", "b", "c"]);
}
