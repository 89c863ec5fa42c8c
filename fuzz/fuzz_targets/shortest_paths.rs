#![no_main]

use libfuzzer_sys::fuzz_target;
use wgraph_core::{BellmanFord, Dijkstra, Graph, NodeHandle, ShortestPathEngine};

// Bytes are read as (a, b, weight) triples over a graph of `data[0] % 16 + 1`
// nodes. Both engines must agree whenever every weight is non-negative.
fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let count = usize::from(count % 16) + 1;

    let mut graph = Graph::new();
    let nodes: Vec<NodeHandle> = (0..count)
        .map(|i| graph.add_node(i64::try_from(i).unwrap_or_default(), ()))
        .collect();
    for triple in rest.chunks_exact(3) {
        let a = nodes[usize::from(triple[0]) % count];
        let b = nodes[usize::from(triple[1]) % count];
        let weight = i64::from(i8::from_ne_bytes([triple[2]]));
        let _ = graph.add_edge(a, b, weight);
    }

    let source = nodes[0];
    let bellman = BellmanFord.distances(&graph, source);
    if graph.has_negative_weight() {
        return;
    }
    let dijkstra = Dijkstra.distances(&graph, source).expect("source is a member");
    assert_eq!(Ok(dijkstra), bellman);
});
