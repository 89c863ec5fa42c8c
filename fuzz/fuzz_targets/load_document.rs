#![no_main]

use libfuzzer_sys::fuzz_target;
use wgraph_core::{GraphDocument, Place, summarize};

// Arbitrary text must either fail to load or yield a graph every analysis
// can run over without panicking.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(doc) = GraphDocument::<Place>::from_json_str(text) else {
        return;
    };
    let Ok(graph) = doc.into_graph() else {
        return;
    };

    let summary = summarize(&graph);
    assert_eq!(summary.node_count, graph.node_count());
    assert!(summary.color_count <= graph.node_count());
    let _ = serde_json::to_string(&summary);
});
