//! E2E CLI tests covering every subcommand, the output modes, config
//! precedence and error rendering.
//!
//! Each test runs `wg` as a subprocess in an isolated temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Triangle 1-2-3 with a long 1-3 edge, a pendant 4 off 3, and an
/// isolated node 5.
const ROADS: &str = r#"{
    "nodes": [
        { "id": 1, "payload": { "label": "depot", "x": 0.0, "y": 0.0 } },
        { "id": 2, "payload": { "label": "mill" } },
        { "id": 3, "payload": { "label": "dock" } },
        { "id": 4 },
        { "id": 5, "payload": { "label": "island" } }
    ],
    "edges": [
        { "a": 1, "b": 2, "weight": 5 },
        { "a": 2, "b": 3, "weight": 7 },
        { "a": 1, "b": 3, "weight": 15 },
        { "a": 3, "b": 4, "weight": 1 }
    ]
}"#;

/// Build a Command targeting the `wg` binary, rooted in `dir`.
fn wg_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wg"));
    cmd.current_dir(dir);
    cmd.env("WGRAPH_LOG", "error");
    cmd.env_remove("WGRAPH_ENGINE");
    cmd.env_remove("WGRAPH_FORMAT");
    cmd
}

fn write_doc(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write document");
    path
}

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let doc = write_doc(dir.path(), "roads.json", ROADS);
    (dir, doc)
}

/// Run with `--format json` and parse stdout.
fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = wg_cmd(dir)
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("wg should not crash");
    assert!(
        output.status.success(),
        "wg {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_json_summary() {
    let (dir, doc) = setup();
    let json = run_json(dir.path(), &["stats", arg(&doc)]);

    assert_eq!(json["node_count"], 5);
    assert_eq!(json["edge_count"], 4);
    assert_eq!(json["is_connected"], false);
    assert_eq!(json["component_count"], 2);
    assert_eq!(json["has_cycle"], true);
    assert_eq!(json["color_count"], 3);
    assert_eq!(json["is_bipartite_heuristic"], false);
    assert_eq!(json["has_negative_weight"], false);
    assert_eq!(json["components"], serde_json::json!([[1, 2, 3, 4], [5]]));
}

#[test]
fn stats_text_is_tab_separated() {
    let (dir, doc) = setup();
    wg_cmd(dir.path())
        .args(["stats", arg(&doc), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes\t5"))
        .stdout(predicate::str::contains("connected\tfalse"));
}

#[test]
fn stats_pretty_has_sections() {
    let (dir, doc) = setup();
    wg_cmd(dir.path())
        .args(["stats", arg(&doc), "--format", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph summary"))
        .stdout(predicate::str::contains("Heuristics"));
}

#[test]
fn stats_reads_toml_documents() {
    let dir = TempDir::new().expect("tempdir");
    let doc = write_doc(
        dir.path(),
        "g.toml",
        "[[nodes]]\nid = 1\n\n[[nodes]]\nid = 2\n\n[[edges]]\na = 1\nb = 2\nweight = 3\n",
    );
    let json = run_json(dir.path(), &["stats", arg(&doc)]);
    assert_eq!(json["node_count"], 2);
    assert_eq!(json["is_connected"], true);
    assert_eq!(json["has_cycle"], false);
}

// ---------------------------------------------------------------------------
// traverse
// ---------------------------------------------------------------------------

#[test]
fn traverse_bfs_and_dfs() {
    let (dir, doc) = setup();

    let bfs = run_json(dir.path(), &["traverse", arg(&doc), "--from", "1"]);
    assert_eq!(bfs["order"], "bfs");
    assert_eq!(bfs["visited"], serde_json::json!([1, 2, 3, 4]));

    let dfs = run_json(
        dir.path(),
        &["traverse", arg(&doc), "--from", "1", "--order", "dfs"],
    );
    assert_eq!(dfs["visited"], serde_json::json!([1, 2, 3, 4]));

    let island = run_json(dir.path(), &["traverse", arg(&doc), "--from", "5"]);
    assert_eq!(island["visited"], serde_json::json!([5]));
}

#[test]
fn traverse_text_prints_one_id_per_line() {
    let (dir, doc) = setup();
    wg_cmd(dir.path())
        .args(["traverse", arg(&doc), "--from", "4", "--format", "text"])
        .assert()
        .success()
        .stdout("4\n3\n2\n1\n");
}

// ---------------------------------------------------------------------------
// distances / path
// ---------------------------------------------------------------------------

#[test]
fn distances_from_depot() {
    let (dir, doc) = setup();
    for engine in ["dijkstra", "bellman-ford"] {
        let json = run_json(
            dir.path(),
            &["distances", arg(&doc), "--from", "1", "--engine", engine],
        );
        assert_eq!(json["engine"], engine);
        assert_eq!(json["reachable"], 4);
        let got: Vec<Value> = json["distances"]
            .as_array()
            .expect("rows")
            .iter()
            .map(|row| row["distance"].clone())
            .collect();
        assert_eq!(
            got,
            vec![
                Value::from(0),
                Value::from(5),
                Value::from(12),
                Value::from(13),
                Value::Null
            ]
        );
    }
}

#[test]
fn distances_text_marks_unreachable_as_inf() {
    let (dir, doc) = setup();
    wg_cmd(dir.path())
        .args(["distances", arg(&doc), "--from", "1", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4\t13"))
        .stdout(predicate::str::contains("5\tinf"));
}

#[test]
fn path_prefers_cheaper_detour() {
    let (dir, doc) = setup();
    let json = run_json(dir.path(), &["path", arg(&doc), "--from", "1", "--to", "4"]);
    assert_eq!(json["found"], true);
    assert_eq!(json["distance"], 13);
    let ids: Vec<i64> = json["stops"]
        .as_array()
        .expect("stops")
        .iter()
        .map(|stop| stop["id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(json["stops"][0]["payload"]["label"], "depot");
}

#[test]
fn path_to_isolated_node_is_not_found() {
    let (dir, doc) = setup();
    wg_cmd(dir.path())
        .args(["path", arg(&doc), "--from", "1", "--to", "5", "--format", "text"])
        .assert()
        .success()
        .stdout("no path\n");
}

// ---------------------------------------------------------------------------
// color / export
// ---------------------------------------------------------------------------

#[test]
fn color_triangle_with_pendant() {
    let (dir, doc) = setup();
    let json = run_json(dir.path(), &["color", arg(&doc)]);
    assert_eq!(json["color_count"], 3);
    // Node 3 has the highest degree and takes color 0.
    assert_eq!(json["colors"][2], serde_json::json!({ "id": 3, "color": 0 }));
    assert_eq!(json["independent_sets"].as_array().expect("sets").len(), 3);
}

#[test]
fn export_prints_dot_with_highlight() {
    let (dir, doc) = setup();
    wg_cmd(dir.path())
        .args([
            "export",
            arg(&doc),
            "--color",
            "--path-from",
            "1",
            "--path-to",
            "3",
            "--format",
            "text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graph {"))
        .stdout(predicate::str::contains("label = \"depot\""))
        .stdout(predicate::str::contains("fillcolor"))
        .stdout(predicate::str::contains("penwidth=3"));
}

#[test]
fn export_json_wraps_dot() {
    let (dir, doc) = setup();
    let json = run_json(dir.path(), &["export", arg(&doc)]);
    assert_eq!(json["format"], "dot");
    assert!(json["dot"].as_str().expect("dot").contains(" -- "));
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_file_selects_engine_and_format() {
    let (dir, doc) = setup();
    write_doc(
        dir.path(),
        "wgraph.toml",
        "[analysis]\nengine = \"bellman-ford\"\n\n[output]\nformat = \"json\"\n",
    );

    let output = wg_cmd(dir.path())
        .args(["distances", arg(&doc), "--from", "2"])
        .output()
        .expect("wg should not crash");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("config format is json");
    assert_eq!(json["engine"], "bellman-ford");
}

#[test]
fn env_engine_overrides_config_and_flag_overrides_env() {
    let (dir, doc) = setup();
    let config = write_doc(
        dir.path(),
        "custom.toml",
        "[analysis]\nengine = \"bellman-ford\"\n",
    );

    let output = wg_cmd(dir.path())
        .env("WGRAPH_ENGINE", "dijkstra")
        .args(["--config", arg(&config), "distances", arg(&doc), "--from", "1"])
        .args(["--format", "json"])
        .output()
        .expect("wg should not crash");
    let json: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["engine"], "dijkstra");

    let output = wg_cmd(dir.path())
        .env("WGRAPH_ENGINE", "dijkstra")
        .args(["distances", arg(&doc), "--from", "1", "--engine", "bellman-ford"])
        .args(["--format", "json"])
        .output()
        .expect("wg should not crash");
    let json: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["engine"], "bellman-ford");
}

#[test]
fn missing_explicit_config_fails() {
    let (dir, doc) = setup();
    wg_cmd(dir.path())
        .args(["--config", "absent.toml", "stats", arg(&doc), "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_node_reports_error_code() {
    let (dir, doc) = setup();
    let output = wg_cmd(dir.path())
        .args(["path", arg(&doc), "--from", "1", "--to", "99", "--format", "json"])
        .output()
        .expect("wg should not crash");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let json: Value = serde_json::from_slice(&output.stderr).expect("json error");
    assert_eq!(json["error"]["error_code"], "E2001");
    assert!(
        json["error"]["message"]
            .as_str()
            .expect("message")
            .contains("99")
    );
}

#[test]
fn negative_cycle_fails_bellman_ford() {
    let dir = TempDir::new().expect("tempdir");
    let doc = write_doc(
        dir.path(),
        "neg.json",
        r#"{ "nodes": [{ "id": 1 }, { "id": 2 }], "edges": [{ "a": 1, "b": 2, "weight": -2 }] }"#,
    );
    wg_cmd(dir.path())
        .args([
            "distances",
            arg(&doc),
            "--from",
            "1",
            "--engine",
            "bellman-ford",
            "--format",
            "text",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E3001]"))
        .stderr(predicate::str::contains("suggestion:"));
}

#[test]
fn malformed_document_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let doc = write_doc(dir.path(), "bad.json", "{ \"nodes\": [ ");
    wg_cmd(dir.path())
        .args(["stats", arg(&doc), "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E5002]"))
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn unsupported_extension_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let doc = write_doc(dir.path(), "g.yaml", "nodes: []");
    wg_cmd(dir.path())
        .args(["stats", arg(&doc), "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E5003]"));
}

#[test]
fn duplicate_node_ids_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let doc = write_doc(
        dir.path(),
        "dup.json",
        r#"{ "nodes": [{ "id": 1 }, { "id": 1 }], "edges": [] }"#,
    );
    wg_cmd(dir.path())
        .args(["stats", arg(&doc), "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E2004]"));
}
