use crate::cli::support::{hopgraph, write_edges, DEMO_EDGES};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Show command tests
// ============================================================================

#[test]
fn test_show_adjacency_in_insertion_order() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{1=>[5, 2, 3], 5=>[1], 2=>[1, 4], 3=>[1, 4], 4=>[3, 2]}",
        ))
        .stdout(predicate::str::contains("5 vertices, 5 edges"));
}

#[test]
fn test_show_after_add() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--add", "3,2", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2=>[1, 4, 3], 3=>[1, 4, 2]"));
}

#[test]
fn test_show_add_then_remove_restores() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--add", "3,2", "--remove", "3,2", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{1=>[5, 2, 3], 5=>[1], 2=>[1, 4], 3=>[1, 4], 4=>[3, 2]}",
        ));
}

#[test]
fn test_show_remove_missing_edge_is_noop() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--remove", "5,4", "--remove", "7,8", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 vertices, 5 edges"));
}

#[test]
fn test_show_dedupe_flag() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", "a b\nb a\na b\n");

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("{a=>[b, b, b], b=>[a, a, a]}"));

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--dedupe", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{a=>[b], b=>[a]}"));
}

#[test]
fn test_show_empty_graph() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", "# nothing yet\n");

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph is empty"));
}

#[test]
fn test_show_json() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    let output = hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "json", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vertices"], 5);
    assert_eq!(json["edges"], 5);
    assert_eq!(json["duplicate_edges"], "keep");
    assert_eq!(json["adjacency"][0]["vertex"], "1");
    assert_eq!(
        json["adjacency"][0]["neighbors"],
        serde_json::json!(["5", "2", "3"])
    );
}

#[test]
fn test_show_records() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "records", "show"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H hopgraph=1 mode=show vertices=5 edges=5\n",
        ))
        .stdout(predicate::str::contains("V 1 5 2 3\n"))
        .stdout(predicate::str::contains("V 4 3 2\n"));
}
