use crate::cli::support::{hopgraph, write_edges, DEMO_EDGES};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Path command tests
// ============================================================================

#[test]
fn test_path_multi_hop() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "4", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 -> 3 -> 1 -> 5"))
        .stdout(predicate::str::contains("Path length: 3 hops"));
}

#[test]
fn test_path_prefers_first_discovered() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 -> 1 -> 3"));
}

#[test]
fn test_path_single_hop_wording() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path length: 1 hop\n"));
}

#[test]
fn test_path_to_self() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "3", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3\n"))
        .stdout(predicate::str::contains("Path length: 0 hops"));
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", "a b\nx y\n");

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "a", "y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from a to y"));
}

#[test]
fn test_path_unknown_source_fails() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["path", "9", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: 9"));
}

#[test]
fn test_path_json() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.json", "[[1,5],[1,2],[1,3],[3,4],[2,4]]");

    let output = hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "json", "path", "4", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["path_length"], 3);
    assert_eq!(json["path"], serde_json::json!(["4", "3", "1", "5"]));
}

#[test]
fn test_path_json_not_found() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", "a b\nx y\n");

    let output = hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "json", "path", "a", "x"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_path_records() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--format", "records", "path", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H hopgraph=1 mode=path from=2 to=3 found=true length=2",
        ))
        .stdout(predicate::str::contains("P 0 2\nP 1 1\nP 2 3\n"));
}

#[test]
fn test_path_after_add_edge() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", DEMO_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .args(["--add", "4,5", "path", "4", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 -> 5"))
        .stdout(predicate::str::contains("Path length: 1 hop"));
}

#[test]
fn test_path_from_stdin() {
    let dir = tempdir().unwrap();

    hopgraph(dir.path())
        .args(["--edges", "-", "path", "4", "5"])
        .write_stdin(DEMO_EDGES)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 -> 3 -> 1 -> 5"));
}
