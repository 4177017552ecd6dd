use crate::cli::support::{hopgraph, write_edges};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const REPEATED_EDGES: &str = "a b\nb a\n";

#[test]
fn test_global_config_dedupe() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", REPEATED_EDGES);
    fs::write(
        dir.path().join("config.toml"),
        "[graph]\nduplicate_edges = \"dedupe\"\n",
    )
    .unwrap();

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("{a=>[b], b=>[a]}"));
}

#[test]
fn test_explicit_config_file() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", REPEATED_EDGES);
    let config_path = dir.path().join("custom.toml");
    let mut graph = toml::Table::new();
    graph.insert("duplicate_edges".to_string(), toml::Value::from("dedupe"));
    let mut config = toml::Table::new();
    config.insert("graph".to_string(), toml::Value::Table(graph));
    fs::write(&config_path, toml::to_string(&config).unwrap()).unwrap();

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .arg("--config")
        .arg(&config_path)
        .args(["--format", "json", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"duplicate_edges\": \"dedupe\""));
}

#[test]
fn test_missing_global_config_uses_defaults() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", REPEATED_EDGES);

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("{a=>[b, b], b=>[a, a]}"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let edges = write_edges(dir.path(), "edges.txt", REPEATED_EDGES);
    fs::write(
        dir.path().join("config.toml"),
        "[graph]\nduplicate_edges = \"merge\"\n",
    )
    .unwrap();

    hopgraph(dir.path())
        .arg("--edges")
        .arg(&edges)
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
