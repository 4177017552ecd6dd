use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Edges of the five-person demo graph (1-5, 1-2, 1-3, 3-4, 2-4)
pub const DEMO_EDGES: &str = "1 5\n1 2\n1 3\n3 4\n2 4\n";

/// Get a Command for hopgraph with the global config isolated
pub fn hopgraph(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("hopgraph");
    cmd.env("HOPGRAPH_CONFIG_DIR", config_dir)
        .env_remove("HOPGRAPH_EDGES")
        .env_remove("RUST_LOG")
        .env_remove("HOPGRAPH_LOG");
    cmd
}

/// Write `content` to `name` inside `dir`, returning the path
pub fn write_edges(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
