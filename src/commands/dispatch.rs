//! Command dispatch logic for hopgraph
use std::time::Instant;

use hopgraph_core::config::HopgraphConfig;
use hopgraph_core::edge_list::EdgeList;
use hopgraph_core::error::Result;
use hopgraph_core::graph::{DuplicateEdgePolicy, Graph};
use hopgraph_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return handle_no_command();
    };

    let config = load_config(cli)?;
    let policy = if cli.dedupe {
        DuplicateEdgePolicy::Dedupe
    } else {
        config.graph.duplicate_edges
    };

    let graph = load_graph(cli, policy, start)?;

    match command {
        Commands::Show => commands::show::execute(cli, &graph),
        Commands::Neighbors { vertex } => commands::neighbors::execute(cli, &graph, vertex),
        Commands::Path { from, to } => commands::path::execute(cli, &graph, from, to),
        Commands::Bfs { source } => commands::bfs::execute(cli, &graph, source),
    }
}

fn handle_no_command() -> Result<()> {
    println!("hopgraph {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Adjacency-list graph with breadth-first shortest paths.");
    println!();
    println!("Run `hopgraph --help` for usage information.");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<HopgraphConfig> {
    match &cli.config {
        Some(path) => HopgraphConfig::load(path),
        None => HopgraphConfig::load_global(),
    }
}

/// Load the edge list, build the graph, then apply `--add` and `--remove`
fn load_graph(cli: &Cli, policy: DuplicateEdgePolicy, start: Instant) -> Result<Graph<String>> {
    let mut graph = EdgeList::load(&cli.edges)?.into_graph(policy)?;
    trace_time!(start, "load_graph", vertices = graph.vertex_count());

    for (u, v) in &cli.add {
        graph.add_edge(u.clone(), v.clone())?;
    }

    for (u, v) in &cli.remove {
        if !graph.remove_edge(u, v) {
            tracing::debug!(from = %u, to = %v, "edge to remove not present");
        }
    }

    if !cli.add.is_empty() || !cli.remove.is_empty() {
        tracing::debug!(
            added = cli.add.len(),
            removed = cli.remove.len(),
            edges = graph.edge_count(),
            "mutations_applied"
        );
    }

    Ok(graph)
}
