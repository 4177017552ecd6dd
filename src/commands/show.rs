//! Show command: print the adjacency list
use hopgraph_core::error::Result;
use hopgraph_core::format::{escape_value, records_header};
use hopgraph_core::graph::Graph;

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    output_by_format_result!(cli.format,
        json => output_json(graph),
        human => { output_human(cli, graph); },
        records => { output_records(graph); }
    )
}

fn output_json(graph: &Graph<String>) -> Result<()> {
    let adjacency: Vec<serde_json::Value> = graph
        .adjacency_snapshot()
        .into_iter()
        .map(|(vertex, neighbors)| {
            serde_json::json!({
                "vertex": vertex,
                "neighbors": neighbors,
            })
        })
        .collect();

    let output = serde_json::json!({
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "duplicate_edges": graph.duplicate_policy(),
        "adjacency": adjacency,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(cli: &Cli, graph: &Graph<String>) {
    if graph.is_empty() {
        if !cli.quiet {
            println!("Graph is empty");
        }
        return;
    }

    println!("{}", graph);
    if !cli.quiet {
        println!(
            "{} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
    }
}

fn output_records(graph: &Graph<String>) {
    println!(
        "{}",
        records_header(
            "show",
            &[
                ("vertices", graph.vertex_count().to_string()),
                ("edges", graph.edge_count().to_string()),
            ],
        )
    );
    for (vertex, neighbors) in graph.adjacency_snapshot() {
        let mut line = format!("V {}", escape_value(&vertex));
        for neighbor in &neighbors {
            line.push(' ');
            line.push_str(&escape_value(neighbor));
        }
        println!("{}", line);
    }
}
