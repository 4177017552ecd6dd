//! Neighbors command
use hopgraph_core::error::Result;
use hopgraph_core::format::{escape_value, records_header};
use hopgraph_core::graph::{Graph, GraphError};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the neighbors command
pub fn execute(cli: &Cli, graph: &Graph<String>, vertex: &str) -> Result<()> {
    let vertex = vertex.to_string();
    let neighbors = graph
        .neighbors(&vertex)
        .ok_or_else(|| GraphError::vertex_not_found(&vertex))?;

    output_by_format_result!(cli.format,
        json => output_json(&vertex, neighbors),
        human => { output_human(cli, &vertex, neighbors); },
        records => { output_records(&vertex, neighbors); }
    )
}

fn output_json(vertex: &str, neighbors: &[String]) -> Result<()> {
    let output = serde_json::json!({
        "vertex": vertex,
        "degree": neighbors.len(),
        "neighbors": neighbors,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(cli: &Cli, vertex: &str, neighbors: &[String]) {
    if neighbors.is_empty() {
        if !cli.quiet {
            println!("No neighbors for {}", vertex);
        }
        return;
    }

    for neighbor in neighbors {
        println!("{}", neighbor);
    }
}

fn output_records(vertex: &str, neighbors: &[String]) {
    println!(
        "{}",
        records_header(
            "neighbors",
            &[
                ("vertex", vertex.to_string()),
                ("degree", neighbors.len().to_string()),
            ],
        )
    );
    for neighbor in neighbors {
        println!("N {}", escape_value(neighbor));
    }
}
