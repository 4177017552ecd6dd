//! BFS command: distances and predecessors from a source
use hopgraph_core::error::Result;
use hopgraph_core::format::{escape_value, records_header};
use hopgraph_core::graph::{BfsInfo, Graph};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the bfs command
pub fn execute(cli: &Cli, graph: &Graph<String>, source: &str) -> Result<()> {
    let info = graph.bfs(&source.to_string())?;

    output_by_format_result!(cli.format,
        json => output_json(&info),
        human => { output_human(cli, &info); },
        records => { output_records(&info); }
    )
}

fn output_json(info: &BfsInfo<String>) -> Result<()> {
    let records: Vec<serde_json::Value> = info
        .iter()
        .map(|(vertex, record)| {
            serde_json::json!({
                "vertex": vertex,
                "distance": record.distance,
                "predecessor": record.predecessor,
            })
        })
        .collect();

    let output = serde_json::json!({
        "source": info.source(),
        "reached": info.reached_count(),
        "records": records,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(cli: &Cli, info: &BfsInfo<String>) {
    if !cli.quiet {
        println!("vertex\tdistance\tpredecessor");
    }
    for (vertex, record) in info.iter() {
        let distance = record
            .distance
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let predecessor = record.predecessor.as_deref().unwrap_or("-");
        println!("{}\t{}\t{}", vertex, distance, predecessor);
    }
    if !cli.quiet {
        println!("Reached {} of {} vertices", info.reached_count(), info.len());
    }
}

fn output_records(info: &BfsInfo<String>) {
    println!(
        "{}",
        records_header(
            "bfs",
            &[
                ("source", info.source().clone()),
                ("reached", info.reached_count().to_string()),
            ],
        )
    );
    for (vertex, record) in info.iter() {
        let distance = record
            .distance
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let predecessor = record
            .predecessor
            .as_deref()
            .map(escape_value)
            .unwrap_or_else(|| "-".to_string());
        println!("B {} {} {}", escape_value(vertex), distance, predecessor);
    }
}
