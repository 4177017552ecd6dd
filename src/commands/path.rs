//! Path command
use hopgraph_core::error::Result;
use hopgraph_core::format::{escape_value, records_header};
use hopgraph_core::graph::{Graph, PathResult};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the path command
pub fn execute(cli: &Cli, graph: &Graph<String>, from: &str, to: &str) -> Result<()> {
    let result = graph.find_path(&from.to_string(), &to.to_string())?;

    output_by_format_result!(cli.format,
        json => output_json(&result),
        human => { output_human(cli, &result); },
        records => { output_records(&result); }
    )
}

fn output_json(result: &PathResult<String>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn output_human(cli: &Cli, result: &PathResult<String>) {
    if !result.found {
        println!("No path found from {} to {}", result.from, result.to);
        return;
    }

    println!("{}", result.path.join(" -> "));
    if !cli.quiet {
        let unit = if result.path_length == 1 { "hop" } else { "hops" };
        println!("Path length: {} {}", result.path_length, unit);
    }
}

fn output_records(result: &PathResult<String>) {
    println!(
        "{}",
        records_header(
            "path",
            &[
                ("from", result.from.clone()),
                ("to", result.to.clone()),
                ("found", result.found.to_string()),
                ("length", result.path_length.to_string()),
            ],
        )
    );
    for (hop, vertex) in result.path.iter().enumerate() {
        println!("P {} {}", hop, escape_value(vertex));
    }
}
