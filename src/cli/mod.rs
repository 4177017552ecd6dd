//! CLI argument parsing for hopgraph
//!
//! Global flags select the edge list, configuration, edge mutations and
//! output format; subcommands pick the query to run.

pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use hopgraph_core::format::OutputFormat;
use parse::{parse_edge_arg, parse_output_format};

/// Hopgraph - adjacency-list graph with breadth-first shortest paths
#[derive(Parser, Debug)]
#[command(name = "hopgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge list to load (`-` reads standard input)
    #[arg(long, short, global = true, env = "HOPGRAPH_EDGES", default_value = "-")]
    pub edges: PathBuf,

    /// Configuration file (defaults to the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Ignore repeated edges instead of keeping parallel entries
    #[arg(long, global = true)]
    pub dedupe: bool,

    /// Add an edge after loading (repeatable, applied in order)
    #[arg(long = "add", global = true, value_name = "U,V", value_parser = parse_edge_arg)]
    pub add: Vec<(String, String)>,

    /// Remove an edge after the additions (repeatable, applied in order)
    #[arg(long = "remove", global = true, value_name = "U,V", value_parser = parse_edge_arg)]
    pub remove: Vec<(String, String)>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `hopgraph_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency list
    Show,

    /// Print the neighbors of one vertex
    Neighbors {
        /// Vertex identifier
        vertex: String,
    },

    /// Find a shortest path between two vertices
    Path {
        /// Source vertex
        from: String,

        /// Target vertex
        to: String,
    },

    /// Print breadth-first distances and predecessors from a source
    Bfs {
        /// Source vertex
        source: String,
    },
}
