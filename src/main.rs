//! Hopgraph - adjacency-list graph CLI
//!
//! Loads an undirected edge list, applies edge mutations and answers
//! breadth-first shortest-path queries.

mod cli;
mod commands;

use std::env;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use hopgraph_core::bail_usage;
use hopgraph_core::edge_list::STDIN_PATH;
use hopgraph_core::error::{ExitCode as HopgraphExitCode, HopgraphError, Result};
use hopgraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        return report(&cli, &e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match require_edge_input(&cli).and_then(|()| commands::dispatch::run(&cli, start)) {
        Ok(()) => HopgraphExitCode::Success.into(),
        Err(e) => report(&cli, &e),
    }
}

/// Clap rejected the arguments. With `--format json` on the command line the
/// failure goes out as a usage-error envelope; otherwise clap prints it.
fn parse_failure(err: clap::Error) -> ExitCode {
    // Help and version output go to stdout and are not failures.
    if !err.use_stderr() || format_from_argv() != Some(OutputFormat::Json) {
        err.exit();
    }

    let usage = HopgraphError::UsageError(err.to_string());
    eprintln!("{}", usage.to_json());
    usage.exit_code().into()
}

/// `--format` as written in argv, read before clap has validated anything
fn format_from_argv() -> Option<OutputFormat> {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter()
        .enumerate()
        .find_map(|(i, arg)| match arg.strip_prefix("--format") {
            Some("") => args.get(i + 1)?.parse::<OutputFormat>().ok(),
            Some(rest) => rest.strip_prefix('=')?.parse::<OutputFormat>().ok(),
            None => None,
        })
}

/// Queries read edges from stdin by default; refuse to wait on a terminal.
fn require_edge_input(cli: &Cli) -> Result<()> {
    if cli.command.is_some() && cli.edges.as_os_str() == STDIN_PATH && std::io::stdin().is_terminal()
    {
        bail_usage!("no edge list given: pass --edges <FILE> or pipe edges on stdin");
    }
    Ok(())
}

fn report(cli: &Cli, e: &HopgraphError) -> ExitCode {
    tracing::debug!(error_type = e.error_type(), "command_failed");

    if cli.format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }

    e.exit_code().into()
}
