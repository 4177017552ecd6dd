use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{HopgraphError, Result};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", vertices = graph.vertex_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
///
/// `RUST_LOG` wins, then `HOPGRAPH_LOG`, then `log_level` (or the level
/// implied by `verbose`).
pub fn init_tracing(verbose: bool, log_level: Option<&str>, log_json: bool) -> Result<()> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    init_with_level(level, log_json)
}

/// Directive string for a bare level, scoped to hopgraph's crates
fn scoped_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("hopgraph={0},hopgraph_core={0}", level)
    }
}

fn level_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(scoped_directive(level))
        .map_err(|_| HopgraphError::invalid_value("log level", level))
}

fn init_with_level(level: &str, log_json: bool) -> Result<()> {
    // Support HOPGRAPH_LOG environment variable override
    let filter = match EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("HOPGRAPH_LOG"))
    {
        Ok(filter) => filter,
        Err(_) => level_filter(level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    };

    installed.map_err(|e| HopgraphError::Other(format!("failed to initialize logging: {}", e)))
}
