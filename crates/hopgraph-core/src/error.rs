//! Error types and exit codes for hopgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, malformed edge list)

mod macros;

use thiserror::Error;

use crate::graph::GraphError;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors that can occur during hopgraph operations
#[derive(Error, Debug)]
pub enum HopgraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("invalid edge list at {position}: {reason}")]
    InvalidEdgeList { position: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl HopgraphError {
    /// Create an error for a flag value that parsed but is not usable
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        HopgraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        HopgraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HopgraphError::UnknownFormat(_)
            | HopgraphError::UsageError(_)
            | HopgraphError::InvalidValue { .. } => ExitCode::Usage,

            HopgraphError::Graph(GraphError::UnknownPolicy(_)) => ExitCode::Usage,
            HopgraphError::Graph(_) | HopgraphError::InvalidEdgeList { .. } => ExitCode::Data,

            HopgraphError::Io(_)
            | HopgraphError::Json(_)
            | HopgraphError::Toml(_)
            | HopgraphError::FailedOperationWithTarget { .. }
            | HopgraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            HopgraphError::UnknownFormat(_) => "unknown_format",
            HopgraphError::UsageError(_) => "usage_error",
            HopgraphError::InvalidValue { .. } => "invalid_value",
            HopgraphError::Graph(GraphError::VertexNotFound { .. }) => "vertex_not_found",
            HopgraphError::Graph(GraphError::SelfLoop { .. }) => "self_loop",
            HopgraphError::Graph(GraphError::UnknownPolicy(_)) => "unknown_policy",
            HopgraphError::InvalidEdgeList { .. } => "invalid_edge_list",
            HopgraphError::Io(_) => "io_error",
            HopgraphError::Json(_) => "json_error",
            HopgraphError::Toml(_) => "toml_error",
            HopgraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            HopgraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for hopgraph operations
pub type Result<T> = std::result::Result<T, HopgraphError>;
