//! Error macros for hopgraph

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::HopgraphError::UsageError($msg.to_string()))
    };
}
