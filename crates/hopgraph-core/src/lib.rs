//! Hopgraph Core Library
//!
//! Undirected adjacency-list graph with breadth-first shortest-path queries,
//! plus the configuration, logging and edge-list loading the CLI builds on.

pub mod config;
pub mod edge_list;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
