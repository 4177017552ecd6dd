//! Command implementations for hopgraph

pub mod bfs;
pub mod dispatch;
pub mod neighbors;
pub mod path;
pub mod show;
