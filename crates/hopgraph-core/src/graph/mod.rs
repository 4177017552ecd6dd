//! Graph storage and traversal
//!
//! Provides the undirected graph and the algorithms that run over it:
//! - Adjacency-list storage keyed by arbitrary hashable vertex identifiers
//! - FIFO queue used by breadth-first search
//! - BFS distance/predecessor records and shortest-path reconstruction
//! - Neighbor source trait for pluggable adjacency providers

pub mod adjacency;
pub mod bfs;
pub mod queue;
pub mod traversal;
pub mod types;

pub use adjacency::Graph;
pub use bfs::{bfs, distance, find_path, shortest_path};
pub use queue::Queue;
pub use traversal::{NeighborSource, VertexId};
pub use types::{BfsInfo, BfsRecord, DuplicateEdgePolicy, GraphError, PathResult};
