//! Adjacency-list graph storage
//!
//! Vertices are kept in first-appearance order: a slot index maps each
//! vertex to its position in the entry list, so lookups stay O(1) while
//! iteration follows the order edges introduced the vertices.

use std::collections::HashMap;
use std::fmt;

use super::bfs;
use super::traversal::{NeighborSource, VertexId};
use super::types::{BfsInfo, DuplicateEdgePolicy, GraphError, PathResult};

/// Undirected, unweighted graph backed by per-vertex neighbor lists
#[derive(Debug, Clone)]
pub struct Graph<V: VertexId> {
    entries: Vec<(V, Vec<V>)>,
    slots: HashMap<V, usize>,
    policy: DuplicateEdgePolicy,
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::with_duplicate_policy(DuplicateEdgePolicy::default())
    }
}

impl<V: VertexId> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_policy(policy: DuplicateEdgePolicy) -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
            policy,
        }
    }

    /// Build a graph by adding `edges` in order, keeping duplicate entries
    ///
    /// # Errors
    ///
    /// Same as [`Graph::with_policy`].
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Result<Self, GraphError> {
        Self::with_policy(edges, DuplicateEdgePolicy::default())
    }

    /// Build a graph by adding `edges` in order under `policy`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] for the first edge that joins a
    /// vertex to itself; no graph is returned.
    pub fn with_policy(
        edges: impl IntoIterator<Item = (V, V)>,
        policy: DuplicateEdgePolicy,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::with_duplicate_policy(policy);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            policy = %policy,
            "graph_built"
        );
        Ok(graph)
    }

    pub fn duplicate_policy(&self) -> DuplicateEdgePolicy {
        self.policy
    }

    /// Connect `u` and `v` in both directions.
    ///
    /// Under [`DuplicateEdgePolicy::Dedupe`] an existing edge is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] when `u == v`. Neither list is
    /// touched and no vertex is created.
    pub fn add_edge(&mut self, u: V, v: V) -> Result<(), GraphError> {
        if u == v {
            return Err(GraphError::self_loop(&u));
        }

        if self.policy == DuplicateEdgePolicy::Dedupe && self.has_edge(&u, &v) {
            tracing::trace!(from = ?u, to = ?v, "duplicate edge ignored");
            return Ok(());
        }

        tracing::trace!(from = ?u, to = ?v, "add_edge");
        let u_slot = self.slot_or_insert(&u);
        self.entries[u_slot].1.push(v.clone());
        let v_slot = self.slot_or_insert(&v);
        self.entries[v_slot].1.push(u);
        Ok(())
    }

    /// Remove one `(u, v)` edge: the first occurrence of `v` in `u`'s list
    /// and the first occurrence of `u` in `v`'s list.
    ///
    /// Returns `false` when there is no such edge. Vertices left without
    /// neighbors stay in the graph. Use [`Graph::disconnect`] to drop every
    /// parallel entry at once.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        let (Some(&u_slot), Some(&v_slot)) = (self.slots.get(u), self.slots.get(v)) else {
            return false;
        };

        let u_pos = self.entries[u_slot].1.iter().position(|n| n == v);
        let v_pos = self.entries[v_slot].1.iter().position(|n| n == u);
        let (Some(u_pos), Some(v_pos)) = (u_pos, v_pos) else {
            return false;
        };

        self.entries[u_slot].1.remove(u_pos);
        self.entries[v_slot].1.remove(v_pos);
        tracing::trace!(from = ?u, to = ?v, "remove_edge");
        true
    }

    /// Remove every parallel `(u, v)` edge, returning how many were removed
    pub fn disconnect(&mut self, u: &V, v: &V) -> usize {
        let (Some(&u_slot), Some(&v_slot)) = (self.slots.get(u), self.slots.get(v)) else {
            return 0;
        };
        if u_slot == v_slot {
            return 0;
        }

        let removed = self.entries[u_slot].1.iter().filter(|n| *n == v).count();
        self.entries[u_slot].1.retain(|n| n != v);
        self.entries[v_slot].1.retain(|n| n != u);

        tracing::trace!(from = ?u, to = ?v, removed, "disconnect");
        removed
    }

    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.neighbors(u).is_some_and(|list| list.contains(v))
    }

    pub fn neighbors(&self, vertex: &V) -> Option<&[V]> {
        self.slots
            .get(vertex)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.slots.contains_key(vertex)
    }

    /// Vertices in first-appearance order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(vertex, _)| vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of undirected edges, parallel entries counted separately
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, list)| list.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of the adjacency lists in vertex order
    pub fn adjacency_snapshot(&self) -> Vec<(V, Vec<V>)> {
        self.entries.clone()
    }

    pub fn bfs(&self, source: &V) -> Result<BfsInfo<V>, GraphError> {
        bfs::bfs(self, source)
    }

    pub fn shortest_path(&self, source: &V, target: &V) -> Result<Vec<V>, GraphError> {
        bfs::shortest_path(self, source, target)
    }

    pub fn find_path(&self, source: &V, target: &V) -> Result<PathResult<V>, GraphError> {
        bfs::find_path(self, source, target)
    }

    pub fn distance(&self, source: &V, target: &V) -> Result<Option<usize>, GraphError> {
        bfs::distance(self, source, target)
    }

    fn slot_or_insert(&mut self, vertex: &V) -> usize {
        if let Some(&slot) = self.slots.get(vertex) {
            return slot;
        }
        let slot = self.entries.len();
        self.entries.push((vertex.clone(), Vec::new()));
        self.slots.insert(vertex.clone(), slot);
        slot
    }
}

impl<V: VertexId> NeighborSource<V> for Graph<V> {
    fn vertex_ids(&self) -> Vec<&V> {
        self.vertices().collect()
    }

    fn neighbors_of(&self, id: &V) -> Option<&[V]> {
        self.neighbors(id)
    }
}

impl<V: VertexId + fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (vertex, list)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}=>[", vertex)?;
            for (j, neighbor) in list.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", neighbor)?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}
