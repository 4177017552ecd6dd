use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::traversal::VertexId;

/// How repeated insertions of the same edge are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateEdgePolicy {
    /// Every insertion appends to both neighbor lists (parallel entries allowed)
    #[default]
    Keep,
    /// Inserting an edge that already exists is a no-op
    Dedupe,
}

impl std::str::FromStr for DuplicateEdgePolicy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(DuplicateEdgePolicy::Keep),
            "dedupe" => Ok(DuplicateEdgePolicy::Dedupe),
            other => Err(GraphError::UnknownPolicy(other.to_string())),
        }
    }
}

impl std::fmt::Display for DuplicateEdgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicateEdgePolicy::Keep => write!(f, "keep"),
            DuplicateEdgePolicy::Dedupe => write!(f, "dedupe"),
        }
    }
}

/// Errors raised by graph mutation and traversal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("self-loop rejected on vertex {vertex}")]
    SelfLoop { vertex: String },

    #[error("unknown duplicate edge policy: {0} (expected: keep or dedupe)")]
    UnknownPolicy(String),
}

impl GraphError {
    pub fn vertex_not_found<V: VertexId>(vertex: &V) -> Self {
        GraphError::VertexNotFound {
            vertex: vertex_label(vertex),
        }
    }

    pub fn self_loop<V: VertexId>(vertex: &V) -> Self {
        GraphError::SelfLoop {
            vertex: vertex_label(vertex),
        }
    }
}

/// Render a vertex for error messages, without the quotes `Debug` puts on strings
fn vertex_label<V: VertexId>(vertex: &V) -> String {
    let rendered = format!("{:?}", vertex);
    match rendered
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
    {
        Some(inner) => inner.to_string(),
        None => rendered,
    }
}

/// Per-vertex BFS bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsRecord<V> {
    /// Hops from the source, `None` while undiscovered
    pub distance: Option<usize>,
    /// Vertex this one was first discovered from
    pub predecessor: Option<V>,
}

impl<V> Default for BfsRecord<V> {
    fn default() -> Self {
        Self {
            distance: None,
            predecessor: None,
        }
    }
}

/// Result of one breadth-first search: a record for every known vertex
#[derive(Debug, Clone)]
pub struct BfsInfo<V: VertexId> {
    source: V,
    records: Vec<(V, BfsRecord<V>)>,
    slots: HashMap<V, usize>,
}

impl<V: VertexId> BfsInfo<V> {
    /// Fresh records for `vertices`, with only `source` at distance 0
    pub(crate) fn new<'a>(source: &V, vertices: impl IntoIterator<Item = &'a V>) -> Self
    where
        V: 'a,
    {
        let mut records = Vec::new();
        let mut slots = HashMap::new();
        for vertex in vertices {
            slots.insert(vertex.clone(), records.len());
            records.push((vertex.clone(), BfsRecord::default()));
        }

        let mut info = Self {
            source: source.clone(),
            records,
            slots,
        };
        if let Some(record) = info.record_mut(source) {
            record.distance = Some(0);
        }
        info
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn record(&self, vertex: &V) -> Option<&BfsRecord<V>> {
        self.slots.get(vertex).map(|&slot| &self.records[slot].1)
    }

    pub(crate) fn record_mut(&mut self, vertex: &V) -> Option<&mut BfsRecord<V>> {
        match self.slots.get(vertex) {
            Some(&slot) => Some(&mut self.records[slot].1),
            None => None,
        }
    }

    pub fn distance_to(&self, vertex: &V) -> Option<usize> {
        self.record(vertex).and_then(|r| r.distance)
    }

    pub fn predecessor_of(&self, vertex: &V) -> Option<&V> {
        self.record(vertex).and_then(|r| r.predecessor.as_ref())
    }

    pub fn is_reached(&self, vertex: &V) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Records in graph vertex order
    pub fn iter(&self) -> impl Iterator<Item = (&V, &BfsRecord<V>)> {
        self.records.iter().map(|(v, r)| (v, r))
    }

    /// Number of vertices reached from the source, the source included
    pub fn reached_count(&self) -> usize {
        self.records
            .iter()
            .filter(|(_, r)| r.distance.is_some())
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Outcome of a shortest-path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult<V> {
    pub from: V,
    pub to: V,
    pub found: bool,
    /// Vertices from `from` to `to` inclusive, empty when no path exists
    pub path: Vec<V>,
    /// Number of hops along `path`
    pub path_length: usize,
}

impl<V: Clone> PathResult<V> {
    pub fn new(from: &V, to: &V, path: Vec<V>) -> Self {
        let found = !path.is_empty();
        Self {
            from: from.clone(),
            to: to.clone(),
            found,
            path_length: path.len().saturating_sub(1),
            path,
        }
    }
}
