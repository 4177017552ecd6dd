//! Edge-list input
//!
//! Two encodings are accepted, detected from the content:
//! - JSON: an array of two-element arrays, elements strings or numbers
//!   (`[[1, 5], ["a", "b"]]`)
//! - Text: one edge per line as `u v`, `u,v` or `u -> v`; blank lines and
//!   `#` comments are skipped

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{HopgraphError, Result};
use crate::graph::{DuplicateEdgePolicy, Graph};

/// Path that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Ordered list of undirected edges between string vertex identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    edges: Vec<(String, String)>,
}

impl EdgeList {
    pub fn new(edges: Vec<(String, String)>) -> Self {
        Self { edges }
    }

    /// Read an edge list from `path`, or from stdin when `path` is `-`
    pub fn load(path: &Path) -> Result<Self> {
        let content = if path.as_os_str() == STDIN_PATH {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| HopgraphError::io_operation("read", "stdin", e))?;
            buffer
        } else {
            fs::read_to_string(path)
                .map_err(|e| HopgraphError::io_operation("read", path.display(), e))?
        };

        let list = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), edges = list.len(), "edge_list_loaded");
        Ok(list)
    }

    /// Parse edge-list content in either supported encoding
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim_start().starts_with('[') {
            Self::parse_json(content)
        } else {
            Self::parse_text(content)
        }
    }

    fn parse_json(content: &str) -> Result<Self> {
        let entries: Vec<Value> = serde_json::from_str(content)?;
        let mut edges = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let position = format!("entry {}", i + 1);
            let pair = match entry.as_array() {
                Some(pair) if pair.len() == 2 => pair,
                _ => {
                    return Err(HopgraphError::InvalidEdgeList {
                        position,
                        reason: format!("expected a pair of vertices, got {}", entry),
                    })
                }
            };
            let from = json_vertex(&pair[0], &position)?;
            let to = json_vertex(&pair[1], &position)?;
            edges.push((from, to));
        }

        Ok(Self { edges })
    }

    fn parse_text(content: &str) -> Result<Self> {
        let mut edges = Vec::new();

        for (i, raw) in content.lines().enumerate() {
            let line = match raw.split_once('#') {
                Some((before, _)) => before,
                None => raw,
            }
            .trim();
            if line.is_empty() {
                continue;
            }

            let position = format!("line {}", i + 1);
            edges.push(parse_edge_text(line).map_err(|reason| {
                HopgraphError::InvalidEdgeList { position, reason }
            })?);
        }

        Ok(Self { edges })
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Build a graph from the edges in order
    pub fn into_graph(self, policy: DuplicateEdgePolicy) -> Result<Graph<String>> {
        Ok(Graph::with_policy(self.edges, policy)?)
    }
}

impl IntoIterator for EdgeList {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// Parse a single `u v`, `u,v` or `u -> v` edge
pub fn parse_edge_text(text: &str) -> std::result::Result<(String, String), String> {
    let (from, to) = if let Some(pair) = text.split_once("->") {
        pair
    } else if let Some(pair) = text.split_once(',') {
        pair
    } else {
        let mut parts = text.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(from), Some(to), None) => (from, to),
            (_, _, Some(_)) => return Err(format!("too many vertices in '{}'", text)),
            _ => return Err(format!("expected two vertices in '{}'", text)),
        }
    };

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(format!("expected two vertices in '{}'", text));
    }
    if from.contains(char::is_whitespace) || to.contains(char::is_whitespace) {
        return Err(format!("too many vertices in '{}'", text));
    }

    Ok((from.to_string(), to.to_string()))
}

fn json_vertex(value: &Value, position: &str) -> Result<String> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(HopgraphError::InvalidEdgeList {
            position: position.to_string(),
            reason: format!("vertex must be a non-empty string or a number, got {}", other),
        }),
    }
}
