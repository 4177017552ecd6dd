//! Path reconstruction from BFS predecessor records

use crate::graph::traversal::VertexId;
use crate::graph::types::BfsInfo;

/// Walk predecessor links from `target` back to the BFS source.
///
/// Returns the path source-first, or an empty path when `target` was not
/// reached. A target equal to the source is the single-vertex path.
pub fn reconstruct_path<V: VertexId>(info: &BfsInfo<V>, target: &V) -> Vec<V> {
    if !info.is_reached(target) {
        return Vec::new();
    }

    let source = info.source();
    let mut path = vec![target.clone()];
    let mut current = target;

    while current != source {
        match info.predecessor_of(current) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}
