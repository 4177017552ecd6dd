mod path;

use crate::graph::queue::Queue;
use crate::graph::traversal::{NeighborSource, VertexId};
use crate::graph::types::{BfsInfo, GraphError, PathResult};

/// Breadth-first search from `source` over every vertex `provider` knows.
///
/// Neighbors are expanded in neighbor-list order, so when several shortest
/// paths exist the recorded predecessor is the one discovered first.
pub fn bfs<V, P>(provider: &P, source: &V) -> Result<BfsInfo<V>, GraphError>
where
    V: VertexId,
    P: NeighborSource<V> + ?Sized,
{
    if !provider.has_vertex(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    let mut info = BfsInfo::new(source, provider.vertex_ids());
    let mut queue = Queue::new();
    queue.enqueue(source.clone());

    while let Some(current) = queue.dequeue() {
        let Some(current_distance) = info.distance_to(&current) else {
            continue;
        };
        let Some(neighbors) = provider.neighbors_of(&current) else {
            continue;
        };

        tracing::trace!(vertex = ?current, distance = current_distance, "bfs_expand");

        for neighbor in neighbors {
            let Some(record) = info.record_mut(neighbor) else {
                continue;
            };
            if record.distance.is_some() {
                continue;
            }
            record.distance = Some(current_distance + 1);
            record.predecessor = Some(current.clone());
            queue.enqueue(neighbor.clone());
        }
    }

    Ok(info)
}

/// Shortest path from `source` to `target`, both ends included.
///
/// An unreachable target, or one the graph has never seen, yields an empty
/// path. Only an unknown source is an error.
pub fn shortest_path<V, P>(provider: &P, source: &V, target: &V) -> Result<Vec<V>, GraphError>
where
    V: VertexId,
    P: NeighborSource<V> + ?Sized,
{
    if !provider.has_vertex(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    // Zero hops, no search needed.
    if source == target {
        return Ok(vec![source.clone()]);
    }

    let info = bfs(provider, source)?;
    Ok(path::reconstruct_path(&info, target))
}

/// Find a shortest path and package it with its endpoints and hop count
#[tracing::instrument(skip_all, fields(from = ?source, to = ?target))]
pub fn find_path<V, P>(provider: &P, source: &V, target: &V) -> Result<PathResult<V>, GraphError>
where
    V: VertexId,
    P: NeighborSource<V> + ?Sized,
{
    let path = shortest_path(provider, source, target)?;
    let result = PathResult::new(source, target, path);

    tracing::debug!(
        found = result.found,
        path_length = result.path_length,
        "path_result"
    );
    Ok(result)
}

/// Hop distance from `source` to `target`, `None` when unreachable
pub fn distance<V, P>(provider: &P, source: &V, target: &V) -> Result<Option<usize>, GraphError>
where
    V: VertexId,
    P: NeighborSource<V> + ?Sized,
{
    let info = bfs(provider, source)?;
    Ok(info.distance_to(target))
}
