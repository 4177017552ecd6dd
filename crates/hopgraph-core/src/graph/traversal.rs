use std::fmt::Debug;
use std::hash::Hash;

/// Vertex identifier: anything comparable, hashable and cheap enough to clone
pub trait VertexId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexId for T {}

/// Trait for providing graph adjacency to traversal algorithms
pub trait NeighborSource<V: VertexId> {
    /// Known vertices in a stable order
    fn vertex_ids(&self) -> Vec<&V>;
    /// Neighbor list of `id`, or `None` if the vertex is unknown
    fn neighbors_of(&self, id: &V) -> Option<&[V]>;

    fn has_vertex(&self, id: &V) -> bool {
        self.neighbors_of(id).is_some()
    }
}
