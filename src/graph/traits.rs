use num_traits::{PrimInt, Unsigned};
use std::fmt::{Debug, Display};

use crate::UNREACHABLE;

/// Non-negative integer edge weight / path length
///
/// Any unsigned primitive integer qualifies. Path lengths are accumulated in the
/// same type as edge weights, with saturating addition.
pub trait Weight: PrimInt + Unsigned + Debug + Display + Send + Sync {
    /// The sentinel used for "no path", clamped to the type's maximum when the
    /// type is too narrow to hold [`UNREACHABLE`]
    fn unreachable() -> Self {
        num_traits::cast(UNREACHABLE).unwrap_or_else(Self::max_value)
    }
}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Display + Send + Sync {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, counting parallel edges separately
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the lightest weight among the edges from `from` to `to`
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

/// Trait for building a graph
///
/// Graphs are append-only: edges are never removed or re-weighted once added.
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Parallel edges and self loops are kept. Returns false when either endpoint
    /// is not a vertex of the graph.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;
}
