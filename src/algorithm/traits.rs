use std::collections::HashSet;

use log::warn;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a single-source shortest path computation (the distance table of one run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex, [`Weight::unreachable`] when there is no path
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Distance to `vertex`, or `None` when it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|d| *d != W::unreachable())
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|d| **d != W::unreachable())
            .count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if target >= result.predecessors.len() || !result.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut seen = HashSet::new();

        // Walk predecessors back to the source
        while current != result.source {
            if !seen.insert(current) {
                warn!("cycle in predecessor chain at vertex {}", current);
                return None;
            }

            path.push(current);
            current = result.predecessors[current]?;
        }

        path.push(result.source);
        path.reverse();

        Some(path)
    }
}
