use log::debug;
use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::Result;

/// All-pairs shortest paths as one independent Dijkstra run per source vertex
#[derive(Debug, Default, Clone, Copy)]
pub struct AllPairs {
    /// Whether sources are spread over the rayon thread pool
    parallel: bool,
}

impl AllPairs {
    /// Creates a sequential all-pairs runner
    pub fn new() -> Self {
        AllPairs { parallel: false }
    }

    /// Enable or disable running sources in parallel
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs Dijkstra from every vertex, returning results indexed by source
    pub fn compute<W, G>(&self, graph: &G) -> Result<Vec<ShortestPathResult<W>>>
    where
        W: Weight,
        G: Graph<W> + Sync,
    {
        let n = graph.vertex_count();
        debug!(
            "all-pairs over {} vertices ({})",
            n,
            if self.parallel { "parallel" } else { "sequential" }
        );

        let dijkstra = Dijkstra::new();
        if self.parallel {
            (0..n)
                .into_par_iter()
                .map(|source| dijkstra.compute_shortest_paths(graph, source))
                .collect()
        } else {
            (0..n)
                .map(|source| dijkstra.compute_shortest_paths(graph, source))
                .collect()
        }
    }
}
