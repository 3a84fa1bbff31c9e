use log::trace;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{Frontier, VisitedSet};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazy-deletion binary heap
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Working state of one single-source run
///
/// Created fresh for every source and dropped with the run, so nothing leaks
/// between sources.
struct Search<W>
where
    W: Weight,
{
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
    visited: VisitedSet,
    frontier: Frontier<W>,
    stale: usize,
    peak_frontier: usize,
}

impl<W> Search<W>
where
    W: Weight,
{
    fn new(vertices: usize, source: usize) -> Self {
        let mut distances = vec![W::unreachable(); vertices];
        distances[source] = W::zero();

        let mut frontier = Frontier::new();
        frontier.push(source, W::zero());

        Search {
            distances,
            predecessors: vec![None; vertices],
            visited: VisitedSet::new(vertices),
            frontier,
            stale: 0,
            peak_frontier: 1,
        }
    }

    fn run<G: Graph<W>>(&mut self, graph: &G) {
        while let Some((u, _)) = self.frontier.pop() {
            if !self.visited.insert(u) {
                self.stale += 1;
                continue;
            }

            let dist_u = self.distances[u];
            for (v, weight) in graph.outgoing_edges(u) {
                if self.visited.contains(v) {
                    continue;
                }

                // Lengths that reach the sentinel stay unreachable
                let new_dist = dist_u.saturating_add(weight);
                if new_dist < self.distances[v] {
                    self.distances[v] = new_dist;
                    self.predecessors[v] = Some(u);
                    self.frontier.push(v, new_dist);
                    self.peak_frontier = self.peak_frontier.max(self.frontier.len());
                }
            }
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let mut search = Search::new(graph.vertex_count(), source);
        search.run(graph);

        trace!(
            "{} from {}: {} vertices finalized, {} stale entries skipped, frontier peaked at {}",
            ShortestPathAlgorithm::<W, G>::name(self),
            source,
            search.visited.len(),
            search.stale,
            search.peak_frontier
        );

        Ok(ShortestPathResult {
            distances: search.distances,
            predecessors: search.predecessors,
            source,
        })
    }
}
