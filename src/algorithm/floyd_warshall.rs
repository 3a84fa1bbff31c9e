use log::{debug, warn};

use crate::graph::{Graph, Weight};

/// Dense Floyd-Warshall all-pairs shortest paths
///
/// O(n^3) time and O(n^2) space, so only suitable for small graphs. Serves as an
/// independent cross-check of the Dijkstra tables: same sentinel, same treatment
/// of lengths that reach it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

/// Dense all-pairs result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix<W>
where
    W: Weight,
{
    /// Lightest direct edge `i -> j`, [`Weight::unreachable`] when there is none
    pub weights: Vec<Vec<W>>,

    /// `distances[i][j]` is the distance from `i` to `j`
    pub distances: Vec<Vec<W>>,

    /// `predecessors[i][j]` is the vertex before `j` on a shortest path from `i`
    pub predecessors: Vec<Vec<Option<usize>>>,
}

impl FloydWarshall {
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes distances and the predecessor matrix for every pair of vertices
    pub fn all_pairs<W, G>(&self, graph: &G) -> DistanceMatrix<W>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let inf = W::unreachable();
        let mut weights = vec![vec![inf; n]; n];

        for (u, row) in weights.iter_mut().enumerate() {
            for (v, weight) in graph.outgoing_edges(u) {
                if weight < row[v] {
                    row[v] = weight;
                }
            }
        }

        let mut dist = weights.clone();
        let mut pred = vec![vec![None; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j && dist[i][j] != inf {
                    pred[i][j] = Some(i);
                }
            }
            dist[i][i] = W::zero();
        }

        for k in 0..n {
            for i in 0..n {
                let through = dist[i][k];
                if through == inf {
                    continue;
                }
                for j in 0..n {
                    let tail = dist[k][j];
                    if tail == inf {
                        continue;
                    }
                    let candidate = through.saturating_add(tail);
                    if candidate < dist[i][j] {
                        dist[i][j] = candidate;
                        pred[i][j] = pred[k][j];
                    }
                }
            }
        }

        debug!("floyd-warshall over {} vertices done", n);
        DistanceMatrix {
            weights,
            distances: dist,
            predecessors: pred,
        }
    }
}

impl<W> DistanceMatrix<W>
where
    W: Weight,
{
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance from `from` to `to`, `None` when unreachable or out of range
    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        self.distances
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|d| *d != W::unreachable())
    }

    /// One shortest path from `from` to `to`, both ends included
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        self.distance(from, to)?;

        let mut path = vec![to];
        let mut current = to;
        while current != from {
            current = self.predecessors[from][current]?;
            path.push(current);
            if path.len() > self.vertex_count() {
                warn!("cycle in predecessor matrix between {} and {}", from, to);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Every simple path from `start` to `end` whose length is at most `limit`
    ///
    /// Paths include both ends and are listed in depth-first order by vertex id.
    /// Parallel edges count once, at their lightest weight.
    pub fn paths_within(&self, start: usize, end: usize, limit: W) -> Vec<Vec<usize>> {
        let mut found = Vec::new();
        match self.distance(start, end) {
            Some(d) if d <= limit => {}
            _ => return found,
        }

        let mut path = vec![start];
        let mut on_path = vec![false; self.vertex_count()];
        on_path[start] = true;
        self.extend_paths(end, limit, W::zero(), &mut path, &mut on_path, &mut found);
        found
    }

    fn extend_paths(
        &self,
        end: usize,
        limit: W,
        length: W,
        path: &mut Vec<usize>,
        on_path: &mut [bool],
        found: &mut Vec<Vec<usize>>,
    ) {
        let last = path[path.len() - 1];
        if last == end {
            found.push(path.clone());
            return;
        }

        let inf = W::unreachable();
        for next in 0..self.vertex_count() {
            let weight = self.weights[last][next];
            if weight == inf || on_path[next] {
                continue;
            }

            // Prune when even the shortest continuation overshoots
            let reached = length.saturating_add(weight);
            let remaining = self.distances[next][end];
            if remaining == inf || reached.saturating_add(remaining) > limit {
                continue;
            }

            path.push(next);
            on_path[next] = true;
            self.extend_paths(end, limit, reached, path, on_path, found);
            on_path[next] = false;
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use crate::UNREACHABLE;

    fn triangle() -> DirectedGraph<u64> {
        let edges = vec![(0, 1, 5), (1, 2, 3), (0, 2, 10), (0, 1, 7)];
        DirectedGraph::from_edges(3, edges).unwrap()
    }

    #[test]
    fn small_matrix() {
        let m = FloydWarshall::new().all_pairs(&triangle());
        assert_eq!(
            m.distances,
            vec![
                vec![0, 5, 8],
                vec![UNREACHABLE, 0, 3],
                vec![UNREACHABLE, UNREACHABLE, 0],
            ]
        );
        assert_eq!(m.weights[0][1], 5);
        assert_eq!(m.predecessors[0], vec![None, Some(0), Some(1)]);
        assert_eq!(m.predecessors[1][0], None);
    }

    #[test]
    fn self_loop_does_not_beat_zero() {
        let g = DirectedGraph::<u64>::from_edges(1, vec![(0, 0, 4)]).unwrap();
        let m = FloydWarshall::new().all_pairs(&g);
        assert_eq!(m.distances, vec![vec![0]]);
        assert_eq!(m.path(0, 0), Some(vec![0]));
    }

    #[test]
    fn reconstructs_paths() {
        let m = FloydWarshall::new().all_pairs(&triangle());
        assert_eq!(m.path(0, 2), Some(vec![0, 1, 2]));
        assert_eq!(m.path(2, 0), None);
        assert_eq!(m.path(0, 9), None);
        assert_eq!(m.distance(1, 2), Some(3));
    }

    #[test]
    fn lists_paths_within_limit() {
        let m = FloydWarshall::new().all_pairs(&triangle());
        assert_eq!(m.paths_within(0, 2, 7), Vec::<Vec<usize>>::new());
        assert_eq!(m.paths_within(0, 2, 8), vec![vec![0, 1, 2]]);
        assert_eq!(m.paths_within(0, 2, 10), vec![vec![0, 1, 2], vec![0, 2]]);
        assert_eq!(m.paths_within(1, 1, 0), vec![vec![1]]);
        assert!(m.paths_within(2, 0, u64::MAX).is_empty());
    }

    #[test]
    fn zero_weight_cycles_do_not_repeat_vertices() {
        let edges = vec![(0, 1, 0), (1, 0, 0), (1, 2, 0)];
        let g = DirectedGraph::<u64>::from_edges(3, edges).unwrap();
        let m = FloydWarshall::new().all_pairs(&g);
        assert_eq!(m.paths_within(0, 2, 0), vec![vec![0, 1, 2]]);
        assert_eq!(m.path(0, 2), Some(vec![0, 1, 2]));
    }
}
