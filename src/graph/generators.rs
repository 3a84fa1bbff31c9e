use crate::graph::{DirectedGraph, MutableGraph};
use crate::{Error, Result};
use rand::prelude::*;
use std::collections::HashSet;

/// Generates a uniformly random directed multigraph with `n` vertices and `m` edges
/// Weights are drawn from `0..=max_weight`; parallel edges and self loops may occur
pub fn random_graph<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    max_weight: u64,
    rng: &mut R,
) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n == 0 {
        return graph;
    }

    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        graph.add_edge(u, v, rng.gen_range(0..=max_weight));
    }

    graph
}

/// Generates a Barabási-Albert scale-free graph with n vertices and m edges per new vertex
/// Edges point from each new vertex towards the existing vertices it attaches to, with
/// weights drawn from `0..=max_weight`
pub fn barabasi_albert<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    max_weight: u64,
    rng: &mut R,
) -> Result<DirectedGraph<u64>> {
    if m == 0 {
        return Err(Error::InvalidParameters("m must be positive"));
    }
    if n <= m {
        return Err(Error::InvalidParameters("n must be greater than m"));
    }

    let mut graph = DirectedGraph::with_vertices(m);

    // Complete graph on the seed vertices
    for i in 0..m {
        for j in 0..m {
            if i != j {
                graph.add_edge(i, j, rng.gen_range(0..=max_weight));
            }
        }
    }

    let mut degrees = vec![m - 1; m];
    let mut total_degree = m * (m - 1);

    for i in m..n {
        graph.add_vertex();
        let mut attached = HashSet::new();

        while attached.len() < m {
            let target = if total_degree == 0 {
                // A lone seed vertex has no degree to weigh by
                rng.gen_range(0..i)
            } else {
                // Preferential attachment by cumulative degree
                let mut target_value = rng.gen_range(0..total_degree);
                let mut target = 0;
                while target_value >= degrees[target] {
                    target_value -= degrees[target];
                    target += 1;
                }
                target
            };

            if attached.insert(target) {
                graph.add_edge(i, target, rng.gen_range(0..=max_weight));
                degrees[target] += 1;
                total_degree += 1;
            }
        }

        degrees.push(m);
        total_degree += m;
    }

    Ok(graph)
}

/// Generates a width*height grid with edges in both directions between 4-neighbours
pub fn grid_graph(width: usize, height: usize, weight: u64) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_vertices(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                graph.add_edge(current, index(x - 1, y), weight);
            }
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), weight);
            }
            if y > 0 {
                graph.add_edge(current, index(x, y - 1), weight);
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), weight);
            }
        }
    }

    graph
}
