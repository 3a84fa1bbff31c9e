use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// An outgoing edge record: destination vertex and weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub to: usize,
    pub weight: W,
}

/// A directed multigraph using one owned adjacency list per vertex
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex, in insertion order
    adjacency: Vec<Vec<Edge<W>>>,

    /// Total number of edges, parallel edges included
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with `vertices` vertices and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from a vertex count and a list of `(from, to, weight)` triples.
    ///
    /// Fails on the first edge whose endpoint is not in `0..vertices`.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (from, to, weight) in edges {
            if !graph.add_edge(from, to, weight) {
                let bad = if graph.has_vertex(from) { to } else { from };
                return Err(Error::InvalidVertex(bad));
            }
        }
        Ok(graph)
    }

    /// Borrows the outgoing edge list of a vertex; empty for unknown vertices
    pub fn edges_from(&self, vertex: usize) -> &[Edge<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.edges_from(vertex).iter().map(|edge| (edge.to, edge.weight)))
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        self.adjacency[from].push(Edge { to, weight });
        self.edge_count += 1;
        true
    }
}
