//! Text input format
//!
//! Whitespace separated tokens: a vertex count `n` and edge count `m`, followed by
//! `m` triples `u v w` describing a directed edge `u -> v` of weight `w`.
//! Anything after the last triple is ignored.

use std::io::Read;
use std::str::{FromStr, SplitWhitespace};

use log::debug;

use crate::graph::{DirectedGraph, Graph, Weight};
use crate::{Error, Result};

/// Reads a graph from any reader, e.g. standard input
pub fn read_graph<W, R>(mut reader: R) -> Result<DirectedGraph<W>>
where
    W: Weight,
    R: Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_graph(&text)
}

/// Parses a graph from its textual description
pub fn parse_graph<W>(text: &str) -> Result<DirectedGraph<W>>
where
    W: Weight,
{
    let mut tokens = Tokens(text.split_whitespace());

    let n: usize = tokens.next("vertex count")?;
    let m: usize = tokens.next("edge count")?;

    let mut edges = Vec::with_capacity(m.min(1 << 20));
    for _ in 0..m {
        let u: usize = tokens.next("edge source")?;
        let v: usize = tokens.next("edge target")?;
        let w: i64 = tokens.next("edge weight")?;
        if w < 0 {
            return Err(Error::NegativeWeight(w));
        }
        let weight: W = num_traits::cast(w).ok_or_else(|| Error::InvalidToken(w.to_string()))?;
        edges.push((u, v, weight));
    }

    let graph = DirectedGraph::from_edges(n, edges)?;
    debug!(
        "parsed graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        let token = self.0.next().ok_or(Error::UnexpectedEof(what))?;
        token
            .parse()
            .map_err(|_| Error::InvalidToken(token.to_string()))
    }
}
