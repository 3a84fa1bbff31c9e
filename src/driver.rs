//! End-to-end oracle run: read a graph, solve, print the table

use std::io::{BufWriter, Read, Write};
use std::time::Instant;

use log::info;

use crate::algorithm::all_pairs::AllPairs;
use crate::algorithm::ShortestPathAlgorithm;
use crate::config::{Mode, OracleConfig};
use crate::graph::{read_graph, DirectedGraph, Graph};
use crate::report::{write_all_pairs, write_single_source};
use crate::{Dijkstra, Result};

/// Reads a graph from `input` and writes the table selected by `config` to `output`
pub fn run<R, O>(config: &OracleConfig, input: R, output: O) -> Result<()>
where
    R: Read,
    O: Write,
{
    let graph: DirectedGraph<u64> = read_graph(input)?;
    info!(
        "graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut out = BufWriter::new(output);
    let start = Instant::now();
    solve(config, &graph, &mut out)?;
    out.flush()?;
    info!("{:?} table written in {:?}", config.mode, start.elapsed());

    Ok(())
}

/// Solves an already built graph and writes the table selected by `config`
pub fn solve<O>(config: &OracleConfig, graph: &DirectedGraph<u64>, out: &mut O) -> Result<()>
where
    O: Write + ?Sized,
{
    match config.mode {
        Mode::AllPairs => {
            let results = AllPairs::new()
                .with_parallel(config.parallel)
                .compute(graph)?;
            write_all_pairs(&results, out)
        }
        // An empty graph has no vertices to report, not even the source
        Mode::SingleSource if graph.vertex_count() == 0 => Ok(()),
        Mode::SingleSource => {
            let result = Dijkstra::new().compute_shortest_paths(graph, config.source)?;
            write_single_source(&result, out)
        }
    }
}
