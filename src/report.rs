//! Text rendering of distance tables
//!
//! One record per line, vertices in index order, distances printed as plain
//! integers with unreachable vertices showing the sentinel value.

use std::io::Write;

use crate::algorithm::ShortestPathResult;
use crate::graph::Weight;
use crate::Result;

/// Writes `"{i} -> {j}: {dist}"` for every source `i` and destination `j`
pub fn write_all_pairs<W, O>(results: &[ShortestPathResult<W>], out: &mut O) -> Result<()>
where
    W: Weight,
    O: Write + ?Sized,
{
    for result in results {
        for (target, distance) in result.distances.iter().enumerate() {
            writeln!(out, "{} -> {}: {}", result.source, target, distance)?;
        }
    }
    Ok(())
}

/// Writes `"{i}: {dist}"` for every vertex `i`
pub fn write_single_source<W, O>(result: &ShortestPathResult<W>, out: &mut O) -> Result<()>
where
    W: Weight,
    O: Write + ?Sized,
{
    for (vertex, distance) in result.distances.iter().enumerate() {
        writeln!(out, "{}: {}", vertex, distance)?;
    }
    Ok(())
}
