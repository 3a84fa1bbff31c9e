//! Dijkstra Oracle - reference shortest-path distances for validating other implementations
//!
//! This library computes single-source and all-pairs shortest path distances on
//! directed multigraphs with non-negative integer edge weights, and renders them
//! in a plain text format that can be diffed line by line against the output of an
//! independent implementation of the same computation.
//!
//! Unreachable vertices are reported with the finite sentinel [`UNREACHABLE`]
//! (`0x7f7f7f7f`) rather than an infinity symbol, so both sides agree textually.

pub mod algorithm;
pub mod compare;
pub mod config;
pub mod data_structures;
pub mod driver;
pub mod graph;
pub mod report;

pub use algorithm::{
    all_pairs::AllPairs,
    dijkstra::Dijkstra,
    floyd_warshall::{DistanceMatrix, FloydWarshall},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use config::{Mode, OracleConfig};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::Weight;

/// Distance reported for vertices that cannot be reached from the source.
///
/// This is the value of a 32-bit signed integer whose four bytes are all `0x7f`.
pub const UNREACHABLE: u64 = 0x7f7f_7f7f;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(i64),

    #[error("Invalid token: {0:?}")]
    InvalidToken(String),

    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("Invalid generator parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Line count mismatch: expected {expected}, actual {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Malformed output line {0}: {1:?}")]
    MalformedLine(usize, String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
