pub mod all_pairs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
