pub mod directed;
pub mod generators;
pub mod io;
pub mod traits;

pub use directed::{DirectedGraph, Edge};
pub use io::{parse_graph, read_graph};
pub use traits::{Graph, MutableGraph, Weight};
