pub mod priority_queue;
pub mod visited;

pub use priority_queue::Frontier;
pub use visited::VisitedSet;
