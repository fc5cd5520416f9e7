mod dijkstra;
mod error;
pub mod generator;
pub mod graph;

pub use dijkstra::{ShortestPath, shortest_distances, shortest_path};
pub use error::{GraphError, Result};
pub use graph::{Neighbor, WeightedGraph};

pub type Weight = u64;

/// Total weight of a route. Wide enough that no path of `Weight` edges
/// overflows it.
pub type Distance = u128;
