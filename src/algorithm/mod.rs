pub mod traits;
pub mod dijkstra;
pub mod open_set;

pub use traits::{ResultSet, SettledNode, ShortestPathAlgorithm};

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::Result;

/// Shortest distances from `origin` using the open-set engine
pub fn shortest_paths<W, G>(graph: &G, origin: usize) -> Result<ResultSet<W>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    open_set::OpenSetDijkstra::new().compute_shortest_paths(graph, origin)
}
