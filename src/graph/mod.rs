pub mod traits;
pub mod dense;
pub mod generators;
pub mod fixtures;

pub use traits::Graph;
pub use dense::{DenseGraph, EdgeList};
pub use generators::{generate_random_graph, RandomGraphGenerator};
