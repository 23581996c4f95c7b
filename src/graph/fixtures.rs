use crate::graph::DenseGraph;
use crate::Result;

/// Undirected edges of the classic nine-node textbook example
pub const TEXTBOOK_EDGES: [(usize, usize, f64); 14] = [
    (0, 1, 4.0),
    (0, 7, 8.0),
    (1, 2, 8.0),
    (1, 7, 11.0),
    (2, 3, 7.0),
    (2, 5, 4.0),
    (2, 8, 2.0),
    (3, 4, 9.0),
    (3, 5, 14.0),
    (4, 5, 10.0),
    (5, 6, 2.0),
    (6, 7, 1.0),
    (6, 8, 6.0),
    (7, 8, 7.0),
];

/// Builds the nine-node reference graph
///
/// Shortest distances from node 0 are `[0, 4, 12, 19, 21, 11, 9, 8, 14]`.
pub fn textbook_graph() -> Result<DenseGraph<f64>> {
    DenseGraph::from_edges(9, &TEXTBOOK_EDGES)
}
