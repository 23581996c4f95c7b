//! Dense SSSP - single-source shortest paths over random undirected graphs
//!
//! The crate builds a dense, symmetric adjacency matrix (either from an explicit
//! edge list or from a density-driven random generator), runs Dijkstra's algorithm
//! from a chosen origin using an explicit open/closed node-set partition, and
//! reports the average shortest-path length from that origin to every node it
//! can reach.

pub mod aggregate;
pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use aggregate::{average_distance, summarize, PathSummary};
pub use algorithm::{
    dijkstra::HeapDijkstra, open_set::OpenSetDijkstra, shortest_paths, ResultSet,
    SettledNode, ShortestPathAlgorithm,
};
pub use config::{GeneratorConfig, RunConfig, RunOverrides, WeightRange};
/// Re-export main types for convenient use
pub use graph::dense::DenseGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid graph size: {0} (a graph needs at least one node)")]
    InvalidSize(usize),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid edge: from {from} to {to} ({reason})")]
    InvalidEdge {
        from: usize,
        to: usize,
        reason: &'static str,
    },

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("No node other than the origin is reachable")]
    NoReachableNodes,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
