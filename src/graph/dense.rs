use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// An undirected graph stored as a dense, symmetric adjacency matrix
///
/// Each cell holds `Some(weight)` when the edge is present. The node count is
/// fixed at construction; edges are added while the graph is being built and the
/// graph is only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Row-major `vertex_count * vertex_count` matrix of edge cells
    cells: Vec<Option<W>>,

    /// Number of undirected edges present
    edge_count: usize,
}

impl<W> DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with `vertices` nodes and no edges
    ///
    /// Fails with [`Error::InvalidSize`] for zero nodes or when the matrix would not
    /// fit in the address space.
    pub fn new(vertices: usize) -> Result<Self> {
        if vertices == 0 {
            return Err(Error::InvalidSize(vertices));
        }

        let cell_count = vertices
            .checked_mul(vertices)
            .filter(|&cells| {
                cells
                    .checked_mul(std::mem::size_of::<Option<W>>())
                    .map_or(false, |bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(Error::InvalidSize(vertices))?;

        Ok(DenseGraph {
            vertex_count: vertices,
            cells: vec![None; cell_count],
            edge_count: 0,
        })
    }

    /// Creates a graph from an explicit list of undirected `(i, j, weight)` edges
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = DenseGraph::new(vertices)?;
        for &(from, to, weight) in edges {
            graph.set_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Sets the undirected edge `(from, to)` to `weight`, overwriting any previous weight
    ///
    /// Self-loops, out-of-range endpoints and weights that are not strictly positive
    /// and finite are rejected with [`Error::InvalidEdge`] and leave the graph untouched.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let reject = |reason| Error::InvalidEdge { from, to, reason };

        if from >= self.vertex_count || to >= self.vertex_count {
            return Err(reject("endpoint out of range"));
        }
        if from == to {
            return Err(reject("self-loops are not allowed"));
        }
        if !(weight > W::zero()) || !weight.is_finite() {
            return Err(reject("weight must be positive and finite"));
        }

        let forward = self.index(from, to);
        let backward = self.index(to, from);
        if self.cells[forward].is_none() {
            self.edge_count += 1;
        }
        self.cells[forward] = Some(weight);
        self.cells[backward] = Some(weight);

        Ok(())
    }

    /// Number of nodes in the graph
    pub fn size(&self) -> usize {
        self.vertex_count
    }

    /// Iterates every undirected edge exactly once as `(i, j, weight)` with `i < j`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let n = self.vertex_count;
        (0..n).flat_map(move |i| {
            ((i + 1)..n).filter_map(move |j| self.cells[self.index(i, j)].map(|w| (i, j, w)))
        })
    }

    /// Converts the graph back into its serializable edge-list form
    pub fn to_edge_list(&self) -> EdgeList {
        EdgeList {
            node_count: self.vertex_count,
            edges: self
                .edges()
                .map(|(i, j, w)| (i, j, w.to_f64().unwrap_or(f64::NAN)))
                .collect(),
        }
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        row * self.vertex_count + column
    }
}

impl<W> Graph<W> for DenseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }

        let row = &self.cells[self.index(vertex, 0)..self.index(vertex, 0) + self.vertex_count];
        Box::new(
            row.iter()
                .enumerate()
                .filter_map(|(neighbor, cell)| cell.map(|weight| (neighbor, weight))),
        )
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        self.cells[self.index(from, to)]
    }
}

/// Serializable edge list used for fixed, reproducible graphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeList {
    pub node_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
}

impl EdgeList {
    /// Parses an edge list from JSON such as
    /// `{"node_count": 3, "edges": [[0, 1, 2.5], [1, 2, 1.0]]}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Builds the graph, converting each weight into `W`
    pub fn to_graph<W>(&self) -> Result<DenseGraph<W>>
    where
        W: Float + Zero + Debug + Copy,
    {
        let mut graph = DenseGraph::new(self.node_count)?;
        for &(from, to, weight) in &self.edges {
            let weight = W::from(weight).ok_or_else(|| {
                Error::InvalidParameter(format!("weight {} is not representable", weight))
            })?;
            graph.set_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}
