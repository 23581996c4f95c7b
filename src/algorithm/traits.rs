use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::Serialize;
use crate::graph::Graph;
use crate::Result;

/// A node whose shortest distance from the origin has been finalized
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SettledNode<W> {
    pub node: usize,
    pub distance: W,
    /// Previous node on the shortest path; `None` only for the origin
    pub predecessor: Option<usize>,
}

/// Result of a shortest path algorithm execution
///
/// Entries are kept in the order nodes were finalized, starting with the origin at
/// distance zero. Nodes that cannot be reached from the origin have no entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet<W>
where
    W: Float + Zero + Debug + Copy,
{
    origin: usize,
    node_count: usize,
    entries: Vec<SettledNode<W>>,
    /// Index into `entries` for each settled node
    #[serde(skip)]
    positions: Vec<Option<usize>>,
}

impl<W> ResultSet<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Starts a result set containing only the origin at distance zero
    pub(crate) fn new(origin: usize, node_count: usize) -> Self {
        let mut result = ResultSet {
            origin,
            node_count,
            entries: Vec::with_capacity(node_count),
            positions: vec![None; node_count],
        };
        result.settle(origin, W::zero(), None);
        result
    }

    pub(crate) fn settle(&mut self, node: usize, distance: W, predecessor: Option<usize>) {
        debug_assert!(self.positions[node].is_none(), "node {} settled twice", node);
        self.positions[node] = Some(self.entries.len());
        self.entries.push(SettledNode {
            node,
            distance,
            predecessor,
        });
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Number of nodes in the graph the result was computed on
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of settled nodes, origin included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the origin is settled on construction
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SettledNode<W>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SettledNode<W>> + '_ {
        self.entries.iter()
    }

    /// Settled nodes in finalization order
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|entry| entry.node)
    }

    pub fn contains(&self, node: usize) -> bool {
        self.positions.get(node).map_or(false, Option::is_some)
    }

    /// Shortest distance to `node`, or `None` when it is unreachable
    pub fn distance_to(&self, node: usize) -> Option<W> {
        self.settled(node).map(|entry| entry.distance)
    }

    pub fn settled(&self, node: usize) -> Option<&SettledNode<W>> {
        self.positions
            .get(node)
            .copied()
            .flatten()
            .map(|position| &self.entries[position])
    }

    /// Distances indexed by node, `None` for unreachable nodes
    pub fn distances(&self) -> Vec<Option<W>> {
        (0..self.node_count).map(|node| self.distance_to(node)).collect()
    }

    /// Get the shortest path from the origin to `target` as a sequence of vertices
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        let mut current = self.settled(target)?;
        let mut path = vec![current.node];

        while let Some(previous) = current.predecessor {
            current = self.settled(previous)?;
            path.push(current.node);
            if path.len() > self.entries.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

impl<'a, W> IntoIterator for &'a ResultSet<W>
where
    W: Float + Zero + Debug + Copy,
{
    type Item = &'a SettledNode<W>;
    type IntoIter = std::slice::Iter<'a, SettledNode<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from `origin` to every reachable vertex
    fn compute_shortest_paths(&self, graph: &G, origin: usize) -> Result<ResultSet<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
