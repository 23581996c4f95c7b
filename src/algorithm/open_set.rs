use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{ResultSet, ShortestPathAlgorithm};
use crate::data_structures::{Frontier, Offer};
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm over an explicit open set and closed set
///
/// Each round scans the open set for the entry with the smallest tentative
/// distance, moves it to the closed set and relaxes its neighbors. With `N` nodes
/// this is `O(N^2)` selection work, which suits the dense graphs this crate
/// builds.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenSetDijkstra;

impl OpenSetDijkstra {
    pub fn new() -> Self {
        OpenSetDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for OpenSetDijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Open-set Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, origin: usize) -> Result<ResultSet<W>> {
        if !graph.has_vertex(origin) {
            return Err(Error::InvalidVertex(origin));
        }

        let n = graph.vertex_count();
        log::debug!("open-set dijkstra from {} over {} nodes", origin, n);

        let mut closed = vec![false; n];
        let mut open = Frontier::new(n);
        let mut result = ResultSet::new(origin, n);
        closed[origin] = true;

        for (neighbor, weight) in graph.neighbors(origin) {
            open.offer(neighbor, weight, origin);
        }
        if open.is_empty() {
            log::debug!("origin {} has no neighbors", origin);
        }

        while let Some(current) = open.pop_min() {
            closed[current.node] = true;
            result.settle(current.node, current.distance, Some(current.predecessor));
            log::trace!(
                "closed {} at {:?}, {} still open",
                current.node,
                current.distance,
                open.len()
            );

            for (neighbor, weight) in graph.neighbors(current.node) {
                if closed[neighbor] {
                    continue;
                }
                let candidate = current.distance + weight;
                let previous = open.distance_of(neighbor);
                if open.offer(neighbor, candidate, current.node) == Offer::Relaxed {
                    log::trace!(
                        "relaxed {} from {:?} to {:?} via {}",
                        neighbor,
                        previous,
                        candidate,
                        current.node
                    );
                }
            }
        }

        log::debug!("settled {} of {} nodes from {}", result.len(), n, origin);
        Ok(result)
    }
}
