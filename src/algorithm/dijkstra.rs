use std::fmt::Debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::algorithm::{ResultSet, ShortestPathAlgorithm};
use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic binary-heap Dijkstra
///
/// Produces the same result set as [`OpenSetDijkstra`](crate::OpenSetDijkstra),
/// including finalization order, in `O(E log N)` instead of `O(N^2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapDijkstra;

impl HeapDijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        HeapDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for HeapDijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Heap Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, origin: usize) -> Result<ResultSet<W>> {
        if !graph.has_vertex(origin) {
            return Err(Error::InvalidVertex(origin));
        }

        let n = graph.vertex_count();
        log::debug!("heap dijkstra from {} over {} nodes", origin, n);

        let mut tentative: Vec<Option<W>> = vec![None; n];
        let mut closed = vec![false; n];
        let mut result = ResultSet::new(origin, n);

        // Items are (node, predecessor) so ties pop the lowest node first
        let mut queue = MinQueue::with_capacity(n);
        tentative[origin] = Some(W::zero());
        closed[origin] = true;

        for (v, weight) in graph.neighbors(origin) {
            tentative[v] = Some(weight);
            queue.push((v, origin), OrderedFloat(weight));
        }

        while let Some(((u, predecessor), OrderedFloat(dist_u))) = queue.pop() {
            // Stale entry: u was finalized through a shorter path
            if closed[u] {
                continue;
            }
            closed[u] = true;
            result.settle(u, dist_u, Some(predecessor));
            log::trace!("closed {} at {:?}", u, dist_u);

            for (v, weight) in graph.neighbors(u) {
                if closed[v] {
                    continue;
                }
                let new_dist = dist_u + weight;

                let should_update = match tentative[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    tentative[v] = Some(new_dist);
                    queue.push((v, u), OrderedFloat(new_dist));
                }
            }
        }

        log::debug!("settled {} of {} nodes from {}", result.len(), n, origin);
        Ok(result)
    }
}
