use num_traits::Float;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// A candidate node with its best known distance from the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierEntry<W> {
    pub node: usize,
    pub distance: W,
    /// Node through which `distance` was reached
    pub predecessor: usize,
}

/// What [`Frontier::offer`] did with a candidate distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// The node was not in the frontier and has been added
    Inserted,
    /// The node's tentative distance was lowered
    Relaxed,
    /// The existing tentative distance was already at least as good
    Kept,
}

/// The open set of Dijkstra's algorithm, kept as an unordered list
///
/// Selecting the minimum is a linear scan over the list. A per-node slot index
/// makes membership tests and relaxation constant time.
#[derive(Debug, Clone)]
pub struct Frontier<W>
where
    W: Float + Debug,
{
    entries: Vec<FrontierEntry<W>>,
    /// Position of each node inside `entries`, if it is open
    slots: Vec<Option<usize>>,
}

impl<W> Frontier<W>
where
    W: Float + Debug,
{
    /// Creates an empty frontier for a graph of `vertex_count` nodes
    pub fn new(vertex_count: usize) -> Self {
        Frontier {
            entries: Vec::new(),
            slots: vec![None; vertex_count],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Tentative distance of an open node, `None` once it is closed or never offered
    pub fn distance_of(&self, node: usize) -> Option<W> {
        self.slots
            .get(node)
            .copied()
            .flatten()
            .map(|slot| self.entries[slot].distance)
    }

    /// Inserts `node` or lowers its tentative distance when `distance` is strictly smaller
    pub fn offer(&mut self, node: usize, distance: W, predecessor: usize) -> Offer {
        let slot = self.slots[node];
        match slot {
            None => {
                self.slots[node] = Some(self.entries.len());
                self.entries.push(FrontierEntry {
                    node,
                    distance,
                    predecessor,
                });
                Offer::Inserted
            }
            Some(slot) => {
                let entry = &mut self.entries[slot];
                if distance < entry.distance {
                    entry.distance = distance;
                    entry.predecessor = predecessor;
                    Offer::Relaxed
                } else {
                    Offer::Kept
                }
            }
        }
    }

    /// Removes and returns the entry with the smallest tentative distance
    ///
    /// Among equal distances the lowest node index wins.
    pub fn pop_min(&mut self) -> Option<FrontierEntry<W>> {
        let slot = self
            .entries
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| (OrderedFloat(entry.distance), entry.node))
            .map(|(slot, _)| slot)?;

        let entry = self.entries.swap_remove(slot);
        self.slots[entry.node] = None;
        if let Some(moved) = self.entries.get(slot) {
            self.slots[moved.node] = Some(slot);
        }

        Some(entry)
    }
}
