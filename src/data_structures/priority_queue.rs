use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-ordered wrapper around BinaryHeap
///
/// Items with equal priority come out in ascending item order, so a queue keyed
/// by `(distance, node)` pops the lowest node index first among equal distances.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a queue with room for `capacity` items before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the item with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }
}
