pub mod frontier;
pub mod priority_queue;

pub use frontier::{Frontier, FrontierEntry, Offer};
pub use priority_queue::MinQueue;
