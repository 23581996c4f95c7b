use dense_sssp::data_structures::{Frontier, FrontierEntry, MinQueue, Offer};
use ordered_float::OrderedFloat;

#[test]
fn test_frontier_offer_insert_relax_keep() {
    let mut open: Frontier<f64> = Frontier::new(4);
    assert!(open.is_empty());

    assert_eq!(open.offer(2, 10.0, 0), Offer::Inserted);
    assert_eq!(open.distance_of(2), Some(10.0));
    assert_eq!(open.len(), 1);

    // strictly shorter path replaces distance and predecessor
    assert_eq!(open.offer(2, 7.0, 1), Offer::Relaxed);
    assert_eq!(open.distance_of(2), Some(7.0));

    // equal and longer paths leave the entry alone
    assert_eq!(open.offer(2, 7.0, 3), Offer::Kept);
    assert_eq!(open.offer(2, 9.0, 3), Offer::Kept);
    assert_eq!(open.len(), 1);

    assert_eq!(
        open.pop_min(),
        Some(FrontierEntry {
            node: 2,
            distance: 7.0,
            predecessor: 1
        })
    );
    assert!(open.is_empty());
    assert_eq!(open.pop_min(), None);
}

#[test]
fn test_frontier_equal_distance_keeps_first_predecessor() {
    let mut open: Frontier<f64> = Frontier::new(3);
    open.offer(1, 4.0, 0);
    assert_eq!(open.offer(1, 4.0, 2), Offer::Kept);
    assert_eq!(open.pop_min().map(|entry| entry.predecessor), Some(0));
}

#[test]
fn test_frontier_pops_lowest_node_on_ties() {
    let mut open: Frontier<f64> = Frontier::new(6);
    open.offer(5, 2.0, 0);
    open.offer(3, 2.0, 0);
    open.offer(4, 1.0, 0);
    open.offer(1, 2.0, 0);

    let order: Vec<usize> = std::iter::from_fn(|| open.pop_min())
        .map(|entry| entry.node)
        .collect();
    assert_eq!(order, vec![4, 1, 3, 5]);
}

#[test]
fn test_frontier_slots_survive_middle_removal() {
    let mut open: Frontier<f64> = Frontier::new(5);
    open.offer(0, 5.0, 4);
    open.offer(1, 1.0, 4);
    open.offer(2, 4.0, 4);
    open.offer(3, 3.0, 4);

    // node 1 sits in the middle; node 3 takes its place in the list
    assert_eq!(open.pop_min().map(|entry| entry.node), Some(1));
    assert_eq!(open.len(), 3);
    assert_eq!(open.distance_of(1), None);
    assert_eq!(open.distance_of(3), Some(3.0));

    assert_eq!(open.offer(3, 0.5, 2), Offer::Relaxed);
    assert_eq!(open.distance_of(3), Some(0.5));
    assert_eq!(open.distance_of(0), Some(5.0));
    assert_eq!(open.distance_of(2), Some(4.0));
    assert_eq!(open.offer(1, 7.0, 0), Offer::Inserted);

    let order: Vec<(usize, f64, usize)> = std::iter::from_fn(|| open.pop_min())
        .map(|entry| (entry.node, entry.distance, entry.predecessor))
        .collect();
    assert_eq!(order, vec![(3, 0.5, 2), (2, 4.0, 4), (0, 5.0, 4), (1, 7.0, 0)]);
    assert!(open.is_empty());
}

#[test]
fn test_min_queue_orders_by_priority_then_item() {
    let mut queue = MinQueue::with_capacity(3);
    queue.push((2, 0), OrderedFloat(1.0));
    queue.push((0, 0), OrderedFloat(3.0));
    queue.push((1, 0), OrderedFloat(1.0));

    assert_eq!(queue.pop(), Some(((1, 0), OrderedFloat(1.0))));
    assert_eq!(queue.pop(), Some(((2, 0), OrderedFloat(1.0))));
    assert_eq!(queue.pop(), Some(((0, 0), OrderedFloat(3.0))));
    assert_eq!(queue.pop(), None);
}
