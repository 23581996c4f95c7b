use dense_sssp::algorithm::{ResultSet, ShortestPathAlgorithm};
use dense_sssp::graph::{DenseGraph, Graph, RandomGraphGenerator};
use dense_sssp::{
    average_distance, shortest_paths, Error, HeapDijkstra, OpenSetDijkstra, WeightRange,
};

fn random_graph(seed: u64, nodes: usize, density: f64) -> DenseGraph<f64> {
    RandomGraphGenerator::seeded(seed)
        .generate(nodes, density, WeightRange::default())
        .unwrap()
}

// Every edge out of a settled node leads to a settled node no farther than the edge allows
fn assert_settled_closure(graph: &DenseGraph<f64>, result: &ResultSet<f64>) {
    for entry in result {
        for (neighbor, weight) in graph.neighbors(entry.node) {
            let reached = result
                .distance_to(neighbor)
                .unwrap_or_else(|| panic!("neighbor {} of {} not settled", neighbor, entry.node));
            assert!(reached <= entry.distance + weight + 1e-9);
        }
    }
}

#[test]
fn test_random_graphs_satisfy_shortest_path_conditions() {
    for seed in 0..10 {
        let graph = random_graph(seed, 40, 0.15);
        let result = shortest_paths(&graph, 0).unwrap();
        assert_settled_closure(&graph, &result);

        for entry in result.iter().skip(1) {
            let predecessor = entry.predecessor.expect("non-origin entries have a predecessor");
            let via = result.distance_to(predecessor).unwrap()
                + graph.edge_weight(predecessor, entry.node).unwrap();
            assert_eq!(via, entry.distance);
        }
    }
}

#[test]
fn test_closing_order_is_monotonic_on_random_graphs() {
    for seed in 0..10 {
        let graph = random_graph(seed, 50, 0.2);
        let result = shortest_paths(&graph, 0).unwrap();
        let distances: Vec<f64> = result.iter().map(|e| e.distance).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]), "seed {}", seed);
    }
}

#[test]
fn test_engines_produce_same_result_sets() {
    for seed in 0..10 {
        let graph = random_graph(seed, 50, 0.4);
        let open = OpenSetDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        let heap = HeapDijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(open.distances(), heap.distances(), "seed {}", seed);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = random_graph(21, 50, 0.2);
    let first = shortest_paths(&graph, 3).unwrap();
    let second = shortest_paths(&graph, 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_equal_distances_close_deterministically() {
    // Every leaf sits at distance 1 from the hub
    let graph = DenseGraph::from_edges(5, &[(0, 4, 1.0), (0, 2, 1.0), (0, 3, 1.0), (0, 1, 1.0)])
        .unwrap();

    let first: Vec<usize> = shortest_paths(&graph, 0).unwrap().nodes().collect();
    for _ in 0..5 {
        let again: Vec<usize> = shortest_paths(&graph, 0).unwrap().nodes().collect();
        assert_eq!(first, again);
    }
    let heap: Vec<usize> = HeapDijkstra::new()
        .compute_shortest_paths(&graph, 0)
        .unwrap()
        .nodes()
        .collect();
    assert_eq!(first, heap);
    assert_eq!(first[0], 0);
}

#[test]
fn test_disconnected_nodes_are_left_out() {
    let graph = DenseGraph::from_edges(5, &[(0, 1, 2.0), (1, 2, 3.0), (3, 4, 1.0)]).unwrap();
    let result = shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.len(), 3);
    assert!(!result.contains(3));
    assert!(!result.contains(4));
    assert_eq!(result.distance_to(4), None);
    assert_eq!(result.path_to(3), None);
    assert_eq!(result.distances(), vec![Some(0.0), Some(2.0), Some(5.0), None, None]);
    assert_eq!(average_distance(&result).unwrap(), 3.5);
}

#[test]
fn test_isolated_origin() {
    let graph = DenseGraph::from_edges(4, &[(1, 2, 1.0), (2, 3, 1.0)]).unwrap();
    for engine in [
        &OpenSetDijkstra::new() as &dyn ShortestPathAlgorithm<f64, DenseGraph<f64>>,
        &HeapDijkstra::new(),
    ] {
        let result = engine.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.nodes().collect::<Vec<_>>(), vec![0], "{}", engine.name());
        assert_eq!(average_distance(&result), Err(Error::NoReachableNodes));
    }
}

#[test]
fn test_single_node_graph() {
    let graph: DenseGraph<f64> = DenseGraph::new(1).unwrap();
    let result = shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.distance_to(0), Some(0.0));
    assert_eq!(average_distance(&result), Err(Error::NoReachableNodes));
}

#[test]
fn test_origin_out_of_range() {
    let graph: DenseGraph<f64> = DenseGraph::new(3).unwrap();
    assert_eq!(shortest_paths(&graph, 3).unwrap_err(), Error::InvalidVertex(3));
    assert_eq!(
        HeapDijkstra::new().compute_shortest_paths(&graph, 7).unwrap_err(),
        Error::InvalidVertex(7)
    );
}

#[test]
fn test_non_zero_origin() {
    let graph = DenseGraph::from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
    let result = shortest_paths(&graph, 2).unwrap();

    assert_eq!(result.origin(), 2);
    assert_eq!(result.distances(), vec![Some(2.0), Some(1.0), Some(0.0), Some(1.0)]);
    assert_eq!(result.path_to(0), Some(vec![2, 1, 0]));
}
