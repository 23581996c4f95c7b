use dense_sssp::aggregate::mean_of_averages;
use dense_sssp::graph::fixtures::textbook_graph;
use dense_sssp::{average_distance, shortest_paths, summarize, DenseGraph, Error};

#[test]
fn test_average_excludes_origin() {
    let graph = DenseGraph::from_edges(3, &[(0, 1, 3.0), (0, 2, 5.0)]).unwrap();
    let result = shortest_paths(&graph, 0).unwrap();
    assert_eq!(average_distance(&result).unwrap(), 4.0);
}

#[test]
fn test_average_on_origin_only_result() {
    let graph: DenseGraph<f64> = DenseGraph::new(1).unwrap();
    let result = shortest_paths(&graph, 0).unwrap();
    assert_eq!(average_distance(&result), Err(Error::NoReachableNodes));
}

#[test]
fn test_summary_of_reference_graph() {
    let graph = textbook_graph().unwrap();
    let summary = summarize(&shortest_paths(&graph, 0).unwrap());

    assert_eq!(summary.reachable, 8);
    assert_eq!(summary.unreachable, 0);
    assert_eq!(summary.mean, Some(12.25));
    assert_eq!(summary.max, Some(21.0));
}

#[test]
fn test_summary_with_unreachable_nodes() {
    let graph = DenseGraph::from_edges(6, &[(0, 1, 1.0), (1, 2, 1.5), (4, 5, 1.0)]).unwrap();
    let summary = summarize(&shortest_paths(&graph, 0).unwrap());

    assert_eq!(summary.reachable, 2);
    assert_eq!(summary.unreachable, 3);
    assert_eq!(summary.mean, Some(1.75));
    assert_eq!(summary.max, Some(2.5));
}

#[test]
fn test_summary_of_isolated_origin() {
    let graph = DenseGraph::from_edges(3, &[(1, 2, 1.0)]).unwrap();
    let summary = summarize(&shortest_paths(&graph, 0).unwrap());

    assert_eq!(summary.reachable, 0);
    assert_eq!(summary.unreachable, 2);
    assert_eq!(summary.mean, None);
    assert_eq!(summary.max, None);
}

#[test]
fn test_mean_of_averages() {
    assert_eq!(mean_of_averages(&[]), None);
    assert_eq!(mean_of_averages(&[4.0]), Some(4.0));
    assert_eq!(mean_of_averages(&[2.0, 3.0, 7.0]), Some(4.0));
}
