mod common;

use std::collections::HashSet;
use std::sync::Arc;

use navigator_lib::{
    all_routes, all_simple_paths, find_shortest_path, plan_routes, shortest_route, sort_by_distance,
    spawn_plan, Error, Node, RouteRequest, TravelConfig,
};

use common::{campus_graph, graph_from};

#[test]
fn triangle_shortcut_beats_direct_edge() {
    let graph = graph_from(&[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)]);
    let path = find_shortest_path(&graph, &"A".into(), &"C".into()).expect("path exists");
    let names: Vec<_> = path.nodes.iter().map(Node::name).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(path.distance, 2.0);
}

#[test]
fn every_node_routes_to_itself_at_zero_cost() {
    let graph = campus_graph();
    for node in graph.nodes() {
        let path = find_shortest_path(&graph, node, node).expect("self path");
        assert_eq!(path.nodes, vec![node.clone()]);
        assert_eq!(path.distance, 0.0);
    }
}

#[test]
fn campus_shortest_route() {
    let graph = campus_graph();
    let route = shortest_route(&graph, "Main Gate", "Legon Hall", &TravelConfig::default())
        .expect("route exists");
    assert_eq!(route.nodes, ["Main Gate", "Balme Library", "Legon Hall"]);
    assert_eq!(route.distance, 6.0);
    assert_eq!(route.distance_meters, 6000.0);
    assert!((route.time_minutes - 6000.0 / 70.0).abs() < 1e-9);
}

#[test]
fn shortest_distance_is_minimum_over_all_simple_paths() {
    let graph = campus_graph();
    let nodes: Vec<Node> = graph.nodes().to_vec();
    for source in &nodes {
        for destination in &nodes {
            let Ok(shortest) = find_shortest_path(&graph, source, destination) else {
                continue;
            };
            let paths = all_simple_paths(&graph, source, destination).expect("known nodes");
            let minimum = paths
                .iter()
                .map(|path| graph.path_distance(path))
                .fold(f64::INFINITY, f64::min);

            assert!((graph.path_distance(&shortest.nodes) - minimum).abs() < 1e-9);
            assert!((shortest.distance - minimum).abs() < 1e-9);
            assert!(
                paths.contains(&shortest.nodes),
                "enumeration misses shortest path {source} -> {destination}"
            );
        }
    }
}

#[test]
fn enumerated_paths_are_simple() {
    let graph = campus_graph();
    let paths = all_simple_paths(&graph, &"Main Gate".into(), &"Sports Stadium".into())
        .expect("known nodes");
    assert!(!paths.is_empty());
    for path in &paths {
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());
        for pair in path.windows(2) {
            assert!(graph.edge_between(&pair[0], &pair[1]).is_some());
        }
    }
}

#[test]
fn ranked_routes_are_non_decreasing_and_sorting_again_is_a_fixed_point() {
    let graph = campus_graph();
    let mut routes = all_routes(&graph, "Main Gate", "Sports Stadium", &TravelConfig::default())
        .expect("routes exist");
    assert!(routes.windows(2).all(|w| w[0].distance <= w[1].distance));

    let once = routes.clone();
    sort_by_distance(&mut routes);
    assert_eq!(routes, once);
}

#[test]
fn equal_distance_routes_keep_exploration_order() {
    // A square with equal sides: both routes from A to C cost 2.
    let graph = graph_from(&[
        ("A", "B", 1.0),
        ("B", "C", 1.0),
        ("A", "D", 1.0),
        ("D", "C", 1.0),
    ]);
    let explored = all_simple_paths(&graph, &"A".into(), &"C".into()).expect("known nodes");
    let routes = all_routes(&graph, "A", "C", &TravelConfig::default()).expect("routes");
    let explored_names: Vec<Vec<String>> = explored
        .iter()
        .map(|path| path.iter().map(|n| n.name().to_string()).collect())
        .collect();
    let ranked_names: Vec<Vec<String>> = routes.iter().map(|r| r.nodes.clone()).collect();
    assert_eq!(ranked_names, explored_names);
}

#[test]
fn disconnected_destination_signals_unreachable() {
    let graph = campus_graph();
    let travel = TravelConfig::default();
    let err = shortest_route(&graph, "Main Gate", "Botanical Garden", &travel).unwrap_err();
    assert!(matches!(err, Error::Unreachable { .. }));
    assert!(err.to_string().contains("no route found"));

    let err = plan_routes(
        &graph,
        &RouteRequest::new("Main Gate", "Botanical Garden"),
        &travel,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Unreachable { .. }));
}

#[test]
fn unknown_landmark_includes_suggestions() {
    let graph = campus_graph();
    let err = plan_routes(
        &graph,
        &RouteRequest::new("Balme Libary", "Great Hall"),
        &TravelConfig::default(),
    )
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown landmark"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Balme Library"));
}

#[test]
fn concurrent_queries_share_one_graph() {
    let graph = Arc::new(campus_graph());
    let travel = TravelConfig::default();
    let request = RouteRequest::new("Main Gate", "Great Hall").with_limit(3);
    let expected = plan_routes(&graph, &request, &travel).expect("plan");

    let handles: Vec<_> = (0..4)
        .map(|_| spawn_plan(Arc::clone(&graph), request.clone(), travel))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("plan"), expected);
    }
    assert_eq!(expected.optimal.distance, 6.5);
    assert_eq!(expected.alternatives.len(), 3);
}

#[test]
fn plan_serializes_for_json_consumers() {
    let graph = campus_graph();
    let plan = plan_routes(
        &graph,
        &RouteRequest::new("Main Gate", "Legon Hall").with_limit(2),
        &TravelConfig::default(),
    )
    .expect("plan");
    let value = serde_json::to_value(&plan).expect("serializes");
    assert_eq!(value["source"], "Main Gate");
    assert_eq!(value["optimal"]["distance_meters"], 6000.0);
    assert_eq!(value["alternatives"].as_array().map(Vec::len), Some(2));
}
