#![allow(dead_code)]

use std::path::PathBuf;

use navigator_lib::{load_graph, Edge, Graph, TravelConfig};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus.csv")
}

pub fn campus_graph() -> Graph {
    load_graph(&fixture_path(), &TravelConfig::default()).expect("fixture loads")
}

pub fn graph_from(edges: &[(&str, &str, f64)]) -> Graph {
    let mut graph = Graph::new();
    for (from, to, distance) in edges {
        graph
            .add_edge(Edge::new(*from, *to, *distance))
            .expect("valid edge");
    }
    graph
}
