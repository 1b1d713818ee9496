//! Landmark navigator library entry points.
//!
//! This crate loads a campus adjacency matrix into an undirected weighted
//! graph and answers route queries against it: the globally shortest path
//! (Dijkstra) and every simple alternative ranked by distance. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod dijkstra;
pub mod enumerate;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod routing;
pub mod sort;

pub use config::TravelConfig;
pub use dijkstra::{find_shortest_path, shortest_path_tree, ShortestPath, ShortestPathTree};
pub use enumerate::{all_simple_paths, ENUMERATION_NODE_CEILING};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Node};
pub use matrix::load_graph;
pub use routing::{
    all_routes, plan_routes, shortest_route, spawn_plan, PlanHandle, Route, RoutePlan,
    RouteRequest,
};
pub use sort::{merge_sort_by, sort_by_distance, sort_by_length, Ranked};
