//! Route queries over a loaded landmark graph.
//!
//! This module provides:
//! - [`RouteRequest`] - source/destination names plus an optional cap on alternatives
//! - [`Route`] - a path with its distance converted to meters and minutes
//! - [`RoutePlan`] - the optimal route together with ranked alternatives
//! - [`plan_routes`] - main entry point combining Dijkstra and path enumeration
//! - [`spawn_plan`] - runs a plan on a worker thread for interactive callers
//!
//! Names are resolved before any algorithm runs, so an unknown landmark never
//! reaches the search code.
//!
//! # Example
//!
//! ```
//! use navigator_lib::{plan_routes, Edge, Graph, RouteRequest, TravelConfig};
//!
//! let mut graph = Graph::new();
//! graph.add_edge(Edge::new("Library", "Great Hall", 1.0))?;
//! graph.add_edge(Edge::new("Great Hall", "Main Gate", 1.0))?;
//! graph.add_edge(Edge::new("Library", "Main Gate", 5.0))?;
//!
//! let request = RouteRequest::new("library", "main gate");
//! let plan = plan_routes(&graph, &request, &TravelConfig::default())?;
//! assert_eq!(plan.optimal.nodes, ["Library", "Great Hall", "Main Gate"]);
//! assert_eq!(plan.alternatives.len(), 2);
//! # Ok::<(), navigator_lib::Error>(())
//! ```

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use serde::Serialize;

use crate::config::TravelConfig;
use crate::dijkstra::find_shortest_path;
use crate::enumerate::all_simple_paths;
use crate::error::{Error, Result};
use crate::graph::{Graph, Node};
use crate::sort::{sort_by_distance, Ranked};

/// High-level route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub source: String,
    pub destination: String,
    /// Keep only the first `n` ranked alternatives when set.
    pub alternatives_limit: Option<usize>,
}

impl RouteRequest {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            alternatives_limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.alternatives_limit = Some(limit);
        self
    }
}

/// Path between two landmarks with its length and walking time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub nodes: Vec<String>,
    /// Distance in graph units.
    pub distance: f64,
    pub distance_meters: f64,
    pub time_minutes: f64,
}

impl Route {
    fn from_path(path: &[Node], distance: f64, travel: &TravelConfig) -> Self {
        Self {
            nodes: path.iter().map(|node| node.name().to_string()).collect(),
            distance,
            distance_meters: travel.meters(distance),
            time_minutes: travel.minutes(distance),
        }
    }

    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Join the landmark names with `separator`.
    pub fn joined(&self, separator: &str) -> String {
        self.nodes.join(separator)
    }
}

impl Ranked for Route {
    fn rank_key(&self) -> f64 {
        self.distance
    }
}

/// Optimal route plus ranked alternatives for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub source: String,
    pub destination: String,
    pub optimal: Route,
    /// Simple paths ranked by distance, possibly truncated by the request.
    pub alternatives: Vec<Route>,
    /// Number of simple paths found before truncation.
    pub total_alternatives: usize,
}

fn resolve_endpoints<'g>(
    graph: &'g Graph,
    source: &str,
    destination: &str,
) -> Result<(&'g Node, &'g Node)> {
    let source = graph.resolve(source)?;
    let destination = graph.resolve(destination)?;
    Ok((source, destination))
}

fn unreachable(source: &Node, destination: &Node) -> Error {
    Error::Unreachable {
        start: source.name().to_string(),
        goal: destination.name().to_string(),
    }
}

/// Minimum-distance route between two landmark names.
pub fn shortest_route(
    graph: &Graph,
    source: &str,
    destination: &str,
    travel: &TravelConfig,
) -> Result<Route> {
    let (source, destination) = resolve_endpoints(graph, source, destination)?;
    let path = find_shortest_path(graph, source, destination)?;
    Ok(Route::from_path(&path.nodes, path.distance, travel))
}

/// Every simple route between two landmark names, shortest first.
///
/// Routes with equal distance keep the order in which they were explored.
pub fn all_routes(
    graph: &Graph,
    source: &str,
    destination: &str,
    travel: &TravelConfig,
) -> Result<Vec<Route>> {
    let (source, destination) = resolve_endpoints(graph, source, destination)?;
    ranked_routes(graph, source, destination, travel)
}

fn ranked_routes(
    graph: &Graph,
    source: &Node,
    destination: &Node,
    travel: &TravelConfig,
) -> Result<Vec<Route>> {
    let paths = all_simple_paths(graph, source, destination)?;
    if paths.is_empty() {
        return Err(unreachable(source, destination));
    }

    let mut routes = paths
        .iter()
        .map(|path| {
            let distance = graph.checked_path_distance(path)?;
            Ok(Route::from_path(path, distance, travel))
        })
        .collect::<Result<Vec<_>>>()?;
    sort_by_distance(&mut routes);
    Ok(routes)
}

/// Compute the optimal route and ranked alternatives for `request`.
pub fn plan_routes(graph: &Graph, request: &RouteRequest, travel: &TravelConfig) -> Result<RoutePlan> {
    let (source, destination) = resolve_endpoints(graph, &request.source, &request.destination)?;

    let shortest = find_shortest_path(graph, source, destination)?;
    let optimal = Route::from_path(&shortest.nodes, shortest.distance, travel);

    let mut alternatives = ranked_routes(graph, source, destination, travel)?;
    let total_alternatives = alternatives.len();
    if let Some(limit) = request.alternatives_limit {
        alternatives.truncate(limit);
    }

    Ok(RoutePlan {
        source: source.name().to_string(),
        destination: destination.name().to_string(),
        optimal,
        alternatives,
        total_alternatives,
    })
}

/// Handle to a route plan computed on a worker thread.
///
/// Dropping the handle detaches the worker; its result is discarded, which is
/// how callers abandon a superseded query.
#[derive(Debug)]
pub struct PlanHandle {
    handle: JoinHandle<Result<RoutePlan>>,
}

impl PlanHandle {
    /// Whether the worker has produced its result.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the plan. A panic on the worker is propagated to the caller.
    pub fn join(self) -> Result<RoutePlan> {
        match self.handle.join() {
            Ok(result) => result,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

/// Run [`plan_routes`] on a new thread against a shared, read-only graph.
pub fn spawn_plan(graph: Arc<Graph>, request: RouteRequest, travel: TravelConfig) -> PlanHandle {
    let handle = thread::spawn(move || plan_routes(&graph, &request, &travel));
    PlanHandle { handle }
}
