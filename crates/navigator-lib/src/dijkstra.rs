//! Single-source shortest paths over non-negative edge distances.
//!
//! Every invocation owns its working state (distances, predecessors, visited
//! flags and frontier), so repeated or concurrent queries against the same
//! [`Graph`] never interfere.
//!
//! The frontier is a binary heap ordered by `(distance, insertion position)`.
//! That selects the same node a linear scan over unvisited nodes would pick,
//! including the tie-break towards the earliest inserted node, in
//! O((V + E) log V) instead of O(V²).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, Node};

/// Minimum-distance path between two landmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub nodes: Vec<Node>,
    pub distance: f64,
}

impl ShortestPath {
    /// Number of edges walked.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Distances and predecessors from one source to every reachable node.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    graph: &'g Graph,
    source: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
}

impl<'g> ShortestPathTree<'g> {
    pub fn source(&self) -> &'g Node {
        &self.graph.nodes()[self.source]
    }

    /// Minimum distance from the source, or `None` when `destination` is
    /// unknown or unreachable.
    pub fn distance_to(&self, destination: &Node) -> Option<f64> {
        let position = self.graph.position(destination)?;
        let distance = self.distances[position];
        distance.is_finite().then_some(distance)
    }

    pub fn is_reachable(&self, destination: &Node) -> bool {
        self.distance_to(destination).is_some()
    }

    /// Number of nodes with a finite distance, the source included.
    pub fn reached(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Rebuild the path to `destination` by walking predecessor links.
    pub fn path_to(&self, destination: &Node) -> Result<Vec<Node>> {
        let goal = self
            .graph
            .position(destination)
            .ok_or_else(|| unknown(destination))?;
        if !self.distances[goal].is_finite() {
            return Err(Error::Unreachable {
                start: self.source().name().to_string(),
                goal: destination.name().to_string(),
            });
        }

        let nodes = self.graph.nodes();
        let mut path = Vec::new();
        let mut current = Some(goal);
        while let Some(position) = current {
            path.push(nodes[position].clone());
            if position == self.source {
                break;
            }
            current = self.predecessors[position];
        }
        path.reverse();
        Ok(path)
    }
}

/// Run Dijkstra from `source` over the whole graph.
///
/// The search stops once the frontier is empty, so the returned tree covers
/// every node reachable from `source`.
pub fn shortest_path_tree<'g>(graph: &'g Graph, source: &Node) -> Result<ShortestPathTree<'g>> {
    let start = graph.position(source).ok_or_else(|| unknown(source))?;
    let mut state = SearchState::new(graph.len(), start);

    while let Some(entry) = state.queue.pop() {
        let current = entry.position;
        if state.visited[current] || entry.cost.0 > state.distances[current] {
            continue;
        }
        state.visited[current] = true;

        let current_node = &graph.nodes()[current];
        for edge in graph.outgoing_edges(current_node) {
            let Some(next) = graph.position(&edge.destination) else {
                continue;
            };
            if state.visited[next] {
                continue;
            }
            let candidate = state.distances[current] + edge.distance;
            if candidate < state.distances[next] {
                state.distances[next] = candidate;
                state.predecessors[next] = Some(current);
                state.queue.push(QueueEntry::new(next, candidate));
            }
        }
    }

    let tree = ShortestPathTree {
        graph,
        source: start,
        distances: state.distances,
        predecessors: state.predecessors,
    };
    debug!(source = %source, reached = tree.reached(), "dijkstra finished");
    Ok(tree)
}

/// Find the minimum-distance path between `source` and `destination`.
///
/// Returns [`Error::Unreachable`] rather than a path with an infinite
/// distance when no connection exists.
pub fn find_shortest_path(graph: &Graph, source: &Node, destination: &Node) -> Result<ShortestPath> {
    if !graph.contains(destination) {
        return Err(unknown(destination));
    }
    if source == destination {
        return Ok(ShortestPath {
            nodes: vec![source.clone()],
            distance: 0.0,
        });
    }

    let tree = shortest_path_tree(graph, source)?;
    let nodes = tree.path_to(destination)?;
    let distance = tree.distance_to(destination).unwrap_or(0.0);
    Ok(ShortestPath { nodes, distance })
}

fn unknown(node: &Node) -> Error {
    Error::UnknownNode {
        name: node.name().to_string(),
        suggestions: Vec::new(),
    }
}

struct SearchState {
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
    visited: Vec<bool>,
    queue: BinaryHeap<QueueEntry>,
}

impl SearchState {
    fn new(size: usize, start: usize) -> Self {
        let mut distances = vec![f64::INFINITY; size];
        distances[start] = 0.0;
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(start, 0.0));
        Self {
            distances,
            predecessors: vec![None; size],
            visited: vec![false; size],
            queue,
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    position: usize,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(position: usize, cost: f64) -> Self {
        Self {
            position,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // insertion position.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
