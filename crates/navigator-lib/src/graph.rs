use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::Arc;

use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a landmark name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Number of suggestions attached to an unknown-landmark error.
const MAX_SUGGESTIONS: usize = 3;

/// Named vertex in the landmark graph.
///
/// Identity is the name: two nodes built from the same string are the same
/// node. Cloning is cheap because the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    name: Arc<str>,
}

impl Node {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Borrow<str> for Node {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Node {
    fn from(name: &str) -> Self {
        Node::new(name)
    }
}

/// Directed, weighted arc between two landmarks.
///
/// The graph always stores an edge together with its mirror, so callers can
/// treat the connection as undirected.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: Node,
    pub destination: Node,
    pub distance: f64,
    /// Traversal time derived at load time; `None` when not computed.
    pub time: Option<f64>,
    pub label: Option<String>,
}

impl Edge {
    pub fn new(source: impl Into<Node>, destination: impl Into<Node>, distance: f64) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            distance,
            time: None,
            label: None,
        }
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// Build the reverse arc carrying the same distance, time and label.
    pub fn mirrored(&self) -> Edge {
        Edge {
            source: self.destination.clone(),
            destination: self.source.clone(),
            distance: self.distance,
            time: self.time,
            label: self.label.clone(),
        }
    }

    /// Order edges by distance alone, ignoring their endpoints.
    pub fn cmp_distance(&self, other: &Edge) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} Distance: {}",
            self.source, self.destination, self.distance
        )
    }
}

/// Undirected landmark graph stored as paired directed arcs.
///
/// Nodes keep their insertion order so listings and tie-breaks are
/// deterministic. The graph is populated once and then only read, which makes
/// it safe to share across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    positions: HashMap<Node, usize>,
    adjacency: Vec<Vec<Node>>,
    edges: Vec<Edge>,
    /// Outgoing edge indices per node position, in edge insertion order.
    outgoing: Vec<Vec<usize>>,
    /// Index of the single edge stored for each ordered position pair.
    pairs: HashMap<(usize, usize), usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` with an empty adjacency entry. Returns `false` when the
    /// node was already present.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.positions.contains_key(&node) {
            return false;
        }
        self.positions.insert(node.clone(), self.nodes.len());
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        self.outgoing.push(Vec::new());
        true
    }

    /// Insert `edge` and its mirror, updating both adjacency entries.
    ///
    /// Returns `Ok(false)` without touching the graph when an edge with the
    /// same ordered endpoints already exists, whatever its distance.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool> {
        if !edge.distance.is_finite() || edge.distance < 0.0 {
            return Err(Error::InvalidDistance {
                from: edge.source.name().to_string(),
                to: edge.destination.name().to_string(),
                distance: edge.distance,
            });
        }
        if edge.source == edge.destination {
            return Err(Error::SelfLoop {
                name: edge.source.name().to_string(),
            });
        }

        self.add_node(edge.source.clone());
        self.add_node(edge.destination.clone());

        let from = self.positions[&edge.source];
        let to = self.positions[&edge.destination];
        if self.pairs.contains_key(&(from, to)) {
            return Ok(false);
        }

        let reverse = edge.mirrored();
        self.adjacency[from].push(edge.destination.clone());
        self.adjacency[to].push(edge.source.clone());
        self.push_edge(from, to, edge);
        self.push_edge(to, from, reverse);
        Ok(true)
    }

    fn push_edge(&mut self, from: usize, to: usize, edge: Edge) {
        let index = self.edges.len();
        self.edges.push(edge);
        self.outgoing[from].push(index);
        self.pairs.insert((from, to), index);
    }

    /// Neighbours of `node` in the order their edges were added.
    pub fn neighbors(&self, node: &Node) -> Result<&[Node]> {
        self.position(node)
            .map(|position| self.adjacency[position].as_slice())
            .ok_or_else(|| Error::UnknownNode {
                name: node.name().to_string(),
                suggestions: Vec::new(),
            })
    }

    /// First directed edge from `source` to `destination`, if any.
    ///
    /// Duplicate ordered pairs are never stored, so the pair index returns the
    /// same edge a scan of the edge list would find first.
    pub fn edge_between(&self, source: &Node, destination: &Node) -> Option<&Edge> {
        let from = self.position(source)?;
        let to = self.position(destination)?;
        self.pairs.get(&(from, to)).map(|&index| &self.edges[index])
    }

    /// All edges whose source is `node`, in insertion order.
    pub fn outgoing_edges(&self, node: &Node) -> impl Iterator<Item = &Edge> + '_ {
        let indices = self
            .position(node)
            .map(|position| self.outgoing[position].as_slice())
            .unwrap_or(&[]);
        indices.iter().map(move |&index| &self.edges[index])
    }

    /// Sum the edge distances along `path`.
    ///
    /// A consecutive pair without an edge contributes zero. Use
    /// [`Graph::checked_path_distance`] to surface broken segments instead.
    pub fn path_distance(&self, path: &[Node]) -> f64 {
        path.windows(2)
            .filter_map(|pair| self.edge_between(&pair[0], &pair[1]))
            .map(|edge| edge.distance)
            .sum()
    }

    /// Sum the edge distances along `path`, failing on the first missing edge.
    pub fn checked_path_distance(&self, path: &[Node]) -> Result<f64> {
        let mut total = 0.0;
        for pair in path.windows(2) {
            let edge = self
                .edge_between(&pair[0], &pair[1])
                .ok_or_else(|| Error::MissingEdge {
                    from: pair[0].name().to_string(),
                    to: pair[1].name().to_string(),
                })?;
            total += edge.distance;
        }
        Ok(total)
    }

    /// Case-insensitive lookup. An exact match wins over other spellings,
    /// otherwise the first node in insertion order is returned.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        if let Some((node, _)) = self.positions.get_key_value(name) {
            return Some(node);
        }
        let wanted = name.to_lowercase();
        self.nodes
            .iter()
            .find(|node| node.name().to_lowercase() == wanted)
    }

    /// Resolve a landmark name, attaching close matches when it is unknown.
    pub fn resolve(&self, name: &str) -> Result<&Node> {
        self.node_by_name(name).ok_or_else(|| Error::UnknownNode {
            name: name.to_string(),
            suggestions: self.fuzzy_matches(name, MAX_SUGGESTIONS),
        })
    }

    /// Landmark names similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let wanted = name.to_lowercase();
        let mut scored: Vec<(f64, &Node)> = self
            .nodes
            .iter()
            .map(|node| {
                let score = strsim::jaro_winkler(&wanted, &node.name().to_lowercase());
                (score, node)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, node)| node.name().to_string())
            .collect()
    }

    /// Insertion-order position of `node`.
    pub fn position(&self, node: &Node) -> Option<usize> {
        self.positions.get(node).copied()
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.positions.contains_key(node)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_names(&self) -> Vec<String> {
        self.nodes.iter().map(|node| node.name().to_string()).collect()
    }

    /// All nodes except `except`, in insertion order. Menus use this to list
    /// destinations once the current location is chosen.
    pub fn nodes_except<'a>(&'a self, except: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |node| *node != except)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of stored directed edges (twice the number of connections).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Render the adjacency list as `Name -> [A, B]` lines.
    pub fn render_adjacency(&self) -> String {
        let mut buffer = String::new();
        for (node, neighbours) in self.nodes.iter().zip(&self.adjacency) {
            let joined = neighbours
                .iter()
                .map(Node::name)
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(buffer, "{} -> [{}]", node, joined);
        }
        buffer
    }
}
